// crates/truecity-core/src/text.rs
use std::cmp::Ordering;

/// Convert a string into a folded key suitable for comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// # Examples
///
/// ```rust
/// use truecity_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Bogotá"), "bogota");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Locale-style ordering of display names.
///
/// Names compare by their folded form first, so accents and case do not
/// push `Ávila` after `Zamora`. Ties fall back to the lowercase original
/// (accented after plain), then to the raw string so the order is total.
///
/// ```rust
/// use std::cmp::Ordering;
/// use truecity_core::text::collate;
///
/// assert_eq!(collate("Ávila", "Zamora"), Ordering::Less);
/// assert_eq!(collate("alpha", "Beta"), Ordering::Less);
/// ```
pub fn collate(a: &str, b: &str) -> Ordering {
    fold_key(a)
        .cmp(&fold_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Name is empty, whitespace only, or the dataset's `UNKNOWN` marker.
pub fn is_blank_or_unknown(name: &str) -> bool {
    let t = name.trim();
    t.is_empty() || name == "UNKNOWN"
}
