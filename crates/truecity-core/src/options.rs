// crates/truecity-core/src/options.rs
use crate::messages::{MessageKey, Messages};
use crate::model::{Entry, Level, LocationOption};
use crate::text::{collate, is_blank_or_unknown};
use std::collections::HashSet;

/// Turn the entries of a location file into dropdown options.
///
/// - sorted by name with [`collate`]
/// - the first occurrence of a code wins
/// - region names that are blank or `UNKNOWN` show the localized
///   "unknown region" label; city names are used as they are
///
/// The returned list does not include the empty option; widgets add it.
pub fn prepare_options(level: Level, mut entries: Vec<Entry>, messages: &Messages) -> Vec<LocationOption> {
    entries.sort_by(|a, b| collate(&a.n, &b.n));

    let mut seen = HashSet::with_capacity(entries.len());
    let mut out = Vec::with_capacity(entries.len());
    for entry in entries {
        if entry.i.is_empty() || !seen.insert(entry.i.clone()) {
            tracing::debug!(%level, code = %entry.i, "skipping empty or duplicate code");
            continue;
        }
        let label = if level == Level::Region && is_blank_or_unknown(&entry.n) {
            messages.get(MessageKey::UnknownRegion).to_owned()
        } else {
            entry.n
        };
        out.push(LocationOption::new(entry.i, label));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(opts: &[LocationOption]) -> Vec<&str> {
        opts.iter().map(|o| o.display_name.as_str()).collect()
    }

    #[test]
    fn regions_sort_by_name() {
        let entries = vec![Entry::new("a", "Zeta"), Entry::new("b", "Alpha")];
        let opts = prepare_options(Level::Region, entries, Messages::english());
        assert_eq!(labels(&opts), vec!["Alpha", "Zeta"]);
        assert_eq!(opts[0].code, "b");
    }

    #[test]
    fn unknown_label_applies_to_regions_only() {
        let entries = || {
            vec![
                Entry::new("1", "UNKNOWN"),
                Entry::new("2", " "),
                Entry::new("3", "Bolívar"),
            ]
        };
        let regions = prepare_options(Level::Region, entries(), Messages::english());
        assert_eq!(labels(&regions), vec!["Unknown region", "Bolívar", "Unknown region"]);

        let cities = prepare_options(Level::City, entries(), Messages::english());
        assert_eq!(labels(&cities), vec![" ", "Bolívar", "UNKNOWN"]);
    }

    #[test]
    fn duplicate_codes_keep_first_in_sorted_order() {
        let entries = vec![
            Entry::new("x", "Second"),
            Entry::new("x", "First"),
            Entry::new("", "No code"),
        ];
        let opts = prepare_options(Level::City, entries, Messages::english());
        assert_eq!(opts, vec![LocationOption::new("x", "First")]);
    }
}
