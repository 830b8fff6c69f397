// crates/truecity-core/src/serializer.rs

//! Conversion between a [`Selection`] and the single value the host stores.

use crate::error::ValidationError;
use crate::messages::Messages;
use crate::model::{Level, PendingSeed, Selection, StoredPart, StoredValue};

/// Result of a successful commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Committed {
    pub value: StoredValue,
    /// One-line "{city}, {country}" text for the display element.
    pub summary: String,
}

impl Committed {
    pub fn json(&self) -> String {
        self.value.to_json()
    }
}

/// Build the stored value from a complete selection.
///
/// The names are the labels as displayed, which for regions may be the
/// localized "unknown region" text rather than the name in the data file.
pub fn commit(selection: &Selection, messages: &Messages) -> Result<Committed, ValidationError> {
    let part = |level| {
        selection
            .get(level)
            .ok_or(ValidationError::IncompleteSelection { missing: level })
    };
    let country = part(Level::Country)?;
    let region = part(Level::Region)?;
    let city = part(Level::City)?;

    let summary = messages.location_text(&city.display_name, &country.display_name);
    Ok(Committed {
        value: StoredValue {
            country: StoredPart::from(country),
            region: StoredPart::from(region),
            city: StoredPart::from(city),
        },
        summary,
    })
}

/// Parse a stored value into a seed. Absent, empty or malformed input
/// yields an empty seed; a malformed value is only logged.
pub fn seed(stored: Option<&str>) -> PendingSeed {
    parse_seed(stored).unwrap_or_default()
}

/// Optional-result form of [`seed`].
pub fn parse_seed(stored: Option<&str>) -> Option<PendingSeed> {
    let raw = stored.map(str::trim).filter(|s| !s.is_empty())?;
    match serde_json::from_str::<PendingSeed>(raw) {
        Ok(seed) => Some(seed),
        Err(e) => {
            tracing::debug!(error = %e, "error parsing current location JSON");
            None
        }
    }
}

/// Parse a complete stored value (all three parts with names).
pub fn parse_stored(stored: &str) -> Option<StoredValue> {
    serde_json::from_str(stored.trim())
        .map_err(|e| tracing::debug!(error = %e, "stored value is not a complete location"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LocationOption;

    fn full() -> Selection {
        Selection {
            country: Some(LocationOption::new("CO", "Colombia")),
            region: Some(LocationOption::new("ANT", "Antioquia")),
            city: Some(LocationOption::new("C9", "Medellín")),
        }
    }

    #[test]
    fn commit_builds_value_and_summary() {
        let c = commit(&full(), Messages::english()).unwrap();
        assert_eq!(c.value.city.name, "Medellín");
        assert_eq!(c.value.region.value, "ANT");
        assert_eq!(c.summary, "Medellín, Colombia");
    }

    #[test]
    fn commit_refuses_any_missing_level() {
        for level in Level::ALL {
            let mut sel = full();
            match level {
                Level::Country => sel.country = None,
                Level::Region => sel.region = Some(LocationOption::none()),
                Level::City => sel.city = None,
            }
            assert_eq!(
                commit(&sel, Messages::english()),
                Err(ValidationError::IncompleteSelection { missing: level })
            );
        }
    }

    #[test]
    fn committed_json_seeds_the_same_codes() {
        let c = commit(&full(), Messages::english()).unwrap();
        let s = seed(Some(&c.json()));
        assert_eq!(s.country_code(), Some("CO"));
        assert_eq!(s.region.unwrap().name.as_deref(), Some("Antioquia"));
        assert_eq!(s.city.unwrap().value, "C9");
    }

    #[test]
    fn seed_degrades_silently() {
        assert!(seed(None).is_empty());
        assert!(seed(Some("")).is_empty());
        assert!(seed(Some("{not json")).is_empty());
        assert!(seed(Some("[1,2]")).is_empty());
        assert_eq!(parse_seed(Some("  ")), None);
    }

    #[test]
    fn seed_accepts_values_without_names() {
        let s = seed(Some(r#"{"country":{"value":"CO"},"region":{"value":"R1"},"city":{"value":"C9"}}"#));
        assert_eq!(s.country_code(), Some("CO"));
        assert_eq!(s.region.as_ref().map(|p| p.value.as_str()), Some("R1"));
        assert_eq!(s.city.as_ref().and_then(|p| p.name.clone()), None);
    }

    #[test]
    fn partial_value_is_a_seed_but_not_a_stored_value() {
        let json = r#"{"country":{"value":"CO","name":"Colombia"}}"#;
        assert_eq!(seed(Some(json)).country_code(), Some("CO"));
        assert!(parse_stored(json).is_none());
    }
}
