// crates/truecity-core/src/model.rs
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One step of the cascade. A level's options depend on the code chosen
/// at its parent level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Country,
    Region,
    City,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Country, Level::Region, Level::City];

    pub fn parent(self) -> Option<Level> {
        match self {
            Level::Country => None,
            Level::Region => Some(Level::Country),
            Level::City => Some(Level::Region),
        }
    }

    pub fn child(self) -> Option<Level> {
        match self {
            Level::Country => Some(Level::Region),
            Level::Region => Some(Level::City),
            Level::City => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Country => "country",
            Level::Region => "region",
            Level::City => "city",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Raw entry as it comes from a location file: `{"i": "...", "n": "..."}`.
///
/// Some datasets carry numeric ids, so `i` accepts integers too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(deserialize_with = "code_from_str_or_int")]
    pub i: String,
    #[serde(default, deserialize_with = "name_or_empty")]
    pub n: String,
}

impl Entry {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            i: code.into(),
            n: name.into(),
        }
    }
}

fn code_from_str_or_int<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Code {
        Str(String),
        Int(i64),
    }
    Ok(match Code::deserialize(d)? {
        Code::Str(s) => s,
        Code::Int(n) => n.to_string(),
    })
}

fn name_or_empty<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(d)?.unwrap_or_default())
}

/// One selectable entry of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationOption {
    pub code: String,
    pub display_name: String,
}

impl LocationOption {
    pub fn new(code: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            display_name: display_name.into(),
        }
    }

    /// The always-present "nothing chosen" option.
    pub fn none() -> Self {
        Self::new("", "")
    }

    pub fn is_none(&self) -> bool {
        self.code.is_empty()
    }
}

/// What the user currently has picked at each level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub country: Option<LocationOption>,
    pub region: Option<LocationOption>,
    pub city: Option<LocationOption>,
}

impl Selection {
    pub fn get(&self, level: Level) -> Option<&LocationOption> {
        match level {
            Level::Country => self.country.as_ref(),
            Level::Region => self.region.as_ref(),
            Level::City => self.city.as_ref(),
        }
        .filter(|o| !o.is_none())
    }

    /// The first level (top-down) without a value, if any.
    pub fn first_missing(&self) -> Option<Level> {
        Level::ALL.into_iter().find(|l| self.get(*l).is_none())
    }

    pub fn is_complete(&self) -> bool {
        self.first_missing().is_none()
    }
}

/// `{value, name}` pair inside a [`StoredValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPart {
    pub value: String,
    pub name: String,
}

impl From<&LocationOption> for StoredPart {
    fn from(o: &LocationOption) -> Self {
        Self {
            value: o.code.clone(),
            name: o.display_name.clone(),
        }
    }
}

/// The serialized final selection the host persists:
/// `{"country":{"value","name"},"region":{...},"city":{...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredValue {
    pub country: StoredPart,
    pub region: StoredPart,
    pub city: StoredPart,
}

impl StoredValue {
    pub fn to_json(&self) -> String {
        // Only string fields; serializing cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// A part of a previously stored value. Older or hand-written values may
/// omit the name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedPart {
    pub value: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// A stored selection waiting to be re-applied, consumed level by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PendingSeed {
    #[serde(default)]
    pub country: Option<SeedPart>,
    #[serde(default)]
    pub region: Option<SeedPart>,
    #[serde(default)]
    pub city: Option<SeedPart>,
}

impl PendingSeed {
    pub fn is_empty(&self) -> bool {
        self.country.is_none() && self.region.is_none() && self.city.is_none()
    }

    /// Country code the seed was saved for, if it names one.
    pub fn country_code(&self) -> Option<&str> {
        self.country.as_ref().map(|p| p.value.as_str())
    }

    pub fn take(&mut self, level: Level) -> Option<SeedPart> {
        match level {
            Level::Country => self.country.take(),
            Level::Region => self.region.take(),
            Level::City => self.city.take(),
        }
    }

    pub fn discard(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_accepts_numeric_codes_and_missing_names() {
        let entries: Vec<Entry> =
            serde_json::from_str(r#"[{"i": 42, "n": "Bogotá"}, {"i": "x"}, {"i": "y", "n": null}]"#)
                .unwrap();
        assert_eq!(entries[0], Entry::new("42", "Bogotá"));
        assert_eq!(entries[1], Entry::new("x", ""));
        assert_eq!(entries[2], Entry::new("y", ""));
    }

    #[test]
    fn selection_reports_first_missing_level() {
        let mut sel = Selection {
            country: Some(LocationOption::new("CO", "Colombia")),
            region: Some(LocationOption::none()),
            city: Some(LocationOption::new("C9", "Medellín")),
        };
        assert_eq!(sel.first_missing(), Some(Level::Region));
        sel.region = Some(LocationOption::new("ANT", "Antioquia"));
        assert!(sel.is_complete());
    }

    #[test]
    fn stored_value_keeps_field_order() {
        let v = StoredValue {
            country: StoredPart { value: "CO".into(), name: "Colombia".into() },
            region: StoredPart { value: "ANT".into(), name: "Antioquia".into() },
            city: StoredPart { value: "1".into(), name: "Medellín".into() },
        };
        assert_eq!(
            v.to_json(),
            r#"{"country":{"value":"CO","name":"Colombia"},"region":{"value":"ANT","name":"Antioquia"},"city":{"value":"1","name":"Medellín"}}"#
        );
    }

    #[test]
    fn levels_chain_parent_to_child() {
        assert_eq!(Level::Country.child(), Some(Level::Region));
        assert_eq!(Level::City.parent(), Some(Level::Region));
        assert_eq!(Level::City.child(), None);
    }
}
