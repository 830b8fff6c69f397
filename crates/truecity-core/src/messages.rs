// crates/truecity-core/src/messages.rs

//! # Localized strings
//!
//! The selector needs nine user-facing strings. English defaults are built
//! in; a host can override any subset from a JSON object keyed by the
//! lowercase key names, e.g. `{"unknownregion": "Región desconocida"}`.

use crate::error::ConfigError;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKey {
    FailedToLoadCountryData,
    FailedToLoadRegionData,
    InvalidRegionsDataFormat,
    /// Template with `{city}` and `{country}` placeholders.
    LocationText,
    NotSet,
    SelectACity,
    SelectARegion,
    SelectLocationTitle,
    UnknownRegion,
}

impl MessageKey {
    pub const ALL: [MessageKey; 9] = [
        MessageKey::FailedToLoadCountryData,
        MessageKey::FailedToLoadRegionData,
        MessageKey::InvalidRegionsDataFormat,
        MessageKey::LocationText,
        MessageKey::NotSet,
        MessageKey::SelectACity,
        MessageKey::SelectARegion,
        MessageKey::SelectLocationTitle,
        MessageKey::UnknownRegion,
    ];

    fn default_text(self) -> &'static str {
        match self {
            MessageKey::FailedToLoadCountryData => "Failed to load country data",
            MessageKey::FailedToLoadRegionData => "Failed to load region data",
            MessageKey::InvalidRegionsDataFormat => "Invalid regions data format",
            MessageKey::LocationText => "{city}, {country}",
            MessageKey::NotSet => "Not set",
            MessageKey::SelectACity => "Select a city",
            MessageKey::SelectARegion => "Select a region",
            MessageKey::SelectLocationTitle => "Select location",
            MessageKey::UnknownRegion => "Unknown region",
        }
    }
}

static ENGLISH: Lazy<Messages> = Lazy::new(Messages::default);

/// Localized strings with per-key fallback to English.
#[derive(Debug, Clone, Default)]
pub struct Messages {
    overrides: HashMap<MessageKey, String>,
}

impl Messages {
    /// Shared English instance.
    pub fn english() -> &'static Messages {
        &ENGLISH
    }

    /// Parse overrides from a JSON object. Unknown keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: HashMap<String, String> = serde_json::from_str(json)?;
        let overrides = raw
            .into_iter()
            .filter_map(|(k, v)| {
                let key = serde_json::from_value::<MessageKey>(serde_json::Value::String(k.clone()));
                match key {
                    Ok(key) => Some((key, v)),
                    Err(_) => {
                        tracing::debug!(key = %k, "ignoring unknown message key");
                        None
                    }
                }
            })
            .collect();
        Ok(Self { overrides })
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let err = |reason: String| ConfigError::Messages {
            path: path.display().to_string(),
            reason,
        };
        let text = std::fs::read_to_string(path).map_err(|e| err(e.to_string()))?;
        Self::from_json(&text).map_err(|e| err(e.to_string()))
    }

    /// Like [`Messages::load_from_path`], but a failure only logs and
    /// leaves the English defaults in place.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load_from_path(path).unwrap_or_else(|e| {
            tracing::debug!(error = %e, "error loading strings, using defaults");
            Self::default()
        })
    }

    pub fn with(mut self, key: MessageKey, text: impl Into<String>) -> Self {
        self.overrides.insert(key, text.into());
        self
    }

    pub fn get(&self, key: MessageKey) -> &str {
        self.overrides
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }

    /// Fill the location template with a city and a country name.
    ///
    /// Both `{city}` and the host's `{$a->city}` spelling are understood.
    /// Substituted names are never re-scanned for placeholders.
    pub fn location_text(&self, city: &str, country: &str) -> String {
        render(self.get(MessageKey::LocationText), &[("city", city), ("country", country)])
    }
}

fn render(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let name = tail[1..end].trim_start_matches("$a->");
        match params.iter().find(|(k, _)| *k == name) {
            Some((_, v)) => out.push_str(v),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_key() {
        let m = Messages::english();
        for key in MessageKey::ALL {
            assert!(!m.get(key).is_empty(), "{key:?} has no text");
        }
        assert_eq!(m.get(MessageKey::UnknownRegion), "Unknown region");
    }

    #[test]
    fn overrides_fall_back_per_key() {
        let m = Messages::from_json(r#"{"unknownregion": "Región desconocida", "bogus": "x"}"#)
            .unwrap();
        assert_eq!(m.get(MessageKey::UnknownRegion), "Región desconocida");
        assert_eq!(m.get(MessageKey::NotSet), "Not set");
    }

    #[test]
    fn location_text_substitutes_once() {
        let m = Messages::default();
        assert_eq!(m.location_text("Medellín", "Colombia"), "Medellín, Colombia");

        let moodle = Messages::default().with(MessageKey::LocationText, "{$a->city} ({$a->country})");
        assert_eq!(moodle.location_text("Lyon", "France"), "Lyon (France)");

        // A name that looks like a placeholder stays literal.
        assert_eq!(m.location_text("{country}", "X"), "{country}, X");
    }

    #[test]
    fn unterminated_placeholder_is_kept() {
        let m = Messages::default().with(MessageKey::LocationText, "{city} in {country");
        assert_eq!(m.location_text("Lyon", "France"), "Lyon in {country");
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        let m = Messages::load_or_default("/definitely/not/here.json");
        assert_eq!(m.get(MessageKey::SelectACity), "Select a city");
    }
}
