// crates/truecity-core/src/profile.rs

//! What the host profile form does with a stored location.

use crate::messages::{MessageKey, Messages};
use serde::Deserialize;

/// The two user-record fields the host writes on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostRecord {
    /// Country code (`country.value`).
    pub country: Option<String>,
    /// City display name (`city.name`), not its code.
    pub city: Option<String>,
}

#[derive(Deserialize)]
struct Part {
    value: Option<String>,
    name: Option<String>,
}

#[derive(Deserialize)]
struct Submitted {
    country: Option<Part>,
    city: Option<Part>,
}

/// Split a submitted value into the user-record fields.
///
/// Returns `None` when the value is empty or not a JSON object, in which
/// case the host leaves the record alone.
pub fn persisted_fields(stored: &str) -> Option<HostRecord> {
    let stored = stored.trim();
    if stored.is_empty() {
        return None;
    }
    let submitted: Submitted = serde_json::from_str(stored)
        .map_err(|e| tracing::debug!(error = %e, "submitted location is not an object"))
        .ok()?;
    Some(HostRecord {
        country: submitted.country.and_then(|p| p.value),
        city: submitted.city.and_then(|p| p.name),
    })
}

/// Read-only text for a user's current location. `country` is the
/// already-translated country name.
pub fn display_data(city: &str, country: &str, messages: &Messages) -> String {
    match (city.trim().is_empty(), country.trim().is_empty()) {
        (true, true) => messages.get(MessageKey::NotSet).to_owned(),
        (true, false) => country.to_owned(),
        (false, true) => city.to_owned(),
        (false, false) => messages.location_text(city, country),
    }
}
