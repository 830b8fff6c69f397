// crates/truecity-core/src/raw.rs
use serde::Deserialize;

/// Raw city structure as it comes from the upstream JSON.
#[derive(Debug, Deserialize)]
pub struct CityRaw {
    pub id: Option<i64>,
    pub name: String,
}

/// Raw state / region structure from JSON.
#[derive(Debug, Deserialize)]
pub struct StateRaw {
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(default)]
    pub cities: Vec<CityRaw>,
}

/// Raw country structure from JSON.
/// NOTE: This type mirrors the external dataset and may be subject to that dataset's license.
/// Only the fields the file tree needs are kept; the rest is ignored.
#[derive(Debug, Deserialize)]
pub struct CountryRaw {
    pub name: String,
    pub iso2: String,
    #[serde(default)]
    pub states: Vec<StateRaw>,
}

pub type CountriesRaw = Vec<CountryRaw>;
