// crates/truecity-core/src/builder.rs
#![cfg(feature = "builder")]

//! # Data-tree builder
//!
//! Splits the upstream countries+states+cities dump into the static layout
//! the selector reads:
//!
//! ```text
//! out/countries/{iso2}.json          [{"i": region code, "n": region name}, ...]
//! out/regions/{iso2}_{region}.json   [{"i": city id,     "n": city name}, ...]
//! ```

use crate::error::{Result, TrueCityError};
use crate::model::Entry;
use crate::raw::{CountriesRaw, StateRaw};
use crate::source::dir::open_stream;
use serde::Serialize;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DATA_REPO_URL: &str = "https://github.com/dr5hn/countries-states-cities-database/blob/master/json/countries%2Bstates%2Bcities.json.gz";

/// Counts of what a build wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TreeStats {
    pub countries: usize,
    pub regions: usize,
    pub cities: usize,
}

/// Read the dump at `source_path` (`.json` or, with `compact`, `.json.gz`)
/// and write the file tree below `out_dir`.
pub fn build_tree(source_path: &Path, out_dir: &Path) -> Result<TreeStats> {
    tracing::info!(source = %source_path.display(), out = %out_dir.display(), "building location tree");

    let reader = open_stream(source_path).map_err(|e| {
        TrueCityError::NotFound(format!(
            "dataset not found at {}: {e} (download it from {DATA_REPO_URL})",
            source_path.display()
        ))
    })?;
    let raw: CountriesRaw = serde_json::from_reader(reader)?;
    write_tree(raw, out_dir)
}

/// Write an already-parsed dump.
pub fn write_tree(raw: CountriesRaw, out_dir: &Path) -> Result<TreeStats> {
    let countries_dir = out_dir.join("countries");
    let regions_dir = out_dir.join("regions");
    fs::create_dir_all(&countries_dir)?;
    fs::create_dir_all(&regions_dir)?;

    let mut stats = TreeStats::default();
    for country in raw {
        let iso2 = path_safe(&country.iso2);
        if iso2.is_empty() {
            tracing::debug!(name = %country.name, "skipping country without ISO2 code");
            continue;
        }

        let mut seen = HashSet::new();
        let mut regions = Vec::with_capacity(country.states.len());
        for state in &country.states {
            let Some(code) = region_code(state) else {
                tracing::debug!(country = %iso2, state = %state.name, "skipping region without code");
                continue;
            };
            if !seen.insert(code.clone()) {
                tracing::warn!(country = %iso2, code = %code, "duplicate region code, keeping the first");
                continue;
            }

            let cities: Vec<Entry> = state
                .cities
                .iter()
                .filter_map(|c| c.id.map(|id| Entry::new(id.to_string(), c.name.as_str())))
                .collect();
            stats.cities += cities.len();
            write_json(&regions_dir.join(format!("{iso2}_{code}.json")), &cities)?;

            regions.push(Entry::new(code, state.name.as_str()));
        }

        stats.regions += regions.len();
        stats.countries += 1;
        write_json(&countries_dir.join(format!("{iso2}.json")), &regions)?;
    }

    tracing::info!(
        countries = stats.countries,
        regions = stats.regions,
        cities = stats.cities,
        "location tree written"
    );
    Ok(stats)
}

/// State ISO code when present, else its numeric id.
fn region_code(state: &StateRaw) -> Option<String> {
    state
        .iso2
        .as_deref()
        .map(path_safe)
        .filter(|c| !c.is_empty())
        .or_else(|| state.id.map(|id| id.to_string()))
}

/// Keep codes usable as file-name parts.
fn path_safe(code: &str) -> String {
    code.trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '-' })
        .collect()
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Level;
    use crate::raw::{CityRaw, CountryRaw};
    use crate::source::parse_entries;

    fn scratch(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("truecity-builder-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn writes_one_file_per_country_and_region() {
        let raw = vec![CountryRaw {
            name: "Colombia".into(),
            iso2: "CO".into(),
            states: vec![
                StateRaw {
                    id: Some(2877),
                    name: "Antioquia".into(),
                    iso2: Some("ANT".into()),
                    cities: vec![
                        CityRaw { id: Some(20512), name: "Medellín".into() },
                        CityRaw { id: None, name: "Nowhere".into() },
                    ],
                },
                StateRaw {
                    id: Some(2900),
                    name: "San Andrés y Providencia".into(),
                    iso2: None,
                    cities: Vec::new(),
                },
            ],
        }];
        let out = scratch("basic");
        let stats = write_tree(raw, &out).unwrap();
        assert_eq!(stats, TreeStats { countries: 1, regions: 2, cities: 1 });

        let regions = fs::read(out.join("countries/CO.json")).unwrap();
        let regions = parse_entries(Level::Country, "CO", &regions).unwrap();
        assert_eq!(regions[0], Entry::new("ANT", "Antioquia"));
        assert_eq!(regions[1].i, "2900");

        let cities = fs::read(out.join("regions/CO_ANT.json")).unwrap();
        let cities = parse_entries(Level::Region, "CO_ANT", &cities).unwrap();
        assert_eq!(cities, vec![Entry::new("20512", "Medellín")]);
        assert!(out.join("regions/CO_2900.json").exists());

        let _ = fs::remove_dir_all(&out);
    }

    #[test]
    fn codes_are_made_path_safe() {
        assert_eq!(path_safe(" A/B_c "), "A-B-c");
    }
}
