// crates/truecity-core/src/source/mod.rs

//! # Location sources
//!
//! Where the static location files come from. All sources share the layout
//! `countries/{cc}.json` (regions of a country) and `regions/{cc}_{rc}.json`
//! (cities of a region), and the payload rule that a file must hold a JSON
//! array of `{"i", "n"}` objects.

use crate::controller::FetchRequest;
use crate::error::DataLoadError;
use crate::model::{Entry, Level};
use serde_json::Value;

pub(crate) mod dir;
#[cfg(feature = "http")]
mod http;
mod memory;

pub use dir::DirSource;
#[cfg(feature = "http")]
pub use http::HttpSource;
pub use memory::MemorySource;

/// Something that can answer a [`FetchRequest`].
///
/// Futures are not required to be `Send`: one selector runs on one thread
/// (a browser event loop or a current-thread runtime).
#[allow(async_fn_in_trait)]
pub trait LocationSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError>;
}

impl<S: LocationSource> LocationSource for &S {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError> {
        (**self).fetch(request).await
    }
}

/// Decode a location file body.
///
/// Anything but a JSON array is rejected. Array elements that are not
/// `{"i", "n"}` objects are skipped.
pub fn parse_entries(file: Level, url: &str, body: &[u8]) -> Result<Vec<Entry>, DataLoadError> {
    let value: Value = serde_json::from_slice(body).map_err(|e| DataLoadError::Malformed {
        file,
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    let Value::Array(items) = value else {
        tracing::debug!(%url, "invalid {file} data format");
        return Err(DataLoadError::InvalidFormat {
            file,
            url: url.to_owned(),
        });
    };
    Ok(items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Entry>(item) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::debug!(%url, error = %e, "skipping malformed entry");
                None
            }
        })
        .collect())
}
