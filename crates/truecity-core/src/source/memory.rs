// crates/truecity-core/src/source/memory.rs
use super::{parse_entries, LocationSource};
use crate::controller::FetchRequest;
use crate::error::DataLoadError;
use crate::model::Entry;
use std::cell::RefCell;
use std::collections::HashMap;

/// Location files held in memory, keyed by relative path
/// (`countries/CO.json`). Records every path it was asked for.
#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
    requested: RefCell<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file from any JSON text (valid or not).
    pub fn with_file(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.files.insert(path.into(), body.into());
        self
    }

    pub fn with_regions(self, country: &str, entries: &[Entry]) -> Self {
        self.with_entries(format!("countries/{country}.json"), entries)
    }

    pub fn with_cities(self, country: &str, region: &str, entries: &[Entry]) -> Self {
        self.with_entries(format!("regions/{country}_{region}.json"), entries)
    }

    fn with_entries(self, path: String, entries: &[Entry]) -> Self {
        let body = serde_json::to_vec(entries).unwrap_or_default();
        self.with_file(path, body)
    }

    /// Paths fetched so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl LocationSource for MemorySource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError> {
        let path = request.relative_path();
        self.requested.borrow_mut().push(path.clone());
        match self.files.get(&path) {
            Some(body) => parse_entries(request.file(), &path, body),
            None => Err(DataLoadError::Status {
                file: request.file(),
                url: path,
                status: 404,
            }),
        }
    }
}
