// crates/truecity-core/src/error.rs
use crate::messages::MessageKey;
use crate::model::Level;
use thiserror::Error;

/// Why a location file could not be turned into a list of entries.
///
/// `file` names the level whose data file was requested: region lists live in
/// the country file (`Level::Country`), city lists in the region file
/// (`Level::Region`).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DataLoadError {
    #[error("failed to fetch {url}: {reason}")]
    Transport {
        file: Level,
        url: String,
        reason: String,
    },

    #[error("unexpected HTTP status {status} from {url}")]
    Status { file: Level, url: String, status: u16 },

    #[error("{url} is not valid JSON: {reason}")]
    Malformed {
        file: Level,
        url: String,
        reason: String,
    },

    #[error("{url} does not contain a JSON array")]
    InvalidFormat { file: Level, url: String },
}

impl DataLoadError {
    pub fn file(&self) -> Level {
        match self {
            Self::Transport { file, .. }
            | Self::Status { file, .. }
            | Self::Malformed { file, .. }
            | Self::InvalidFormat { file, .. } => *file,
        }
    }

    /// The localized message shown to the user for this failure.
    pub fn message_key(&self) -> MessageKey {
        match self {
            Self::InvalidFormat { .. } => MessageKey::InvalidRegionsDataFormat,
            _ if self.file() == Level::Region => MessageKey::FailedToLoadRegionData,
            _ => MessageKey::FailedToLoadCountryData,
        }
    }
}

/// A commit was attempted before every level had a value.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("incomplete selection: no {missing} selected")]
    IncompleteSelection { missing: Level },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("base URL is empty")]
    EmptyBaseUrl,

    #[error("unique id is empty")]
    EmptyUniqueId,

    #[error("cannot read messages from {path}: {reason}")]
    Messages { path: String, reason: String },
}

/// Crate-level error for the tooling entry points (builder, config, CLI).
#[derive(Debug, Error)]
pub enum TrueCityError {
    #[error(transparent)]
    DataLoad(#[from] DataLoadError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("not found: {0}")]
    NotFound(String),
}

pub type Result<T, E = TrueCityError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_key_follows_the_requested_file() {
        let country = DataLoadError::Status {
            file: Level::Country,
            url: "x".into(),
            status: 404,
        };
        let region = DataLoadError::Transport {
            file: Level::Region,
            url: "x".into(),
            reason: "refused".into(),
        };
        let format = DataLoadError::InvalidFormat {
            file: Level::Region,
            url: "x".into(),
        };
        assert_eq!(country.message_key(), MessageKey::FailedToLoadCountryData);
        assert_eq!(region.message_key(), MessageKey::FailedToLoadRegionData);
        assert_eq!(format.message_key(), MessageKey::InvalidRegionsDataFormat);
    }
}
