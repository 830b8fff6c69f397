// crates/truecity-core/src/config.rs
use crate::error::ConfigError;

/// Per-field settings supplied by the host when it renders the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    unique_id: String,
    base_url: String,
}

impl SelectorConfig {
    /// `base_url` points at the directory holding `countries/` and
    /// `regions/`. Trailing slashes are dropped; an empty URL means the
    /// field is not configured and must not be rendered.
    pub fn new(unique_id: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let unique_id = unique_id.into();
        if unique_id.trim().is_empty() {
            return Err(ConfigError::EmptyUniqueId);
        }
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        Ok(Self {
            unique_id,
            base_url: base_url.to_owned(),
        })
    }

    pub fn unique_id(&self) -> &str {
        &self.unique_id
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `true` when the base points at a web server rather than a directory.
    pub fn is_remote(&self) -> bool {
        self.base_url.starts_with("http://") || self.base_url.starts_with("https://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slashes_are_trimmed() {
        let c = SelectorConfig::new("f1", "https://cdn.example.org/geo//").unwrap();
        assert_eq!(c.base_url(), "https://cdn.example.org/geo");
        assert!(c.is_remote());
    }

    #[test]
    fn empty_base_is_rejected() {
        assert!(matches!(SelectorConfig::new("f1", " / "), Err(ConfigError::EmptyBaseUrl)));
        assert!(matches!(SelectorConfig::new("", "/data"), Err(ConfigError::EmptyUniqueId)));
    }
}
