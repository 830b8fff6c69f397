// crates/truecity-core/src/source/http.rs
use super::{parse_entries, LocationSource};
use crate::controller::FetchRequest;
use crate::error::DataLoadError;
use crate::model::Entry;
use reqwest::Client;

/// Fetches location files from a web server.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl LocationSource for HttpSource {
    async fn fetch(&self, request: &FetchRequest) -> Result<Vec<Entry>, DataLoadError> {
        let file = request.file();
        let url = request.url(&self.base_url);
        let transport = |e: reqwest::Error| DataLoadError::Transport {
            file,
            url: url.clone(),
            reason: e.to_string(),
        };

        let response = self.client.get(&url).send().await.map_err(transport)?;
        let status = response.status();
        if !status.is_success() {
            return Err(DataLoadError::Status {
                file,
                url: url.clone(),
                status: status.as_u16(),
            });
        }
        let body = response.bytes().await.map_err(transport)?;
        parse_entries(file, &url, &body)
    }
}
