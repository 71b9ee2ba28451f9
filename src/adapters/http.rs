use crate::core::{ContentStore, Record, Result};
use crate::domain::model::Properties;
use crate::utils::error::ThemeError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Reads records from a content server's JSON export (`<path>.infinity.json`).
pub struct HttpStore {
    endpoint: String,
    credentials: Option<Credentials>,
    client: Client,
}

impl HttpStore {
    pub fn new(endpoint: &str, timeout: Duration, credentials: Option<Credentials>) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            credentials,
            client,
        })
    }

    /// GETs `<path><suffix>`; 404 is `None`, other non-success statuses are repository failures.
    fn fetch_json(&self, path: &str, suffix: &str) -> Result<Option<serde_json::Value>> {
        let url = format!("{}{}{}", self.endpoint, path.trim_end_matches('/'), suffix);
        tracing::debug!("Fetching {}", url);

        let mut request = self.client.get(&url);
        if let Some(creds) = &self.credentials {
            request = request.basic_auth(&creds.username, Some(&creds.password));
        }

        let response = request.send()?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(ThemeError::repository(
                path,
                format!("content server answered {}", status),
            ));
        }

        Ok(Some(response.json()?))
    }
}

impl ContentStore for HttpStore {
    fn get(&self, path: &str) -> Result<Option<Record>> {
        if !path.starts_with('/') {
            return Ok(None);
        }

        Ok(self
            .fetch_json(path, ".infinity.json")?
            .and_then(|body| Record::from_json(path.trim_end_matches('/'), &body)))
    }

    /// Shallow `<path>.json` read, so large subtrees are never requested.
    fn get_properties(&self, path: &str) -> Result<Option<Properties>> {
        if !path.starts_with('/') {
            return Ok(None);
        }

        Ok(self
            .fetch_json(path, ".json")?
            .and_then(|body| Record::from_json(path.trim_end_matches('/'), &body))
            .map(|record| record.properties))
    }
}
