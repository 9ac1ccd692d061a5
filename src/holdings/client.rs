use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use crate::core::{AppConfig, FetchError};

/// Network capability behind the resolver. Production wraps reqwest; tests
/// substitute canned bodies or failures.
#[async_trait]
pub trait RemoteSource: Send + Sync {
    /// Fetch the raw response body from the holdings endpoint.
    async fn fetch_body(&self) -> Result<String, FetchError>;
}

#[derive(Clone)]
pub struct HttpRemote {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpRemote {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::new(config.endpoint.clone(), config.http_timeout)
    }
}

#[async_trait]
impl RemoteSource for HttpRemote {
    async fn fetch_body(&self) -> Result<String, FetchError> {
        let resp = self.http.get(&self.endpoint).send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(FetchError::Endpoint(format!("HTTP {status}: {text}")));
        }

        debug!(bytes = text.len(), "holdings endpoint responded");
        Ok(text)
    }
}
