use crate::config::constants::{MIN_BODY_BYTES, PAGE_TIMEOUT_MS};
use crate::network::errors::NetworkError;
use crate::network::identity::BrowserIdentity;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

// * The HTTP engine used to harvest source pages.
pub struct FastClient {
    inner: Client,
    min_body_bytes: usize,
}

impl FastClient {
    // * Initializes the client with a desktop browser identity.
    pub fn new() -> Result<Self, NetworkError> {
        let identity = BrowserIdentity::desktop_chrome();

        let inner = Client::builder()
            .default_headers(identity.headers()?)
            .cookie_store(true)
            .gzip(true)
            .brotli(true)
            .timeout(Duration::from_millis(PAGE_TIMEOUT_MS))
            .build()?;

        Ok(Self {
            inner,
            min_body_bytes: MIN_BODY_BYTES,
        })
    }

    // * Overrides the minimum accepted body size.
    pub fn with_min_body_bytes(mut self, min_body_bytes: usize) -> Self {
        self.min_body_bytes = min_body_bytes;
        self
    }

    // * Fetches a URL and rejects blocked, failed or near-empty responses.
    pub async fn fetch(&self, url: &str) -> Result<String, NetworkError> {
        let resp = self.inner.get(url).send().await?;
        let status = resp.status();

        if status.as_u16() == 403 || status.as_u16() == 429 {
            return Err(NetworkError::HardBan(status.as_u16()));
        }

        if !status.is_success() {
            return Err(NetworkError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        debug!(url, bytes = body.len(), "Fetched page");

        if body.len() < self.min_body_bytes {
            return Err(NetworkError::EmptyResponse(self.min_body_bytes));
        }

        Ok(body)
    }
}
