use crate::network::errors::NetworkError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};

// * BrowserIdentity describes the desktop browser the harvester presents as.
// * Tourism portals serve reduced pages to unknown agents.
#[derive(Debug, Clone)]
pub struct BrowserIdentity {
    pub user_agent: String,
    pub accept_language: String,
}

impl BrowserIdentity {
    // * Desktop Chrome 120 on Windows.
    pub fn desktop_chrome() -> Self {
        let full_version = "120.0.6099.109";

        Self {
            user_agent: format!(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/{} Safari/537.36",
                full_version
            ),
            accept_language: "en-US,en;q=0.9".to_string(),
        }
    }

    // * Builds the default header set sent with every page request.
    pub fn headers(&self) -> Result<HeaderMap, NetworkError> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_str(&self.accept_language)?);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        );
        headers.insert("Upgrade-Insecure-Requests", HeaderValue::from_static("1"));
        Ok(headers)
    }
}

impl Default for BrowserIdentity {
    fn default() -> Self {
        Self::desktop_chrome()
    }
}
