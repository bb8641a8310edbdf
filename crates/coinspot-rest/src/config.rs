//! Client configuration

use coinspot_auth::Credentials;
use reqwest::Client;
use std::time::Duration;

use crate::error::{RestError, RestResult};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Production host for both API namespaces
pub const DEFAULT_BASE_URL: &str = "https://www.coinspot.com.au";

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials (optional)
    pub credentials: Option<Credentials>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
    /// Host serving `/api/v2`
    pub api_url: String,
    /// Host serving `/pubapi/v2`
    pub public_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
            api_url: DEFAULT_BASE_URL.to_string(),
            public_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the authenticated API host (no trailing path)
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = trim_base(url.into());
        self
    }

    /// Set the public API host (no trailing path)
    pub fn with_public_url(mut self, url: impl Into<String>) -> Self {
        self.public_url = trim_base(url.into());
        self
    }

    /// Point both namespaces at one host, e.g. a mock server
    pub fn with_base_url(self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.with_api_url(url.clone()).with_public_url(url)
    }

    /// Build the HTTP client these settings describe
    pub(crate) fn build_http_client(&self) -> RestResult<Client> {
        for url in [&self.api_url, &self.public_url] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(RestError::Config(format!("invalid base URL: {url:?}")));
            }
        }

        let user_agent = self
            .user_agent
            .clone()
            .unwrap_or_else(|| format!("coinspot-rest/{}", env!("CARGO_PKG_VERSION")));

        Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| RestError::Config(format!("failed to create HTTP client: {e}")))
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
