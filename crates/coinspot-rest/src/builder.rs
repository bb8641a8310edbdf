//! Client Builder Pattern
//!
//! # Example
//!
//! ```
//! use coinspot_rest::{Coinspot, Hooks};
//!
//! let client = Coinspot::builder()
//!     .with_key_and_secret(Some("key".into()), Some("secret".into()))
//!     .with_timeout(10)
//!     .with_hooks(Hooks::tracing())
//!     .build()
//!     .unwrap();
//! assert!(client.is_authenticated());
//! ```

use coinspot_auth::Credentials;

use crate::client::Coinspot;
use crate::config::ClientConfig;
use crate::error::RestResult;
use crate::hooks::Hooks;

/// Builder for configuring a [`Coinspot`] client
#[derive(Debug, Clone, Default)]
pub struct CoinspotBuilder {
    /// Connection and credential settings
    pub config: ClientConfig,

    /// Call observers
    pub hooks: Hooks,
}

impl CoinspotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use these credentials
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.config.credentials = Some(credentials);
        self
    }

    /// Use a key and secret if both are present and non-empty
    ///
    /// Otherwise the client is built without credentials.
    pub fn with_key_and_secret(
        mut self,
        api_key: Option<String>,
        api_secret: Option<String>,
    ) -> Self {
        self.config.credentials = Credentials::from_parts(api_key, api_secret);
        self
    }

    /// Replace the whole configuration
    pub fn with_config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set request timeout in seconds
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.config = self.config.with_timeout(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config = self.config.with_user_agent(user_agent);
        self
    }

    /// Point both API namespaces at one host
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.with_base_url(url);
        self
    }

    /// Observe every call
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Build the client
    pub fn build(self) -> RestResult<Coinspot> {
        Coinspot::with_config(self.config, self.hooks)
    }
}
