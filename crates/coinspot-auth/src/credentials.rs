//! API credentials for CoinSpot's authenticated endpoints
//!
//! # Security
//!
//! The secret is stored using the `secrecy` crate which:
//! - Zeroizes memory on drop
//! - Prevents accidental logging via Debug impl
//! - Provides explicit access via `expose_secret()`

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::error::{AuthError, AuthResult};
use crate::signer;

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "COINSPOT_API_KEY";
/// Environment variable holding the API secret
pub const API_SECRET_ENV: &str = "COINSPOT_API_SECRET";

/// API key and secret for authenticated requests
///
/// Immutable once constructed. The secret never appears in `Debug` output.
pub struct Credentials {
    /// API key (sent in the `key` header)
    api_key: String,
    /// API secret (HMAC key, zeroized on drop)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Create credentials from environment variables
    ///
    /// Reads `COINSPOT_API_KEY` and `COINSPOT_API_SECRET` from the environment.
    pub fn from_env() -> AuthResult<Self> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_KEY_ENV.to_string()))?;
        let api_secret = std::env::var(API_SECRET_ENV)
            .map_err(|_| AuthError::EnvVarNotSet(API_SECRET_ENV.to_string()))?;

        debug!("Loaded API credentials from environment");
        Ok(Self::new(api_key, api_secret))
    }

    /// Build credentials only when both halves are present and non-empty
    pub fn from_parts(api_key: Option<String>, api_secret: Option<String>) -> Option<Self> {
        match (api_key, api_secret) {
            (Some(key), Some(secret)) if !key.is_empty() && !secret.is_empty() => {
                Some(Self::new(key, secret))
            }
            _ => {
                debug!("Incomplete credentials, staying unauthenticated");
                None
            }
        }
    }

    /// Get the API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a serialized request body with the held secret
    pub fn sign(&self, payload: &str) -> String {
        signer::sign(self.api_secret.expose_secret(), payload)
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: SecretString::from(self.api_secret.expose_secret().to_owned()),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix: String = self.api_key.chars().take(8).collect();
        f.debug_struct("Credentials")
            .field("api_key", &format!("{}...", prefix))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let creds = Credentials::new("0123456789abcdef", "super-secret-value");
        let debug = format!("{:?}", creds);
        assert!(!debug.contains("super-secret-value"));
        assert!(!debug.contains("0123456789abcdef"));
        assert!(debug.contains("01234567..."));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn test_short_key_debug() {
        let creds = Credentials::new("abc", "s");
        assert!(format!("{:?}", creds).contains("abc..."));
    }

    #[test]
    fn test_sign_uses_secret() {
        let creds = Credentials::new("key", "test-secret");
        let payload = r#"{"cointype":"BTC","nonce":1700000000000}"#;
        assert_eq!(creds.sign(payload), signer::sign("test-secret", payload));
    }

    #[test]
    fn test_clone_preserves_signing() {
        let creds = Credentials::new("key", "secret");
        let cloned = creds.clone();
        assert_eq!(cloned.api_key(), "key");
        assert_eq!(cloned.sign("{}"), creds.sign("{}"));
    }

    #[test]
    fn test_from_parts_requires_both() {
        assert!(Credentials::from_parts(Some("k".into()), Some("s".into())).is_some());
        assert!(Credentials::from_parts(Some("k".into()), None).is_none());
        assert!(Credentials::from_parts(None, Some("s".into())).is_none());
        assert!(Credentials::from_parts(Some(String::new()), Some("s".into())).is_none());
        assert!(Credentials::from_parts(None, None).is_none());
    }
}
