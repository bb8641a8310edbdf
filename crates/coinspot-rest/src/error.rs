//! Error types for REST API operations

use coinspot_auth::AuthError;
use coinspot_types::ApiError;

/// Errors that can occur during REST API operations
///
/// A response whose `status` is not "ok" is not an error at this level: it
/// decodes normally and the caller inspects it. [`RestError::Api`] only
/// appears when the caller opts in through `ApiResponse::into_ok`.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Missing API credentials for an authenticated endpoint
    #[error("API key and secret are required for authenticated operations")]
    AuthRequired,

    /// Network-level failure (DNS, connect, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Body was not JSON, or did not match the expected shape
    #[error("Failed to decode response: {source}")]
    Decode {
        source: serde_json::Error,
        /// Raw response body
        body: String,
    },

    /// Decoded response reported a non-ok status
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request parameters could not be encoded as a JSON object
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Client could not be configured
    #[error("Configuration error: {0}")]
    Config(String),

    /// Credential loading failed
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl RestError {
    /// HTTP status code, for [`RestError::HttpStatus`] and transport errors that carry one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if this error is the missing-credentials precondition
    pub fn is_auth_required(&self) -> bool {
        matches!(self, Self::AuthRequired)
    }

    /// Check if the request never got an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;
