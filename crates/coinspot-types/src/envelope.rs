//! Response envelope shared by every CoinSpot endpoint
//!
//! Each response carries `status` ("ok" or an error indicator) and, when not
//! ok, a `message`. Endpoint data sits alongside those fields in the same JSON
//! object, so it is flattened into [`ApiResponse::data`]. Error responses omit
//! the data fields; every data struct therefore defaults missing fields.

use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Status value of a successful response
pub const STATUS_OK: &str = "ok";

/// Decoded response: envelope plus endpoint data
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ApiResponse<T = NoData> {
    /// "ok" or an error indicator
    pub status: String,
    /// Human-readable explanation when status is not ok
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Endpoint-specific fields
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Check if the server reported success
    pub fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }

    /// Error message, if the server reported failure
    pub fn error_message(&self) -> Option<&str> {
        if self.is_ok() {
            None
        } else {
            Some(self.message.as_deref().unwrap_or(""))
        }
    }

    /// Turn a non-ok status into an [`ApiError`]
    ///
    /// The client never does this on its own; a non-ok status is ordinary
    /// response data until the caller asks.
    pub fn into_ok(self) -> Result<Self, ApiError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(ApiError {
                status: self.status,
                message: self.message.unwrap_or_default(),
            })
        }
    }

    /// Like [`into_ok`](Self::into_ok) but keeps only the data
    pub fn into_data(self) -> Result<T, ApiError> {
        self.into_ok().map(|response| response.data)
    }
}

impl<T> Deref for ApiResponse<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.data
    }
}

/// Endpoint with no fields beyond the envelope (status checks, cancels, withdrawals)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NoData {}

/// Remote failure reported inside a successfully decoded response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("API error ({status}): {message}")]
pub struct ApiError {
    /// Status value returned by the server
    pub status: String,
    /// Message returned by the server
    pub message: String,
}

/// Envelope-only response
pub type StatusResponse = ApiResponse<NoData>;
