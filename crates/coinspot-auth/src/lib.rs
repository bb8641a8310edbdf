//! Credentials and request signing for the CoinSpot API
//!
//! This crate holds the pieces every authenticated CoinSpot request needs:
//! the API key/secret pair, a monotonic nonce source, and the HMAC-SHA512
//! signer that turns a serialized JSON payload into the `sign` header.
//!
//! # Example
//!
//! ```no_run
//! use coinspot_auth::{Credentials, NonceGenerator};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load credentials from environment
//!     let creds = Credentials::from_env()?;
//!     let nonces = NonceGenerator::new();
//!
//!     let body = format!(r#"{{"cointype":"BTC","nonce":{}}}"#, nonces.next());
//!     let signature = creds.sign(&body);
//!     println!("sign: {}", signature);
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;
mod nonce;
mod signer;

pub use credentials::{Credentials, API_KEY_ENV, API_SECRET_ENV};
pub use error::{AuthError, AuthResult};
pub use nonce::NonceGenerator;
pub use signer::sign;
