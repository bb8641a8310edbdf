//! REST API client for the CoinSpot cryptocurrency exchange
//!
//! This crate covers the three namespaces of the CoinSpot API v2:
//!
//! - **Public** (`/pubapi/v2`): latest prices, order books, completed orders
//! - **Read-only** (`/api/v2/ro`): balances, order and transfer history
//! - **Full access** (`/api/v2`): quotes, orders, deposits and withdrawals
//!
//! # Authentication
//!
//! Account endpoints need an API key and secret. Each request body carries a
//! strictly increasing nonce and is signed with HMAC-SHA512; the hex digest
//! goes in the `sign` header and the key in the `key` header.
//!
//! # Example
//!
//! ```no_run
//! use coinspot_rest::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints (no auth required)
//!     let client = Coinspot::public_only()?;
//!     let prices = client.latest_prices().await?;
//!     println!("BTC last: {:?}", prices.get("btc").map(|p| p.last));
//!
//!     // Account endpoints (auth required)
//!     let client = Coinspot::builder()
//!         .with_credentials(Credentials::from_env()?)
//!         .with_hooks(Hooks::tracing())
//!         .build()?;
//!     for (coin, balance) in client.read_only()?.formatted_balances().await? {
//!         println!("{coin}: {} (A${})", balance.balance, balance.audbalance);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! A response whose `status` is not "ok" still decodes successfully; check
//! [`ApiResponse::is_ok`] or convert with [`ApiResponse::into_ok`]. Only
//! transport failures, non-2xx HTTP statuses and undecodable bodies are
//! errors.

pub mod builder;
pub mod client;
pub mod config;
pub mod dispatcher;
pub mod endpoints;
pub mod error;
pub mod hooks;
pub mod params;
pub mod prelude;

// Re-export main types
pub use builder::CoinspotBuilder;
pub use client::Coinspot;
pub use config::ClientConfig;
pub use dispatcher::RequestDispatcher;
pub use error::{RestError, RestResult};
pub use hooks::Hooks;

pub use coinspot_auth::Credentials;
pub use coinspot_types::ApiResponse;
