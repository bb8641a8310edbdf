//! Shared types for the CoinSpot REST API v2
//!
//! This crate provides the response shapes and request enums used across the
//! CoinSpot SDK. It has minimal dependencies and can be used independently.
//!
//! # Key Types
//!
//! - [`ApiResponse`] - The `status`/`message` envelope every endpoint returns
//! - [`AccessLevel`] - Full-access vs read-only routing
//! - [`AmountType`], [`Direction`], [`EmailConfirm`], [`Availability`] - Request literals
//! - Market data: [`LatestPrices`], [`BuySellPrice`], [`OrderBook`], [`CompletedOrders`]
//! - Account: [`Balances`], [`CoinBalance`], [`SendReceiveHistory`], ...
//! - Trading: [`Quote`], [`PlacedOrder`], [`EditedOrder`], [`NowOrder`]
//! - Funding: [`DepositAddress`], [`WithdrawalDetails`]

pub mod account;
pub mod enums;
pub mod envelope;
pub mod funding;
pub mod market;
pub mod trading;

// Re-export commonly used types
pub use account::*;
pub use enums::*;
pub use envelope::*;
pub use funding::*;
pub use market::*;
pub use trading::*;

// Re-export rust_decimal for users
pub use rust_decimal::Decimal;
