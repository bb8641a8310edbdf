//! Re-exports for convenience
//!
//! Import everything you need with:
//! ```
//! use coinspot_rest::prelude::*;
//! ```

// Client
pub use crate::builder::CoinspotBuilder;
pub use crate::client::Coinspot;
pub use crate::config::ClientConfig;
pub use crate::error::{RestError, RestResult};
pub use crate::hooks::{CallOutcome, CallRecord, CallScope, Hooks};

// Endpoint sets and their parameters
pub use crate::endpoints::{FullAccessEndpoints, PublicEndpoints, ReadOnlyEndpoints};
pub use crate::params::{
    CompletedOrdersQuery, DateRange, EditOrder, MarketOrder, NowOrderOptions, WithdrawRequest,
};

// Credentials
pub use coinspot_auth::Credentials;

// Request enums and response shapes
pub use coinspot_types::{
    AccessLevel, AmountType, ApiError, ApiResponse, Availability, CoinBalance, CoinPrice, Direction,
    EmailConfirm, Order, OrderBook,
};

// Decimal for prices/quantities
pub use rust_decimal::Decimal;
