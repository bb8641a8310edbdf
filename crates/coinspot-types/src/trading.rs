//! Quote and order placement shapes (full-access API)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::envelope::{ApiResponse, NoData};

/// Buy, sell or swap quote
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Quote {
    pub rate: Decimal,
}

/// Market order accepted onto the book
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlacedOrder {
    pub coin: String,
    pub market: String,
    pub amount: Decimal,
    pub rate: Decimal,
    pub id: String,
}

/// Result of editing the rate of an open market order
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct EditedOrder {
    pub updated: bool,
    pub id: String,
    pub coin: String,
    pub rate: Decimal,
    pub newrate: Decimal,
    pub amount: Decimal,
    pub total: Decimal,
}

/// Filled "now" (instant) buy, sell or swap order
///
/// Buy-now responses carry no `rate`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NowOrder {
    pub coin: String,
    pub market: String,
    pub amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    pub total: Decimal,
}

pub type QuoteResponse = ApiResponse<Quote>;
pub type PlacedOrderResponse = ApiResponse<PlacedOrder>;
pub type EditedOrderResponse = ApiResponse<EditedOrder>;
pub type NowOrderResponse = ApiResponse<NowOrder>;
pub type CancelOrderResponse = ApiResponse<NoData>;
