//! Public market data shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::envelope::ApiResponse;

/// Bid, ask and last trade price for one coin
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinPrice {
    /// Best bid
    pub bid: Decimal,
    /// Best ask
    pub ask: Decimal,
    /// Last traded price
    pub last: Decimal,
}

impl CoinPrice {
    /// Ask minus bid
    pub fn spread(&self) -> Decimal {
        self.ask - self.bid
    }
}

/// Latest prices for every coin, keyed by lowercase coin symbol
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LatestPrices {
    pub prices: HashMap<String, CoinPrice>,
}

impl LatestPrices {
    /// Price for one coin; lookup ignores case
    pub fn get(&self, coin: &str) -> Option<&CoinPrice> {
        self.prices.get(coin).or_else(|| {
            self.prices
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(coin))
                .map(|(_, price)| price)
        })
    }
}

/// Latest price for a single coin
///
/// `prices` is absent when the coin is unknown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinPriceData {
    pub prices: Option<CoinPrice>,
}

/// Latest buy or sell rate
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct BuySellPrice {
    pub rate: Decimal,
    /// Market the rate applies to, e.g. "BTC/AUD"
    pub market: String,
}

/// Open order on the public book
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Order {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Decimal,
    pub rate: Decimal,
    pub total: Decimal,
    pub coin: String,
    pub market: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Open buy and sell orders
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OrderBook {
    pub buyorders: Vec<Order>,
    pub sellorders: Vec<Order>,
}

impl OrderBook {
    /// Highest buy rate
    pub fn best_bid(&self) -> Option<Decimal> {
        self.buyorders.iter().map(|o| o.rate).max()
    }

    /// Lowest sell rate
    pub fn best_ask(&self) -> Option<Decimal> {
        self.sellorders.iter().map(|o| o.rate).min()
    }
}

/// Filled order
///
/// The public feed only sends the common fields; account history adds ids,
/// order type and fee breakdown.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletedOrder {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub amount: Decimal,
    pub rate: Decimal,
    pub total: Decimal,
    pub coin: String,
    pub market: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub order_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otc: Option<bool>,
    pub solddate: String,
    #[serde(rename = "audfeeExGst", skip_serializing_if = "Option::is_none")]
    pub audfee_ex_gst: Option<Decimal>,
    #[serde(rename = "audGst", skip_serializing_if = "Option::is_none")]
    pub aud_gst: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audtotal: Option<Decimal>,
}

/// Completed buy and sell orders
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CompletedOrders {
    pub buyorders: Vec<CompletedOrder>,
    pub sellorders: Vec<CompletedOrder>,
}

pub type LatestPricesResponse = ApiResponse<LatestPrices>;
pub type CoinPriceResponse = ApiResponse<CoinPriceData>;
pub type BuySellPriceResponse = ApiResponse<BuySellPrice>;
pub type OrderBookResponse = ApiResponse<OrderBook>;
pub type CompletedOrdersResponse = ApiResponse<CompletedOrders>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_latest_prices() {
        let json = r#"{"status":"ok","prices":{"btc":{"bid":"100","ask":"101.5","last":"100.25"},"doge":{"bid":0.1,"ask":0.11,"last":0.105}}}"#;
        let response: LatestPricesResponse = serde_json::from_str(json).unwrap();

        assert!(response.is_ok());
        assert_eq!(response.prices.len(), 2);
        assert_eq!(response.prices["btc"].last, dec!(100.25));
        assert_eq!(response.get("BTC").unwrap().spread(), dec!(1.5));
        assert_eq!(response.get("doge").unwrap().bid, dec!(0.1));
    }

    #[test]
    fn test_unknown_coin_has_no_prices() {
        let response: CoinPriceResponse = serde_json::from_str(r#"{"status":"ok"}"#).unwrap();
        assert!(response.prices.is_none());
    }

    #[test]
    fn test_parse_buy_price() {
        let json = r#"{"status":"ok","rate":"0.1234","market":"DOGE/AUD"}"#;
        let response: BuySellPriceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.rate, dec!(0.1234));
        assert_eq!(response.market, "DOGE/AUD");
    }

    #[test]
    fn test_order_book_best_prices() {
        let json = r#"{
            "status": "ok",
            "buyorders": [
                {"amount": 10, "rate": 0.10, "total": 1.0, "coin": "DOGE", "market": "DOGE/AUD"},
                {"amount": 5, "rate": 0.12, "total": 0.6, "coin": "DOGE", "market": "DOGE/AUD"}
            ],
            "sellorders": [
                {"amount": 3, "rate": 0.15, "total": 0.45, "coin": "DOGE", "market": "DOGE/AUD"}
            ]
        }"#;
        let response: OrderBookResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.best_bid(), Some(dec!(0.12)));
        assert_eq!(response.best_ask(), Some(dec!(0.15)));
    }

    #[test]
    fn test_parse_completed_order_with_fees() {
        let json = r#"{
            "status": "ok",
            "buyorders": [{
                "id": "abc", "type": "instant", "otc": false,
                "amount": "1", "rate": "2", "total": "2",
                "coin": "BTC", "market": "BTC/AUD",
                "solddate": "2024-01-01T00:00:00.000Z",
                "audfeeExGst": "0.01", "audGst": "0.001", "audtotal": "2.011"
            }],
            "sellorders": []
        }"#;
        let response: CompletedOrdersResponse = serde_json::from_str(json).unwrap();
        let order = &response.buyorders[0];

        assert_eq!(order.id.as_deref(), Some("abc"));
        assert_eq!(order.order_type.as_deref(), Some("instant"));
        assert_eq!(order.audfee_ex_gst, Some(dec!(0.01)));
        assert_eq!(order.audtotal, Some(dec!(2.011)));
        assert!(response.sellorders.is_empty());
    }
}
