//! Request parameter types
//!
//! Every struct here serializes to the JSON object that becomes the signed
//! request body (before the nonce is added). Optional fields that are `None`
//! are left out of the body entirely; CoinSpot distinguishes an omitted field
//! from an explicit `null`.

use coinspot_types::{AmountType, Direction, EmailConfirm};
use rust_decimal::Decimal;
use serde::Serialize;

/// Filters for completed order queries
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompletedOrdersQuery {
    /// Coin short name, e.g. "BTC"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cointype: Option<String>,
    /// Market coin short name, e.g. "USDT" (AUD when absent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markettype: Option<String>,
    /// "YYYY-MM-DD" or UNIX epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startdate: Option<String>,
    /// "YYYY-MM-DD" or UNIX epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enddate: Option<String>,
    /// Records to return (server default 200, max 500)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl CompletedOrdersQuery {
    /// Create an unfiltered query
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one coin
    pub fn for_coin(coin: impl Into<String>) -> Self {
        Self {
            cointype: Some(coin.into()),
            ..Self::default()
        }
    }

    /// Set market
    pub fn with_market(mut self, market: impl Into<String>) -> Self {
        self.markettype = Some(market.into());
        self
    }

    /// Set date range
    pub fn with_dates(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.startdate = Some(start.into());
        self.enddate = Some(end.into());
        self
    }

    /// Set record limit
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Optional date window for transfer history queries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub startdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enddate: Option<String>,
}

impl DateRange {
    /// No date filter
    pub fn all() -> Self {
        Self::default()
    }

    /// Both bounds, "YYYY-MM-DD"
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            startdate: Some(start.into()),
            enddate: Some(end.into()),
        }
    }

    /// Lower bound only
    pub fn since(start: impl Into<String>) -> Self {
        Self {
            startdate: Some(start.into()),
            enddate: None,
        }
    }
}

/// Market (limit) buy or sell order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketOrder {
    pub cointype: String,
    /// Amount of coins
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Rate in market currency
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Market coin, AUD when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markettype: Option<String>,
}

impl MarketOrder {
    /// Create an order in the AUD market
    pub fn new(coin: impl Into<String>, amount: Decimal, rate: Decimal) -> Self {
        Self {
            cointype: coin.into(),
            amount,
            rate,
            markettype: None,
        }
    }

    /// Place the order in another market, e.g. "USDT"
    pub fn in_market(mut self, market: impl Into<String>) -> Self {
        self.markettype = Some(market.into());
        self
    }
}

/// Rate change for an open market order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EditOrder {
    pub cointype: String,
    /// Order id
    pub id: String,
    /// Current rate of the order
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
    /// Proposed rate
    #[serde(with = "rust_decimal::serde::float")]
    pub newrate: Decimal,
}

impl EditOrder {
    pub fn new(
        coin: impl Into<String>,
        id: impl Into<String>,
        rate: Decimal,
        newrate: Decimal,
    ) -> Self {
        Self {
            cointype: coin.into(),
            id: id.into(),
            rate,
            newrate,
        }
    }
}

/// Optional rate protection for "now" orders
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NowOrderOptions {
    /// Expected rate (AUD for buy/sell, quote rate for swap)
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub rate: Option<Decimal>,
    /// Tolerated rate variation in percent (0 to 1000)
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub threshold: Option<Decimal>,
    /// Which way the rate may move
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
}

impl NowOrderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rate(mut self, rate: Decimal) -> Self {
        self.rate = Some(rate);
        self
    }

    pub fn with_threshold(mut self, threshold: Decimal) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = Some(direction);
        self
    }
}

/// Coin withdrawal to an external address
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WithdrawRequest {
    pub cointype: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    /// Destination address
    pub address: String,
    /// Server default is NO
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emailconfirm: Option<EmailConfirm>,
    /// Network to send on, e.g. "BNB"; coin default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Payment id / memo, where the network takes one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paymentid: Option<String>,
}

impl WithdrawRequest {
    pub fn new(coin: impl Into<String>, amount: Decimal, address: impl Into<String>) -> Self {
        Self {
            cointype: coin.into(),
            amount,
            address: address.into(),
            emailconfirm: None,
            network: None,
            paymentid: None,
        }
    }

    pub fn with_email_confirm(mut self, confirm: EmailConfirm) -> Self {
        self.emailconfirm = Some(confirm);
        self
    }

    pub fn with_network(mut self, network: impl Into<String>) -> Self {
        self.network = Some(network.into());
        self
    }

    pub fn with_payment_id(mut self, payment_id: impl Into<String>) -> Self {
        self.paymentid = Some(payment_id.into());
        self
    }
}

// Bodies of the fixed-shape calls; built by the endpoint methods.

#[derive(Serialize)]
pub(crate) struct CoinParams<'a> {
    pub cointype: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CoinMarketParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cointype: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markettype: Option<&'a str>,
}

#[derive(Serialize)]
pub(crate) struct QuoteParams<'a> {
    pub cointype: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub amounttype: AmountType,
}

#[derive(Serialize)]
pub(crate) struct SwapQuoteParams<'a> {
    pub cointypesell: &'a str,
    pub cointypebuy: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
}

#[derive(Serialize)]
pub(crate) struct NowOrderParams<'a> {
    pub cointype: &'a str,
    pub amounttype: AmountType,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(flatten)]
    pub options: &'a NowOrderOptions,
}

#[derive(Serialize)]
pub(crate) struct SwapNowParams<'a> {
    pub cointypesell: &'a str,
    pub cointypebuy: &'a str,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    #[serde(flatten)]
    pub options: &'a NowOrderOptions,
}

#[derive(Serialize)]
pub(crate) struct IdParams<'a> {
    pub id: &'a str,
}

#[derive(Serialize)]
pub(crate) struct CancelAllParams<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coin: Option<&'a str>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let query = CompletedOrdersQuery::for_coin("BTC").with_limit(50);
        assert_eq!(
            serde_json::to_value(&query).unwrap(),
            json!({"cointype": "BTC", "limit": 50})
        );

        assert_eq!(serde_json::to_value(DateRange::all()).unwrap(), json!({}));
        assert_eq!(
            serde_json::to_value(DateRange::since("2024-01-01")).unwrap(),
            json!({"startdate": "2024-01-01"})
        );
    }

    #[test]
    fn test_market_order_amounts_are_numbers() {
        let order = MarketOrder::new("BTC", dec!(0.01), dec!(90000.5));
        assert_eq!(
            serde_json::to_string(&order).unwrap(),
            r#"{"cointype":"BTC","amount":0.01,"rate":90000.5}"#
        );

        let order = order.in_market("USDT");
        assert_eq!(serde_json::to_value(&order).unwrap()["markettype"], "USDT");
    }

    #[test]
    fn test_now_order_options_flatten() {
        let options = NowOrderOptions::new()
            .with_threshold(dec!(5))
            .with_direction(Direction::Up);
        let params = NowOrderParams {
            cointype: "DOGE",
            amounttype: AmountType::Aud,
            amount: dec!(20),
            options: &options,
        };

        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"cointype": "DOGE", "amounttype": "aud", "amount": 20.0, "threshold": 5.0, "direction": "UP"})
        );
    }

    #[test]
    fn test_withdraw_request_strict_email_confirm() {
        let request = WithdrawRequest::new("XRP", dec!(25), "rXYZ")
            .with_email_confirm(EmailConfirm::Yes)
            .with_payment_id("12345");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["emailconfirm"], "YES");
        assert_eq!(value["paymentid"], "12345");
        assert!(value.get("network").is_none());
    }

    #[test]
    fn test_cancel_all_without_coin_is_empty() {
        let params = CancelAllParams { coin: None };
        assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
    }
}
