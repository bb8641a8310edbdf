//! Account (read-only API) shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::envelope::ApiResponse;
use crate::market::{CompletedOrders, OrderBook};

/// Balance of one coin
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CoinBalance {
    /// Coin balance
    pub balance: Decimal,
    /// Balance valued in AUD
    pub audbalance: Decimal,
    /// AUD rate used for the valuation
    pub rate: Decimal,
    /// Balance not locked in open orders (single-coin query with `available=yes`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<Decimal>,
}

/// All coin balances
///
/// CoinSpot returns a list of single-entry maps (`[{"BTC": {...}}, {"ETH": {...}}]`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Balances {
    pub balances: Vec<HashMap<String, CoinBalance>>,
}

impl Balances {
    /// Flatten the list of single-entry maps into one map keyed by coin
    pub fn formatted(&self) -> BTreeMap<String, CoinBalance> {
        self.balances
            .iter()
            .flat_map(|entry| entry.iter())
            .map(|(coin, balance)| (coin.clone(), balance.clone()))
            .collect()
    }

    /// Balance for one coin
    pub fn get(&self, coin: &str) -> Option<&CoinBalance> {
        self.balances.iter().find_map(|entry| entry.get(coin))
    }

    /// Sum of AUD valuations
    pub fn total_aud(&self) -> Decimal {
        self.balances
            .iter()
            .flat_map(|entry| entry.values())
            .map(|b| b.audbalance)
            .sum()
    }
}

/// Balance of a single coin, keyed by coin symbol
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SingleCoinBalance {
    pub balance: HashMap<String, CoinBalance>,
}

/// Open limit order belonging to the account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitOrder {
    pub id: String,
    pub coin: String,
    pub market: String,
    pub rate: Decimal,
    pub amount: Decimal,
    pub created: String,
    #[serde(rename = "type")]
    pub order_type: String,
}

/// Open limit orders belonging to the account
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LimitOrders {
    pub buyorders: Vec<LimitOrder>,
    pub sellorders: Vec<LimitOrder>,
}

/// Outgoing coin transfer
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SendTransaction {
    pub timestamp: String,
    pub amount: Decimal,
    pub coin: String,
    pub address: String,
    pub aud: Decimal,
    pub sendfee: Decimal,
}

/// Incoming coin transfer
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReceiveTransaction {
    pub timestamp: String,
    pub amount: Decimal,
    pub coin: String,
    pub address: String,
    pub aud: Decimal,
    pub from: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SendReceiveHistory {
    pub sendtransactions: Vec<SendTransaction>,
    pub receivetransactions: Vec<ReceiveTransaction>,
}

/// AUD deposit
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Deposit {
    pub amount: Decimal,
    pub created: String,
    pub status: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub reference: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DepositHistory {
    pub deposits: Vec<Deposit>,
}

/// AUD withdrawal
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Withdrawal {
    pub amount: Decimal,
    pub created: String,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WithdrawalHistory {
    pub withdrawals: Vec<Withdrawal>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AffiliatePayment {
    pub amount: Decimal,
    pub month: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AffiliatePayments {
    pub payments: Vec<AffiliatePayment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferralPayment {
    pub amount: Decimal,
    pub coin: String,
    pub audamount: Decimal,
    pub timestamp: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReferralPayments {
    pub payments: Vec<ReferralPayment>,
}

pub type BalancesResponse = ApiResponse<Balances>;
pub type SingleCoinBalanceResponse = ApiResponse<SingleCoinBalance>;
pub type MyOpenOrdersResponse = ApiResponse<OrderBook>;
pub type LimitOrdersResponse = ApiResponse<LimitOrders>;
pub type OrderHistoryResponse = ApiResponse<CompletedOrders>;
pub type SendReceiveHistoryResponse = ApiResponse<SendReceiveHistory>;
pub type DepositHistoryResponse = ApiResponse<DepositHistory>;
pub type WithdrawalHistoryResponse = ApiResponse<WithdrawalHistory>;
pub type AffiliatePaymentsResponse = ApiResponse<AffiliatePayments>;
pub type ReferralPaymentsResponse = ApiResponse<ReferralPayments>;

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_formatted_balances() {
        let json = r#"{"status":"ok","balances":[{"DOGE":{"balance":10,"audbalance":5,"rate":0.5}}]}"#;
        let response: BalancesResponse = serde_json::from_str(json).unwrap();
        let formatted = response.formatted();

        assert_eq!(formatted.len(), 1);
        let doge = &formatted["DOGE"];
        assert_eq!(doge.balance, dec!(10));
        assert_eq!(doge.audbalance, dec!(5));
        assert_eq!(doge.rate, dec!(0.5));
        assert_eq!(doge.available, None);
    }

    #[test]
    fn test_formatted_balances_multiple_coins() {
        let json = r#"{"status":"ok","balances":[
            {"AUD":{"balance":100,"audbalance":100,"rate":1}},
            {"BTC":{"balance":0.5,"audbalance":50000,"rate":100000}}
        ]}"#;
        let response: BalancesResponse = serde_json::from_str(json).unwrap();

        let formatted = response.formatted();
        assert_eq!(formatted.keys().collect::<Vec<_>>(), vec!["AUD", "BTC"]);
        assert_eq!(response.get("BTC").unwrap().balance, dec!(0.5));
        assert_eq!(response.total_aud(), dec!(50100));
    }

    #[test]
    fn test_single_coin_balance_with_available() {
        let json = r#"{"status":"ok","balance":{"BTC":{"balance":1.5,"available":1.0,"audbalance":150000,"rate":100000}}}"#;
        let response: SingleCoinBalanceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.balance["BTC"].available, Some(dec!(1.0)));
    }

    #[test]
    fn test_parse_send_receive_history() {
        let json = r#"{
            "status": "ok",
            "sendtransactions": [{"timestamp":"2024-01-01T00:00:00.000Z","amount":1,"coin":"DOGE","address":"D123","aud":0.1,"sendfee":2}],
            "receivetransactions": [{"timestamp":"2024-01-02T00:00:00.000Z","amount":3,"coin":"DOGE","address":"D456","aud":0.3,"from":"friend"}]
        }"#;
        let response: SendReceiveHistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.sendtransactions[0].sendfee, dec!(2));
        assert_eq!(response.receivetransactions[0].from, "friend");
    }

    #[test]
    fn test_parse_deposit_type_field() {
        let json = r#"{"status":"ok","deposits":[{"amount":"50","created":"2024-01-01","status":"completed","type":"PayID","reference":"ref-1"}]}"#;
        let response: DepositHistoryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.deposits[0].kind, "PayID");
    }
}
