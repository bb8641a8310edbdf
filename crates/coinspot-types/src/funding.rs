//! Deposit address and coin withdrawal shapes

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::envelope::{ApiResponse, NoData};

/// Deposit address on one network
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DepositNetwork {
    pub name: String,
    pub network: String,
    pub address: String,
    pub memo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DepositAddress {
    pub networks: Vec<DepositNetwork>,
}

impl DepositAddress {
    /// Address on the named network (case-insensitive)
    pub fn address_on(&self, network: &str) -> Option<&str> {
        self.networks
            .iter()
            .find(|n| n.network.eq_ignore_ascii_case(network))
            .map(|n| n.address.as_str())
    }
}

/// Whether a withdrawal on a network takes a payment id / memo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentIdRequirement {
    #[default]
    No,
    Optional,
    Required,
    /// Value this SDK does not know about
    #[serde(other)]
    Unknown,
}

/// Withdrawal parameters for one network
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WithdrawalNetwork {
    pub network: String,
    pub paymentid: PaymentIdRequirement,
    pub fee: Decimal,
    pub minsend: Decimal,
    #[serde(rename = "default")]
    pub is_default: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct WithdrawalDetails {
    pub networks: Vec<WithdrawalNetwork>,
}

impl WithdrawalDetails {
    /// Network flagged as default by the exchange
    pub fn default_network(&self) -> Option<&WithdrawalNetwork> {
        self.networks.iter().find(|n| n.is_default)
    }
}

pub type DepositAddressResponse = ApiResponse<DepositAddress>;
pub type WithdrawalDetailsResponse = ApiResponse<WithdrawalDetails>;
pub type WithdrawResponse = ApiResponse<NoData>;
