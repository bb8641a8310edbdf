//! Read-only account endpoints
//!
//! Served from `/api/v2/ro`. A key with read-only permission is enough for
//! everything here except [`ReadOnlyEndpoints::withdraw_coin`].

use coinspot_types::{
    AccessLevel, AffiliatePaymentsResponse, Availability, BalancesResponse, CoinBalance,
    CompletedOrdersResponse, DepositHistoryResponse, LimitOrdersResponse, MyOpenOrdersResponse,
    OrderBookResponse, OrderHistoryResponse, ReferralPaymentsResponse, SendReceiveHistoryResponse,
    SingleCoinBalanceResponse, StatusResponse, WithdrawResponse, WithdrawalHistoryResponse,
};
use std::collections::BTreeMap;
use tracing::instrument;

use crate::dispatcher::RequestDispatcher;
use crate::error::RestResult;
use crate::params::{CoinMarketParams, CompletedOrdersQuery, DateRange, WithdrawRequest};

const ACCESS: AccessLevel = AccessLevel::ReadOnly;

/// Read-only account endpoints
pub struct ReadOnlyEndpoints<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> ReadOnlyEndpoints<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Check the read-only API is up and the key is accepted
    #[instrument(skip(self))]
    pub async fn status(&self) -> RestResult<StatusResponse> {
        self.dispatcher.request_empty("/status", ACCESS).await
    }

    /// Balances of every coin held
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<BalancesResponse> {
        self.dispatcher.request_empty("/my/balances", ACCESS).await
    }

    /// Balances as one map keyed by coin
    ///
    /// The server returns a list of single-entry maps; this merges them. A
    /// non-ok response yields an empty map.
    pub async fn formatted_balances(&self) -> RestResult<BTreeMap<String, CoinBalance>> {
        let response = self.balances().await?;
        Ok(response.formatted())
    }

    /// Balance of one coin
    #[instrument(skip(self))]
    pub async fn coin_balance(
        &self,
        coin: &str,
        available: Availability,
    ) -> RestResult<SingleCoinBalanceResponse> {
        let path = format!("/my/balance/{}?available={}", coin, available.as_str());
        self.dispatcher.request_empty(&path, ACCESS).await
    }

    /// Open market orders for a coin, across all users
    #[instrument(skip(self))]
    pub async fn open_market_orders(
        &self,
        coin: &str,
        market: Option<&str>,
    ) -> RestResult<OrderBookResponse> {
        let params = CoinMarketParams {
            cointype: Some(coin),
            markettype: market,
        };
        self.dispatcher.request("/orders/market/open", &params, ACCESS).await
    }

    /// Completed market orders, across all users
    #[instrument(skip(self))]
    pub async fn completed_market_orders(
        &self,
        query: &CompletedOrdersQuery,
    ) -> RestResult<CompletedOrdersResponse> {
        self.dispatcher.request("/orders/market/completed", query, ACCESS).await
    }

    /// The account's open market orders
    #[instrument(skip(self))]
    pub async fn my_open_market_orders(
        &self,
        coin: Option<&str>,
        market: Option<&str>,
    ) -> RestResult<MyOpenOrdersResponse> {
        let params = CoinMarketParams {
            cointype: coin,
            markettype: market,
        };
        self.dispatcher.request("/my/orders/market/open", &params, ACCESS).await
    }

    /// The account's open limit orders
    #[instrument(skip(self))]
    pub async fn my_open_limit_orders(
        &self,
        coin: Option<&str>,
    ) -> RestResult<LimitOrdersResponse> {
        let params = CoinMarketParams {
            cointype: coin,
            markettype: None,
        };
        self.dispatcher.request("/my/orders/limit/open", &params, ACCESS).await
    }

    /// The account's completed orders, market and instant
    #[instrument(skip(self))]
    pub async fn my_order_history(
        &self,
        query: &CompletedOrdersQuery,
    ) -> RestResult<OrderHistoryResponse> {
        self.dispatcher.request("/my/orders/completed", query, ACCESS).await
    }

    /// The account's completed market orders
    #[instrument(skip(self))]
    pub async fn my_market_order_history(
        &self,
        query: &CompletedOrdersQuery,
    ) -> RestResult<OrderHistoryResponse> {
        self.dispatcher.request("/my/orders/market/completed", query, ACCESS).await
    }

    /// Coins sent and received
    #[instrument(skip(self))]
    pub async fn send_receive_history(
        &self,
        range: &DateRange,
    ) -> RestResult<SendReceiveHistoryResponse> {
        self.dispatcher.request("/my/sendreceive", range, ACCESS).await
    }

    /// AUD deposits
    #[instrument(skip(self))]
    pub async fn deposit_history(&self, range: &DateRange) -> RestResult<DepositHistoryResponse> {
        self.dispatcher.request("/my/deposits", range, ACCESS).await
    }

    /// AUD withdrawals
    #[instrument(skip(self))]
    pub async fn withdrawal_history(
        &self,
        range: &DateRange,
    ) -> RestResult<WithdrawalHistoryResponse> {
        self.dispatcher.request("/my/withdrawals", range, ACCESS).await
    }

    #[instrument(skip(self))]
    pub async fn affiliate_payments(&self) -> RestResult<AffiliatePaymentsResponse> {
        self.dispatcher.request_empty("/my/affiliatepayments", ACCESS).await
    }

    #[instrument(skip(self))]
    pub async fn referral_payments(&self) -> RestResult<ReferralPaymentsResponse> {
        self.dispatcher.request_empty("/my/referralpayments", ACCESS).await
    }

    /// Withdraw coins to an external address
    ///
    /// Listed with the read-only calls but sent to the full-access namespace:
    /// the exchange only accepts withdrawals there.
    #[instrument(skip(self, request), fields(coin = %request.cointype))]
    pub async fn withdraw_coin(&self, request: &WithdrawRequest) -> RestResult<WithdrawResponse> {
        self.dispatcher
            .request("/my/coin/withdraw/send", request, AccessLevel::FullAccess)
            .await
    }
}
