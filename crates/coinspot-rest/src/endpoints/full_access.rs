//! Full-access trading and funding endpoints
//!
//! Served from `/api/v2` and require a key with full permissions.

use coinspot_types::{
    AccessLevel, AmountType, CancelOrderResponse, DepositAddressResponse, EditedOrderResponse,
    NowOrderResponse, PlacedOrderResponse, QuoteResponse, StatusResponse, WithdrawResponse,
    WithdrawalDetailsResponse,
};
use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::dispatcher::RequestDispatcher;
use crate::error::RestResult;
use crate::params::{
    CancelAllParams, CoinParams, EditOrder, IdParams, MarketOrder, NowOrderOptions, NowOrderParams,
    QuoteParams, SwapNowParams, SwapQuoteParams, WithdrawRequest,
};

const ACCESS: AccessLevel = AccessLevel::FullAccess;

/// Full-access trading and funding endpoints
pub struct FullAccessEndpoints<'a> {
    dispatcher: &'a RequestDispatcher,
}

impl<'a> FullAccessEndpoints<'a> {
    pub fn new(dispatcher: &'a RequestDispatcher) -> Self {
        Self { dispatcher }
    }

    /// Check the API is up and the key is accepted
    #[instrument(skip(self))]
    pub async fn status(&self) -> RestResult<StatusResponse> {
        self.dispatcher.request_empty("/status", ACCESS).await
    }

    // ========================================================================
    // Funding
    // ========================================================================

    /// Deposit addresses of a coin, one per network
    #[instrument(skip(self))]
    pub async fn coin_deposit_address(&self, coin: &str) -> RestResult<DepositAddressResponse> {
        self.dispatcher
            .request("/my/coin/deposit", &CoinParams { cointype: coin }, ACCESS)
            .await
    }

    /// Fees, minimums and payment id rules for withdrawing a coin
    #[instrument(skip(self))]
    pub async fn coin_withdrawal_details(
        &self,
        coin: &str,
    ) -> RestResult<WithdrawalDetailsResponse> {
        self.dispatcher
            .request("/my/coin/withdraw/senddetails", &CoinParams { cointype: coin }, ACCESS)
            .await
    }

    /// Withdraw coins to an external address
    #[instrument(skip(self, request), fields(coin = %request.cointype))]
    pub async fn withdraw_coin(&self, request: &WithdrawRequest) -> RestResult<WithdrawResponse> {
        info!(amount = %request.amount, "Sending coin withdrawal");
        self.dispatcher.request("/my/coin/withdraw/send", request, ACCESS).await
    }

    // ========================================================================
    // Quotes
    // ========================================================================

    /// Rate for buying `amount` of a coin now
    #[instrument(skip(self))]
    pub async fn buy_now_quote(
        &self,
        coin: &str,
        amount: Decimal,
        amount_type: AmountType,
    ) -> RestResult<QuoteResponse> {
        let params = QuoteParams {
            cointype: coin,
            amount,
            amounttype: amount_type,
        };
        self.dispatcher.request("/quote/buy/now", &params, ACCESS).await
    }

    /// Rate for selling `amount` of a coin now
    #[instrument(skip(self))]
    pub async fn sell_now_quote(
        &self,
        coin: &str,
        amount: Decimal,
        amount_type: AmountType,
    ) -> RestResult<QuoteResponse> {
        let params = QuoteParams {
            cointype: coin,
            amount,
            amounttype: amount_type,
        };
        self.dispatcher.request("/quote/sell/now", &params, ACCESS).await
    }

    /// Rate for swapping `amount` of `sell_coin` into `buy_coin` now
    #[instrument(skip(self))]
    pub async fn swap_now_quote(
        &self,
        sell_coin: &str,
        buy_coin: &str,
        amount: Decimal,
    ) -> RestResult<QuoteResponse> {
        let params = SwapQuoteParams {
            cointypesell: sell_coin,
            cointypebuy: buy_coin,
            amount,
        };
        self.dispatcher.request("/quote/swap/now", &params, ACCESS).await
    }

    // ========================================================================
    // Market orders
    // ========================================================================

    /// Place a buy order on the book
    #[instrument(skip(self))]
    pub async fn place_market_buy_order(
        &self,
        order: &MarketOrder,
    ) -> RestResult<PlacedOrderResponse> {
        self.dispatcher.request("/my/buy", order, ACCESS).await
    }

    /// Place a sell order on the book
    #[instrument(skip(self))]
    pub async fn place_market_sell_order(
        &self,
        order: &MarketOrder,
    ) -> RestResult<PlacedOrderResponse> {
        self.dispatcher.request("/my/sell", order, ACCESS).await
    }

    /// Change the rate of an open buy order
    #[instrument(skip(self))]
    pub async fn edit_open_market_buy_order(
        &self,
        edit: &EditOrder,
    ) -> RestResult<EditedOrderResponse> {
        self.dispatcher.request("/my/buy/edit", edit, ACCESS).await
    }

    /// Change the rate of an open sell order
    #[instrument(skip(self))]
    pub async fn edit_open_market_sell_order(
        &self,
        edit: &EditOrder,
    ) -> RestResult<EditedOrderResponse> {
        self.dispatcher.request("/my/sell/edit", edit, ACCESS).await
    }

    // ========================================================================
    // Instant orders
    // ========================================================================

    /// Buy a coin now at the exchange rate
    #[instrument(skip(self))]
    pub async fn place_buy_now_order(
        &self,
        coin: &str,
        amount_type: AmountType,
        amount: Decimal,
        options: &NowOrderOptions,
    ) -> RestResult<NowOrderResponse> {
        let params = NowOrderParams {
            cointype: coin,
            amounttype: amount_type,
            amount,
            options,
        };
        self.dispatcher.request("/my/buy/now", &params, ACCESS).await
    }

    /// Sell a coin now at the exchange rate
    #[instrument(skip(self))]
    pub async fn place_sell_now_order(
        &self,
        coin: &str,
        amount_type: AmountType,
        amount: Decimal,
        options: &NowOrderOptions,
    ) -> RestResult<NowOrderResponse> {
        let params = NowOrderParams {
            cointype: coin,
            amounttype: amount_type,
            amount,
            options,
        };
        self.dispatcher.request("/my/sell/now", &params, ACCESS).await
    }

    /// Swap one coin for another now
    #[instrument(skip(self))]
    pub async fn place_swap_now_order(
        &self,
        sell_coin: &str,
        buy_coin: &str,
        amount: Decimal,
        options: &NowOrderOptions,
    ) -> RestResult<NowOrderResponse> {
        let params = SwapNowParams {
            cointypesell: sell_coin,
            cointypebuy: buy_coin,
            amount,
            options,
        };
        self.dispatcher.request("/my/swap/now", &params, ACCESS).await
    }

    // ========================================================================
    // Cancellation
    // ========================================================================

    #[instrument(skip(self))]
    pub async fn cancel_buy_order(&self, id: &str) -> RestResult<CancelOrderResponse> {
        self.dispatcher.request("/my/buy/cancel", &IdParams { id }, ACCESS).await
    }

    /// Cancel every open buy order, or only those for `coin`
    #[instrument(skip(self))]
    pub async fn cancel_all_buy_orders(
        &self,
        coin: Option<&str>,
    ) -> RestResult<CancelOrderResponse> {
        self.dispatcher
            .request("/my/buy/cancel/all", &CancelAllParams { coin }, ACCESS)
            .await
    }

    #[instrument(skip(self))]
    pub async fn cancel_sell_order(&self, id: &str) -> RestResult<CancelOrderResponse> {
        self.dispatcher.request("/my/sell/cancel", &IdParams { id }, ACCESS).await
    }

    /// Cancel every open sell order, or only those for `coin`
    #[instrument(skip(self))]
    pub async fn cancel_all_sell_orders(
        &self,
        coin: Option<&str>,
    ) -> RestResult<CancelOrderResponse> {
        self.dispatcher
            .request("/my/sell/cancel/all", &CancelAllParams { coin }, ACCESS)
            .await
    }
}
