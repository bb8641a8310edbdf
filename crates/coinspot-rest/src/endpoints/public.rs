//! Public market data endpoints
//!
//! These endpoints don't require authentication.

use coinspot_types::{
    BuySellPriceResponse, CoinPriceResponse, CompletedOrdersResponse, LatestPricesResponse,
    OrderBookResponse,
};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::dispatcher::{complete, execute};
use crate::error::RestResult;
use crate::hooks::{CallScope, Hooks};

/// Path prefix of the public API
const PUBLIC_PREFIX: &str = "/pubapi/v2";

/// Public market data endpoints
pub struct PublicEndpoints<'a> {
    client: &'a Client,
    base_url: &'a str,
    hooks: &'a Hooks,
}

impl<'a> PublicEndpoints<'a> {
    pub fn new(client: &'a Client, base_url: &'a str, hooks: &'a Hooks) -> Self {
        Self {
            client,
            base_url,
            hooks,
        }
    }

    /// Make an unauthenticated GET request
    async fn get<T: DeserializeOwned>(&self, path: &str) -> RestResult<T> {
        let url = format!("{}{}{}", self.base_url, PUBLIC_PREFIX, path);
        debug!(url = %url, "Making public request");

        let result = execute(self.client.get(&url)).await;
        complete(self.hooks, path, CallScope::Public, &Value::Null, result)
    }

    /// Latest bid, ask and last price of every coin
    #[instrument(skip(self))]
    pub async fn latest_prices(&self) -> RestResult<LatestPricesResponse> {
        self.get("/latest").await
    }

    /// Latest prices of one coin in AUD
    #[instrument(skip(self))]
    pub async fn latest_coin_price(&self, coin: &str) -> RestResult<CoinPriceResponse> {
        self.get(&format!("/latest/{coin}")).await
    }

    /// Latest prices of one coin in a non-AUD market
    #[instrument(skip(self))]
    pub async fn latest_coin_market_price(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<CoinPriceResponse> {
        self.get(&format!("/latest/{coin}/{market}")).await
    }

    /// Latest buy price of one coin in AUD
    #[instrument(skip(self))]
    pub async fn latest_buy_price(&self, coin: &str) -> RestResult<BuySellPriceResponse> {
        self.get(&format!("/buyprice/{coin}")).await
    }

    /// Latest buy price of one coin in a non-AUD market
    #[instrument(skip(self))]
    pub async fn latest_buy_market_price(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<BuySellPriceResponse> {
        self.get(&format!("/buyprice/{coin}/{market}")).await
    }

    /// Latest sell price of one coin in AUD
    #[instrument(skip(self))]
    pub async fn latest_sell_price(&self, coin: &str) -> RestResult<BuySellPriceResponse> {
        self.get(&format!("/sellprice/{coin}")).await
    }

    /// Latest sell price of one coin in a non-AUD market
    #[instrument(skip(self))]
    pub async fn latest_sell_market_price(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<BuySellPriceResponse> {
        self.get(&format!("/sellprice/{coin}/{market}")).await
    }

    /// Top 20 open buy and sell orders for a coin in AUD
    #[instrument(skip(self))]
    pub async fn open_orders(&self, coin: &str) -> RestResult<OrderBookResponse> {
        self.get(&format!("/orders/open/{coin}")).await
    }

    /// Top 20 open buy and sell orders for a coin in a non-AUD market
    #[instrument(skip(self))]
    pub async fn open_market_orders(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<OrderBookResponse> {
        self.get(&format!("/orders/open/{coin}/{market}")).await
    }

    /// Last 200 completed orders for a coin in AUD
    #[instrument(skip(self))]
    pub async fn completed_orders(&self, coin: &str) -> RestResult<CompletedOrdersResponse> {
        self.get(&format!("/orders/completed/{coin}")).await
    }

    /// Last 200 completed orders for a coin in a non-AUD market
    #[instrument(skip(self))]
    pub async fn completed_market_orders(
        &self,
        coin: &str,
        market: &str,
    ) -> RestResult<CompletedOrdersResponse> {
        self.get(&format!("/orders/completed/{coin}/{market}")).await
    }
}
