//! Main client facade

use coinspot_auth::Credentials;
use coinspot_types::{
    Availability, BalancesResponse, BuySellPriceResponse, CoinPriceResponse,
    CompletedOrdersResponse, DepositAddressResponse, LatestPricesResponse, OrderBookResponse,
    PlacedOrderResponse, SingleCoinBalanceResponse,
};
use reqwest::Client;
use rust_decimal::Decimal;
use tracing::info;

use crate::builder::CoinspotBuilder;
use crate::config::ClientConfig;
use crate::dispatcher::RequestDispatcher;
use crate::endpoints::{FullAccessEndpoints, PublicEndpoints, ReadOnlyEndpoints};
use crate::error::{RestError, RestResult};
use crate::hooks::Hooks;
use crate::params::MarketOrder;

/// CoinSpot API client
///
/// Always serves the public endpoints. The read-only and full-access sets are
/// available only when the client was built with both an API key and a
/// secret; that state is fixed for the client's lifetime.
///
/// # Example
///
/// ```no_run
/// use coinspot_rest::Coinspot;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Public endpoints only
///     let client = Coinspot::public_only()?;
///     let prices = client.latest_prices().await?;
///
///     // With authentication for account endpoints
///     let auth_client = Coinspot::from_env()?;
///     let balances = auth_client.read_only()?.formatted_balances().await?;
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Coinspot {
    http_client: Client,
    public_url: String,
    hooks: Hooks,
    dispatcher: Option<RequestDispatcher>,
}

impl Coinspot {
    /// Create a client from an optional key and secret
    ///
    /// Authenticated endpoints are enabled only when both are present and
    /// non-empty.
    pub fn new(api_key: Option<String>, api_secret: Option<String>) -> RestResult<Self> {
        Self::builder().with_key_and_secret(api_key, api_secret).build()
    }

    /// Create a client without credentials
    pub fn public_only() -> RestResult<Self> {
        Self::with_config(ClientConfig::default(), Hooks::default())
    }

    /// Create a client with credentials
    pub fn with_credentials(credentials: Credentials) -> RestResult<Self> {
        Self::with_config(ClientConfig::new().with_credentials(credentials), Hooks::default())
    }

    /// Create a client with credentials from `COINSPOT_API_KEY` and `COINSPOT_API_SECRET`
    pub fn from_env() -> RestResult<Self> {
        Self::with_credentials(Credentials::from_env()?)
    }

    /// Start a builder
    pub fn builder() -> CoinspotBuilder {
        CoinspotBuilder::new()
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig, hooks: Hooks) -> RestResult<Self> {
        let http_client = config.build_http_client()?;

        let dispatcher = config.credentials.map(|credentials| {
            RequestDispatcher::from_parts(
                http_client.clone(),
                credentials,
                &config.api_url,
                hooks.clone(),
            )
        });

        info!(authenticated = dispatcher.is_some(), "Created CoinSpot client");

        Ok(Self {
            http_client,
            public_url: config.public_url,
            hooks,
            dispatcher,
        })
    }

    /// Check if the client has credentials for account endpoints
    pub fn is_authenticated(&self) -> bool {
        self.dispatcher.is_some()
    }

    // ========================================================================
    // Endpoint sets
    // ========================================================================

    /// Get public market data endpoints
    pub fn public(&self) -> PublicEndpoints<'_> {
        PublicEndpoints::new(&self.http_client, &self.public_url, &self.hooks)
    }

    /// Get read-only account endpoints (requires credentials)
    pub fn read_only(&self) -> RestResult<ReadOnlyEndpoints<'_>> {
        let dispatcher = self.dispatcher.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(ReadOnlyEndpoints::new(dispatcher))
    }

    /// Get full-access trading endpoints (requires credentials)
    pub fn full_access(&self) -> RestResult<FullAccessEndpoints<'_>> {
        let dispatcher = self.dispatcher.as_ref().ok_or(RestError::AuthRequired)?;
        Ok(FullAccessEndpoints::new(dispatcher))
    }

    // ========================================================================
    // Public shortcuts
    // ========================================================================

    /// Latest prices of every coin
    pub async fn latest_prices(&self) -> RestResult<LatestPricesResponse> {
        self.public().latest_prices().await
    }

    /// Latest prices of one coin in AUD
    pub async fn latest_coin_price(&self, coin: &str) -> RestResult<CoinPriceResponse> {
        self.public().latest_coin_price(coin).await
    }

    /// Latest buy price of one coin in AUD
    pub async fn latest_buy_price(&self, coin: &str) -> RestResult<BuySellPriceResponse> {
        self.public().latest_buy_price(coin).await
    }

    /// Latest sell price of one coin in AUD
    pub async fn latest_sell_price(&self, coin: &str) -> RestResult<BuySellPriceResponse> {
        self.public().latest_sell_price(coin).await
    }

    /// Open orders for a coin in AUD
    pub async fn open_order_list(&self, coin: &str) -> RestResult<OrderBookResponse> {
        self.public().open_orders(coin).await
    }

    /// Completed orders for a coin in AUD
    pub async fn completed_order_list(&self, coin: &str) -> RestResult<CompletedOrdersResponse> {
        self.public().completed_orders(coin).await
    }

    // ========================================================================
    // Account shortcuts
    // ========================================================================

    /// Balances of every coin held
    pub async fn balance(&self) -> RestResult<BalancesResponse> {
        self.read_only()?.balances().await
    }

    /// Available balance of one coin
    pub async fn coin_balance(&self, coin: &str) -> RestResult<SingleCoinBalanceResponse> {
        self.read_only()?.coin_balance(coin, Availability::Yes).await
    }

    /// Deposit addresses of a coin
    pub async fn coin_deposit_address(&self, coin: &str) -> RestResult<DepositAddressResponse> {
        self.full_access()?.coin_deposit_address(coin).await
    }

    /// Place a buy order on the AUD book
    pub async fn market_buy_order(
        &self,
        coin: &str,
        amount: Decimal,
        rate: Decimal,
    ) -> RestResult<PlacedOrderResponse> {
        self.full_access()?
            .place_market_buy_order(&MarketOrder::new(coin, amount, rate))
            .await
    }

    /// Place a sell order on the AUD book
    pub async fn market_sell_order(
        &self,
        coin: &str,
        amount: Decimal,
        rate: Decimal,
    ) -> RestResult<PlacedOrderResponse> {
        self.full_access()?
            .place_market_sell_order(&MarketOrder::new(coin, amount, rate))
            .await
    }
}

impl std::fmt::Debug for Coinspot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coinspot")
            .field("public_url", &self.public_url)
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_without_credentials() {
        let client = Coinspot::public_only().unwrap();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn test_auth_required_error() {
        let client = Coinspot::new(None, None).unwrap();
        assert!(matches!(client.read_only(), Err(RestError::AuthRequired)));
        assert!(matches!(client.full_access(), Err(RestError::AuthRequired)));
    }

    #[test]
    fn test_partial_credentials_stay_unauthenticated() {
        let client = Coinspot::new(Some("key".into()), None).unwrap();
        assert!(!client.is_authenticated());

        let client = Coinspot::new(Some("key".into()), Some(String::new())).unwrap();
        assert!(!client.is_authenticated());

        let client = Coinspot::new(Some("key".into()), Some("secret".into())).unwrap();
        assert!(client.is_authenticated());
        assert!(client.read_only().is_ok());
    }

    #[test]
    fn test_debug_hides_credentials() {
        let client =
            Coinspot::with_credentials(Credentials::new("abcdefghijkl", "topsecret")).unwrap();
        let debug = format!("{:?}", client);
        assert!(debug.contains("authenticated: true"));
        assert!(!debug.contains("topsecret"));
    }
}
