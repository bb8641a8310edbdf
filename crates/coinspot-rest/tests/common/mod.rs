//! Common test utilities and fixtures for integration tests
//!
//! Response bodies follow the shapes documented for CoinSpot API v2.

#![allow(dead_code)]

use coinspot_rest::{Coinspot, Credentials, Hooks};
use httpmock::MockServer;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

pub const API_KEY: &str = "test-key";
pub const API_SECRET: &str = "test-secret";

/// Client with credentials, both namespaces pointed at `server`
pub fn authenticated_client(server: &MockServer) -> Coinspot {
    authenticated_client_with_hooks(server, Hooks::default())
}

pub fn authenticated_client_with_hooks(server: &MockServer, hooks: Hooks) -> Coinspot {
    Coinspot::builder()
        .with_credentials(Credentials::new(API_KEY, API_SECRET))
        .with_base_url(server.base_url())
        .with_hooks(hooks)
        .build()
        .unwrap()
}

/// Client without credentials, pointed at `server`
pub fn public_client(server: &MockServer) -> Coinspot {
    Coinspot::builder().with_base_url(server.base_url()).build().unwrap()
}

/// Owned copy of one hook invocation
#[derive(Debug, Clone)]
pub struct Recorded {
    pub operation: String,
    pub scope: String,
    pub params: Value,
    pub success: bool,
}

/// Hooks that keep every call for later inspection
pub fn recording_hooks() -> (Hooks, Arc<Mutex<Vec<Recorded>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink = calls.clone();
    let hooks = Hooks::new().on_call(move |record| {
        sink.lock().unwrap().push(Recorded {
            operation: record.operation.to_string(),
            scope: record.scope.to_string(),
            params: record.params.clone(),
            success: record.outcome.is_success(),
        });
    });
    (hooks, calls)
}

pub fn latest_prices_body() -> Value {
    json!({
        "status": "ok",
        "prices": {
            "btc": {"bid": "1.4", "ask": "1.6", "last": "1.5"},
            "eth": {"bid": 2000, "ask": 2010, "last": 2005}
        }
    })
}

pub fn balances_body() -> Value {
    json!({
        "status": "ok",
        "balances": [
            {"DOGE": {"balance": 10, "audbalance": 5, "rate": 0.5}},
            {"BTC": {"balance": 0.25, "audbalance": 25000, "rate": 100000}}
        ]
    })
}

pub fn deposit_address_body() -> Value {
    json!({
        "status": "ok",
        "networks": [
            {"name": "Bitcoin", "network": "BTC", "address": "bc1qtest", "memo": ""}
        ]
    })
}
