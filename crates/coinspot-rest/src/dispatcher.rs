//! Signed request pipeline shared by every authenticated endpoint
//!
//! One call is one round-trip: build the payload, add a fresh nonce, sign the
//! serialized body, POST it to the namespace picked by [`AccessLevel`], then
//! decode. There is no retry.

use coinspot_auth::{Credentials, NonceGenerator};
use coinspot_types::AccessLevel;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::ClientConfig;
use crate::error::{RestError, RestResult};
use crate::hooks::{CallOutcome, CallRecord, CallScope, Hooks};

/// Path prefix of the authenticated API
const API_PREFIX: &str = "/api/v2";

/// Body key carrying the nonce
const NONCE_KEY: &str = "nonce";

/// Authenticated request dispatcher
///
/// Cheap to clone; clones share credentials and the nonce sequence, so
/// nonces stay strictly increasing across all of them.
#[derive(Clone)]
pub struct RequestDispatcher {
    client: Client,
    credentials: Arc<Credentials>,
    nonce: Arc<NonceGenerator>,
    api_url: String,
    hooks: Hooks,
}

impl RequestDispatcher {
    /// Create a dispatcher with its own HTTP client
    pub fn new(credentials: Credentials, config: &ClientConfig) -> RestResult<Self> {
        Self::with_hooks(credentials, config, Hooks::default())
    }

    /// Create a dispatcher that reports every call to `hooks`
    pub fn with_hooks(
        credentials: Credentials,
        config: &ClientConfig,
        hooks: Hooks,
    ) -> RestResult<Self> {
        let client = config.build_http_client()?;
        Ok(Self::from_parts(client, credentials, &config.api_url, hooks))
    }

    pub(crate) fn from_parts(
        client: Client,
        credentials: Credentials,
        api_url: &str,
        hooks: Hooks,
    ) -> Self {
        Self {
            client,
            credentials: Arc::new(credentials),
            nonce: Arc::new(NonceGenerator::new()),
            api_url: api_url.trim_end_matches('/').to_string(),
            hooks,
        }
    }

    /// API key requests are signed for
    pub fn api_key(&self) -> &str {
        self.credentials.api_key()
    }

    /// Last nonce sent, 0 before the first call
    pub fn last_nonce(&self) -> u64 {
        self.nonce.last()
    }

    /// Send a signed request and decode the response body into `T`
    ///
    /// `params` must serialize to a JSON object (or unit); any `nonce` key in
    /// it is replaced. The response `status` is not inspected.
    #[instrument(skip(self, params, access), fields(access = %access))]
    pub async fn request<T, P>(&self, path: &str, params: &P, access: AccessLevel) -> RestResult<T>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let payload = encode_payload(params, self.nonce.next())?;
        let body = serde_json::to_string(&payload)
            .map_err(|e| RestError::InvalidParameter(e.to_string()))?;
        let signature = self.credentials.sign(&body);
        let url = format!("{}{}{}{}", self.api_url, API_PREFIX, access.path_suffix(), path);

        debug!(url = %url, "Making authenticated request");

        let request = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .header("sign", signature)
            .header("key", self.credentials.api_key())
            .body(body);

        let result = execute(request).await;
        complete(&self.hooks, path, CallScope::Authenticated(access), &payload, result)
    }

    /// Send a signed request whose only body field is the nonce
    pub async fn request_empty<T>(&self, path: &str, access: AccessLevel) -> RestResult<T>
    where
        T: DeserializeOwned,
    {
        self.request(path, &(), access).await
    }
}

impl std::fmt::Debug for RequestDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestDispatcher")
            .field("api_url", &self.api_url)
            .field("credentials", &self.credentials)
            .field("last_nonce", &self.nonce.last())
            .finish()
    }
}

/// Turn `params` into the body object and stamp it with `nonce`
pub(crate) fn encode_payload<P: Serialize + ?Sized>(params: &P, nonce: u64) -> RestResult<Value> {
    let mut payload = match serde_json::to_value(params) {
        Ok(Value::Object(map)) => map,
        Ok(Value::Null) => Map::new(),
        Ok(other) => {
            return Err(RestError::InvalidParameter(format!(
                "parameters must be a JSON object, got {other}"
            )))
        }
        Err(e) => return Err(RestError::InvalidParameter(e.to_string())),
    };

    payload.remove(NONCE_KEY);
    payload.insert(NONCE_KEY.to_string(), Value::from(nonce));
    Ok(Value::Object(payload))
}

/// Send a request and read its body as JSON
pub(crate) async fn execute(request: RequestBuilder) -> RestResult<Value> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!(status = status.as_u16(), "Request failed");
        return Err(RestError::HttpStatus {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|source| RestError::Decode { source, body })
}

/// Decode the typed result, then report what the caller gets to the hooks
pub(crate) fn complete<T: DeserializeOwned>(
    hooks: &Hooks,
    operation: &str,
    scope: CallScope,
    params: &Value,
    result: RestResult<Value>,
) -> RestResult<T> {
    let decoded = result.and_then(|value| match T::deserialize(&value) {
        Ok(data) => Ok((data, value)),
        Err(source) => Err(RestError::Decode {
            source,
            body: value.to_string(),
        }),
    });

    if !hooks.is_empty() {
        let outcome = match &decoded {
            Ok((_, value)) => CallOutcome::Success(value),
            Err(err) => CallOutcome::Failure(err),
        };
        hooks.invoke_call(&CallRecord {
            operation,
            scope,
            params,
            outcome,
        });
    }

    decoded.map(|(data, _)| data)
}
