/*
[INPUT]:  API key, sandbox flag, optional HTTP timeouts
[OUTPUT]: Configured reqwest client, unwrapped JSON responses, credit usage
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing envelope handling
*/

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::http::cryptocurrency::Cryptocurrency;
use crate::http::{CoinMarketCapError, Result};
use crate::types::Status;

/// Base URLs for the CoinMarketCap Pro API
pub const PRODUCTION_BASE_URL: &str = "https://pro-api.coinmarketcap.com";
pub const SANDBOX_BASE_URL: &str = "https://sandbox-api.coinmarketcap.com";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "x-cmc_pro_api_key";

/// HTTP client configuration
///
/// Timeouts left as `None` fall back to reqwest's defaults.
#[derive(Debug, Clone, Default)]
pub struct ClientConfig {
    pub sandbox: bool,
    pub timeout: Option<Duration>,
    pub connect_timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn base_url(&self) -> &'static str {
        if self.sandbox {
            SANDBOX_BASE_URL
        } else {
            PRODUCTION_BASE_URL
        }
    }
}

/// Main HTTP client for the CoinMarketCap API
#[derive(Debug)]
pub struct CoinMarketCapClient {
    http_client: Client,
    base_url: Url,
    credit_count: Mutex<Option<u64>>,
}

impl CoinMarketCapClient {
    /// Create a client against production, or the sandbox when `sandbox` is set
    pub fn new(api_key: &str, sandbox: bool) -> Result<Self> {
        Self::with_config(
            api_key,
            ClientConfig {
                sandbox,
                ..ClientConfig::default()
            },
        )
    }

    /// Create a new client with custom configuration
    pub fn with_config(api_key: &str, config: ClientConfig) -> Result<Self> {
        let base_url = config.base_url();
        Self::with_config_and_base_url(api_key, config, base_url)
    }

    /// Create a client targeting an explicit base URL (mock servers, proxies)
    pub fn with_config_and_base_url(
        api_key: &str,
        config: ClientConfig,
        base_url: &str,
    ) -> Result<Self> {
        let mut key_value = HeaderValue::from_str(api_key).map_err(|_| {
            CoinMarketCapError::Config("API key is not a valid header value".to_string())
        })?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = config.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        let http_client = builder.build().map_err(|err| {
            CoinMarketCapError::Config(format!("failed to build HTTP client: {err}"))
        })?;

        Ok(Self {
            http_client,
            base_url: Url::parse(base_url)?,
            credit_count: Mutex::new(None),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Credits consumed by the last response, `None` before any response
    pub fn credit_count(&self) -> Option<u64> {
        *self.credit_count.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Cryptocurrency endpoints bound to this client
    pub fn cryptocurrency(&self) -> Cryptocurrency<'_> {
        Cryptocurrency::new(self)
    }

    /// GET `endpoint` with `query` serialized into the query string
    pub async fn get<Q>(&self, endpoint: &str, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        self.request::<Q, ()>(Method::GET, endpoint, Some(query), None)
            .await
    }

    /// POST `body` as JSON to `endpoint`
    pub async fn post<B>(&self, endpoint: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        self.request::<(), B>(Method::POST, endpoint, None, Some(body))
            .await
    }

    /// Send a request and unwrap the status envelope
    ///
    /// Returns the whole parsed body, envelope included.
    pub async fn request<Q, B>(
        &self,
        method: Method,
        endpoint: &str,
        query: Option<&Q>,
        body: Option<&B>,
    ) -> Result<Value>
    where
        Q: Serialize + ?Sized,
        B: Serialize + ?Sized,
    {
        let url = self.base_url.join(endpoint)?;
        debug!(%method, %url, "sending request");

        let mut builder = self.http_client.request(method, url);
        if let Some(query) = query {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let http_status = response.status();
        let bytes = response.bytes().await?;
        debug!(%http_status, len = bytes.len(), "received response");

        self.unwrap_envelope(&bytes)
    }

    fn unwrap_envelope(&self, body: &[u8]) -> Result<Value> {
        let payload: Value = serde_json::from_slice(body).map_err(|err| {
            CoinMarketCapError::Protocol(format!("response body is not valid JSON: {err}"))
        })?;

        let status_value = payload
            .get("status")
            .filter(|value| value.is_object())
            .ok_or_else(|| {
                CoinMarketCapError::Protocol("response has no status envelope".to_string())
            })?;
        let status = Status::deserialize(status_value).map_err(|err| {
            CoinMarketCapError::Protocol(format!("malformed status envelope: {err}"))
        })?;

        // Credits are charged on failures too.
        self.record_credit_count(status.credit_count);
        debug!(credit_count = status.credit_count, "status envelope");

        if !status.is_success() {
            let message = status.error_message.unwrap_or_default();
            warn!(code = status.error_code, %message, "API returned error status");
            return Err(CoinMarketCapError::Api {
                code: status.error_code,
                message,
            });
        }

        Ok(payload)
    }

    fn record_credit_count(&self, count: u64) {
        let mut guard = self
            .credit_count
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        *guard = Some(count);
    }
}
