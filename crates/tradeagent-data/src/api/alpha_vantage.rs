//! Alpha Vantage API client

use crate::error::{DataError, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::Client;
use std::collections::BTreeMap;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use tradeagent_utils::Config;

const BASE_URL: &str = "https://www.alphavantage.co/query";
const PROVIDER: &str = "Alpha Vantage";

/// Datetime layout the vendor expects for `time_from` / `time_to`
const API_DATETIME_FORMAT: &str = "%Y%m%dT%H%M";

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

/// Query parameters of one vendor call, excluding `function` and `apikey`
pub type VendorParams = BTreeMap<String, String>;

/// Source of raw vendor responses
///
/// Takes a function identifier (e.g. `"OVERVIEW"`, `"NEWS_SENTIMENT"`) and
/// query parameters and returns the response body as text. Callers must not
/// assume the body is JSON.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VendorFetch: Send + Sync {
    /// Issue one request and return the raw body
    async fn fetch(&self, function: &str, params: &VendorParams) -> Result<String>;
}

/// Alpha Vantage API client
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    client: Client,
    api_key: String,
    base_url: String,
    rate_limiter: SharedRateLimiter,
}

impl AlphaVantageClient {
    /// Create a new Alpha Vantage client with API key and rate limit
    ///
    /// # Arguments
    /// * `api_key` - Alpha Vantage API key
    /// * `rate_limit` - Maximum requests per minute (5 on the free tier; 0 is treated as 1)
    pub fn new(api_key: impl Into<String>, rate_limit: u32) -> Self {
        Self::with_client(Client::new(), api_key, rate_limit)
    }

    fn with_client(client: Client, api_key: impl Into<String>, rate_limit: u32) -> Self {
        let quota = Quota::per_minute(NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::MIN));

        Self {
            client,
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
            rate_limiter: Arc::new(RateLimiter::direct(quota)),
        }
    }

    /// Build a client from the API key, rate limit and timeout in `config`
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.alpha_vantage_key()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self::with_client(
            client,
            api_key,
            config.alpha_vantage_rate_limit,
        ))
    }

    /// Create from environment variable ALPHA_VANTAGE_API_KEY with default rate limit
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("ALPHA_VANTAGE_API_KEY").map_err(|_| {
            DataError::ConfigError(tradeagent_utils::ConfigError::MissingApiKey(
                "ALPHA_VANTAGE_API_KEY",
            ))
        })?;

        Ok(Self::new(api_key, 5))
    }

    /// Point the client at another endpoint (e.g. a recording proxy)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl VendorFetch for AlphaVantageClient {
    #[instrument(skip(self, params))]
    async fn fetch(&self, function: &str, params: &VendorParams) -> Result<String> {
        // Wait for rate limiter
        self.rate_limiter.until_ready().await;

        let mut query: Vec<(&str, &str)> = params
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        query.push(("function", function));
        query.push(("apikey", self.api_key.as_str()));

        debug!(?params, "Requesting {}", function);

        let response = self.client.get(&self.base_url).query(&query).send().await?;

        if !response.status().is_success() {
            return Err(DataError::ApiError(format!(
                "HTTP error: {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        check_rate_limit(&body)?;

        Ok(body)
    }
}

/// Map the vendor's throttling notices to `RateLimitExceeded`
///
/// Throttled calls still answer 200 with a JSON object carrying `Note` or an
/// `Information` message about the rate limit.
fn check_rate_limit(body: &str) -> Result<()> {
    let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(body) else {
        return Ok(());
    };

    let notice = map.get("Note").and_then(|v| v.as_str()).or_else(|| {
        map.get("Information")
            .and_then(|v| v.as_str())
            .filter(|info| info.to_lowercase().contains("rate limit"))
    });

    match notice {
        Some(message) => Err(DataError::RateLimitExceeded {
            provider: PROVIDER.to_string(),
            message: message.to_string(),
        }),
        None => Ok(()),
    }
}

/// Convert a date or datetime into the vendor's `YYYYMMDDTHHMM` layout
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM`, or a value already in the
/// target layout.
pub fn format_datetime_for_api(input: &str) -> Result<String> {
    let input = input.trim();

    if NaiveDateTime::parse_from_str(input, API_DATETIME_FORMAT).is_ok() {
        return Ok(input.to_string());
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.format("%Y%m%dT0000").to_string());
    }
    if let Ok(datetime) = NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M") {
        return Ok(datetime.format(API_DATETIME_FORMAT).to_string());
    }

    Err(DataError::InvalidDate(input.to_string()))
}
