//! HTTP client for the remote price API.
//!
//! This module provides a synchronous HTTP client that can be used from async contexts
//! via `tokio::task::spawn_blocking`. The client handles authentication, error mapping,
//! and JSON decoding for the price API.

mod async_wrapper;
pub use async_wrapper::{AsyncPriceClient, AsyncPriceClientImpl};

use crate::config::Config;
use crate::error::{PriceApiError, PriceApiResult};
use crate::metrics::ClientMetrics;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A single price quote as returned by the price API.
#[derive(Debug, Clone, Deserialize)]
pub struct Quote {
    /// The item code the quote is for
    pub item_code: String,

    /// The quoted price
    pub price: f64,

    /// ISO currency code, if the API reports one
    #[serde(default)]
    pub currency: Option<String>,

    /// Server-side timestamp of the quote, if the API reports one
    #[serde(default)]
    pub as_of: Option<DateTime<Utc>>,
}

/// HTTP client for the remote price API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`.
#[derive(Clone)]
pub struct PriceClient {
    /// Base URL for the price API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: ClientMetrics,
}

impl PriceClient {
    /// Create a new PriceClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.price_api_url.clone(),
            api_key: config.price_api_key.clone(),
            agent: Arc::new(agent),
            metrics: ClientMetrics::new(),
        }
    }

    /// Create a PriceClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: ClientMetrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &ClientMetrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, PriceApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("x-price-api-key", &self.api_key)
            .set("Content-Type", "application/json")
            .call()
            .map_err(|e| self.map_error(e));

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Map a ureq error to a PriceApiError.
    fn map_error(&self, error: ureq::Error) -> PriceApiError {
        match error {
            ureq::Error::Status(code, response) => {
                let message = response
                    .into_string()
                    .unwrap_or_else(|_| "Unknown error".to_string());

                match code {
                    401 => PriceApiError::Unauthorized,
                    404 => PriceApiError::NotFound(message),
                    429 => PriceApiError::RateLimitExceeded,
                    _ => PriceApiError::ApiError {
                        status: code,
                        message,
                    },
                }
            }
            ureq::Error::Transport(transport) => {
                if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                    PriceApiError::HttpError("Connection failed".to_string())
                } else if transport.kind() == ureq::ErrorKind::Io {
                    PriceApiError::Timeout
                } else {
                    PriceApiError::HttpError(transport.to_string())
                }
            }
        }
    }

    /// Get the current price for an item.
    pub fn get_price(&self, item_code: &str) -> PriceApiResult<f64> {
        let path = format!("/prices/{}", urlencoding::encode(item_code));
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| PriceApiError::HttpError(e.to_string()))?;

        let quote: Quote = serde_json::from_str(&body).map_err(PriceApiError::JsonError)?;

        tracing::debug!(
            item_code = %quote.item_code,
            price = quote.price,
            as_of = ?quote.as_of,
            "Quote received"
        );

        Ok(quote.price)
    }
}
