//! Error types for the price cache.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when talking to the remote price API.
#[derive(Error, Debug)]
pub enum PriceApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error status code
    #[error("API error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// No price known for the item
    #[error("Price not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Generic API error with context
    #[error("API error: {0}")]
    Other(String),
}

/// Errors surfaced by the transparent cache.
///
/// The cache itself never fails; every error is an underlying fetch
/// failure tagged with the item code that caused it. A batch lookup
/// reports the first such failure and discards the rest of the batch.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The underlying price source failed for one item.
    #[error("getting price for {item_code}: {source}")]
    FetchFailed {
        item_code: String,
        #[source]
        source: PriceApiError,
    },
}

impl CacheError {
    /// The item code whose lookup failed.
    pub fn item_code(&self) -> &str {
        match self {
            CacheError::FetchFailed { item_code, .. } => item_code,
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with PriceApiError
pub type PriceApiResult<T> = Result<T, PriceApiError>;

/// Convenience type alias for Results with CacheError
pub type CacheResult<T> = Result<T, CacheError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
