//! Async wrapper around the synchronous PriceClient.
//!
//! This module provides an async interface to the synchronous PriceClient by using
//! `tokio::task::spawn_blocking` to run HTTP operations on a dedicated thread pool,
//! preventing blocking of the async runtime.

use crate::client::PriceClient;
use crate::error::{PriceApiError, PriceApiResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Async wrapper trait for price API operations.
#[async_trait]
pub trait AsyncPriceClient: Send + Sync {
    async fn get_price(&self, item_code: &str) -> PriceApiResult<f64>;
}

/// Async wrapper around the synchronous PriceClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP
/// operations on a dedicated thread pool, preventing blocking
/// the async runtime.
#[derive(Clone)]
pub struct AsyncPriceClientImpl {
    client: Arc<PriceClient>,
}

impl AsyncPriceClientImpl {
    pub fn new(client: PriceClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncPriceClient for AsyncPriceClientImpl {
    async fn get_price(&self, item_code: &str) -> PriceApiResult<f64> {
        let client = self.client.clone();
        let item_code = item_code.to_string();

        tokio::task::spawn_blocking(move || client.get_price(&item_code))
            .await
            .map_err(|e| PriceApiError::HttpError(format!("Task join error: {}", e)))?
    }
}
