//! The underlying price source seam.
//!
//! `PriceSource` is the one capability the cache consumes: given an item
//! code, return a price or fail. Calls are expected to be expensive
//! relative to a cache hit.

use crate::client::AsyncPriceClient;
use crate::error::PriceApiResult;
use async_trait::async_trait;
use std::sync::Arc;

/// A service that can resolve item codes to prices.
///
/// Provides abstraction over price retrieval, enabling different
/// implementations (API client, mock, cached). Each call is independent;
/// no retry or idempotence guarantees are assumed.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Fetch the current price for an item.
    async fn fetch(&self, item_code: &str) -> PriceApiResult<f64>;
}

/// Price source implementation backed by the remote price API.
///
/// Delegates to the AsyncPriceClient, providing a clean abstraction
/// layer between the cache and the underlying HTTP client.
pub struct RemotePriceSource {
    client: Arc<dyn AsyncPriceClient>,
}

impl RemotePriceSource {
    /// Create a new RemotePriceSource with the given client.
    pub fn new(client: Arc<dyn AsyncPriceClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PriceSource for RemotePriceSource {
    async fn fetch(&self, item_code: &str) -> PriceApiResult<f64> {
        self.client.get_price(item_code).await
    }
}
