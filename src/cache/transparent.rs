//! Transparent caching wrapper around a price source.
//!
//! The cache remembers prices it has already resolved so repeated lookups
//! within the freshness window never hit the underlying service, and it
//! never serves a price older than `max_age`.

use crate::error::{CacheError, CacheResult};
use crate::metrics::CacheMetrics;
use crate::source::PriceSource;
use futures::future;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// A cached price and the instant it was fetched.
///
/// Replaced wholesale on refresh, never mutated in place.
#[derive(Debug, Clone, Copy)]
struct CacheEntry {
    value: f64,
    observed_at: Instant,
}

impl CacheEntry {
    fn now(value: f64) -> Self {
        Self {
            value,
            observed_at: Instant::now(),
        }
    }

    fn is_fresh(&self, max_age: Duration) -> bool {
        self.observed_at.elapsed() < max_age
    }
}

/// A cache that wraps the actual price source.
///
/// Lookups that hit a fresh entry are answered from memory; anything else
/// goes to the underlying source and the result is stored. Entries older
/// than `max_age` are evicted on read, so a caller can never observe a
/// stale price.
///
/// The entry map is guarded by a single async mutex that is held across
/// the underlying fetch. This serializes the whole fetch-or-hit cycle:
/// at most one fetch is in flight per cache instance, which also rules
/// out duplicate concurrent fetches for the same item.
pub struct TransparentCache {
    source: Arc<dyn PriceSource>,
    max_age: Duration,
    prices: Mutex<HashMap<String, CacheEntry>>,
    metrics: CacheMetrics,
}

impl TransparentCache {
    /// Create a new cache in front of `source`.
    ///
    /// # Arguments
    /// * `source` - The underlying price source to delegate misses to
    /// * `max_age` - Maximum age of a cached price before it must be refetched
    pub fn new(source: Arc<dyn PriceSource>, max_age: Duration) -> Self {
        Self {
            source,
            max_age,
            prices: Mutex::new(HashMap::new()),
            metrics: CacheMetrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &CacheMetrics {
        &self.metrics
    }

    /// The configured freshness window.
    pub fn max_age(&self) -> Duration {
        self.max_age
    }

    /// Get the price for an item, either from the cache or the underlying
    /// source if it was not cached or too old.
    ///
    /// A stale entry is removed before the refetch, and a failed fetch
    /// leaves the map untouched, so the map only ever holds prices the
    /// source actually returned.
    pub async fn get_price(&self, item_code: &str) -> CacheResult<f64> {
        let mut prices = self.prices.lock().await;

        match prices.get(item_code) {
            Some(entry) if entry.is_fresh(self.max_age) => {
                self.metrics.record_hit();
                tracing::trace!(item_code, "cache hit");
                return Ok(entry.value);
            }
            Some(_) => {
                // Expired, the entry must not outlive this read.
                prices.remove(item_code);
                self.metrics.record_eviction();
                tracing::debug!(item_code, "evicted stale price");
            }
            None => {}
        }

        self.metrics.record_miss();
        let value = match self.source.fetch(item_code).await {
            Ok(value) => value,
            Err(source) => {
                self.metrics.record_fetch_error();
                tracing::error!(item_code, error = %source, "price fetch failed");
                return Err(CacheError::FetchFailed {
                    item_code: item_code.to_string(),
                    source,
                });
            }
        };

        tracing::debug!(item_code, price = value, "price fetched and cached");
        prices.insert(item_code.to_string(), CacheEntry::now(value));
        Ok(value)
    }

    /// Get the prices for several items at once, some might be found in
    /// the cache, others might not.
    ///
    /// All lookups run concurrently; the returned prices are in the same
    /// order as `item_codes`, repeats allowed. If any lookup fails, the
    /// whole batch fails with the first error in input order and no
    /// partial results are returned.
    pub async fn get_prices<S>(&self, item_codes: &[S]) -> CacheResult<Vec<f64>>
    where
        S: AsRef<str>,
    {
        let lookups = item_codes.iter().map(|code| self.get_price(code.as_ref()));
        future::join_all(lookups).await.into_iter().collect()
    }
}

impl std::fmt::Debug for TransparentCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransparentCache")
            .field("max_age", &self.max_age)
            .finish()
    }
}
