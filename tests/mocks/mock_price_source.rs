use async_trait::async_trait;
use price_cache::error::{PriceApiError, PriceApiResult};
use price_cache::source::PriceSource;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock price source for testing.
///
/// Provides an in-memory implementation of PriceSource that can be
/// configured with test data, scripted failures, and an artificial
/// per-fetch delay, and tracks fetch calls for verification.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockPriceSource {
    prices: Arc<Mutex<HashMap<String, f64>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    fetch_counts: Arc<Mutex<HashMap<String, usize>>>,
    delay: Arc<Mutex<Option<Duration>>>,
}

#[allow(dead_code)]
impl MockPriceSource {
    /// Create a new empty MockPriceSource.
    pub fn new() -> Self {
        Self {
            prices: Arc::new(Mutex::new(HashMap::new())),
            failing: Arc::new(Mutex::new(HashSet::new())),
            fetch_counts: Arc::new(Mutex::new(HashMap::new())),
            delay: Arc::new(Mutex::new(None)),
        }
    }

    /// Set the price returned for an item.
    pub fn set_price(&self, item_code: &str, price: f64) {
        let mut prices = self.prices.lock().unwrap();
        prices.insert(item_code.to_string(), price);
    }

    /// Set several prices at once.
    pub fn set_prices(&self, pairs: &[(&str, f64)]) {
        let mut prices = self.prices.lock().unwrap();
        for (item_code, price) in pairs {
            prices.insert(item_code.to_string(), *price);
        }
    }

    /// Make every subsequent fetch for an item fail.
    pub fn fail_for(&self, item_code: &str) {
        let mut failing = self.failing.lock().unwrap();
        failing.insert(item_code.to_string());
    }

    /// Stop failing fetches for an item.
    pub fn clear_failure(&self, item_code: &str) {
        let mut failing = self.failing.lock().unwrap();
        failing.remove(item_code);
    }

    /// Apply an artificial delay to every fetch, simulating a slow service.
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    /// Get the number of times an item was fetched.
    pub fn fetch_count(&self, item_code: &str) -> usize {
        let counts = self.fetch_counts.lock().unwrap();
        *counts.get(item_code).unwrap_or(&0)
    }

    /// Get the total number of fetches across all items.
    pub fn total_fetches(&self) -> usize {
        let counts = self.fetch_counts.lock().unwrap();
        counts.values().sum()
    }

    /// Reset all fetch counts.
    pub fn reset_fetch_counts(&self) {
        let mut counts = self.fetch_counts.lock().unwrap();
        counts.clear();
    }

    fn track_fetch(&self, item_code: &str) {
        let mut counts = self.fetch_counts.lock().unwrap();
        *counts.entry(item_code.to_string()).or_insert(0) += 1;
    }
}

impl Default for MockPriceSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceSource for MockPriceSource {
    async fn fetch(&self, item_code: &str) -> PriceApiResult<f64> {
        self.track_fetch(item_code);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if self.failing.lock().unwrap().contains(item_code) {
            return Err(PriceApiError::Other(format!(
                "service unavailable for {}",
                item_code
            )));
        }

        let prices = self.prices.lock().unwrap();
        prices
            .get(item_code)
            .copied()
            .ok_or_else(|| PriceApiError::NotFound(format!("no price for {}", item_code)))
    }
}
