//! Basic metrics instrumentation.
//!
//! Provides counters for cache effectiveness and HTTP request tracking.
//! Counters are shared cheaply via `Arc` so clones observe the same totals.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Metrics collector for the transparent cache.
#[derive(Debug, Clone)]
pub struct CacheMetrics {
    /// Lookups answered from a fresh cache entry
    hits_total: Arc<AtomicU64>,

    /// Lookups that had to go to the underlying source
    misses_total: Arc<AtomicU64>,

    /// Stale entries removed on read
    evictions_total: Arc<AtomicU64>,

    /// Underlying fetches that failed
    fetch_errors_total: Arc<AtomicU64>,
}

impl Default for CacheMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl CacheMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            hits_total: Arc::new(AtomicU64::new(0)),
            misses_total: Arc::new(AtomicU64::new(0)),
            evictions_total: Arc::new(AtomicU64::new(0)),
            fetch_errors_total: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record a cache hit.
    pub fn record_hit(&self) {
        self.hits_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a cache miss.
    pub fn record_miss(&self) {
        self.misses_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stale entry evicted on read.
    pub fn record_eviction(&self) {
        self.evictions_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed underlying fetch.
    pub fn record_fetch_error(&self) {
        self.fetch_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total cache hits.
    pub fn hits_total(&self) -> u64 {
        self.hits_total.load(Ordering::Relaxed)
    }

    /// Get total cache misses.
    pub fn misses_total(&self) -> u64 {
        self.misses_total.load(Ordering::Relaxed)
    }

    /// Get total evictions.
    pub fn evictions_total(&self) -> u64 {
        self.evictions_total.load(Ordering::Relaxed)
    }

    /// Get total fetch errors.
    pub fn fetch_errors_total(&self) -> u64 {
        self.fetch_errors_total.load(Ordering::Relaxed)
    }

    /// Get the cache hit rate (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        let hits = self.hits_total() as f64;
        let total = (self.hits_total() + self.misses_total()) as f64;

        if total == 0.0 {
            0.0
        } else {
            hits / total
        }
    }

    /// Reset all counters to zero.
    pub fn reset(&self) {
        self.hits_total.store(0, Ordering::Relaxed);
        self.misses_total.store(0, Ordering::Relaxed);
        self.evictions_total.store(0, Ordering::Relaxed);
        self.fetch_errors_total.store(0, Ordering::Relaxed);
    }
}

/// Metrics collector for the HTTP price client.
#[derive(Debug, Clone)]
pub struct ClientMetrics {
    /// Total number of HTTP requests made
    http_requests_total: Arc<AtomicU64>,

    /// Total number of HTTP errors
    http_errors_total: Arc<AtomicU64>,

    /// Total duration of all HTTP requests in milliseconds
    http_duration_total_ms: Arc<AtomicU64>,
}

impl Default for ClientMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            http_requests_total: Arc::new(AtomicU64::new(0)),
            http_errors_total: Arc::new(AtomicU64::new(0)),
            http_duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record an HTTP request with duration.
    pub fn record_http_request(&self, duration: Duration) {
        self.http_requests_total.fetch_add(1, Ordering::Relaxed);
        self.http_duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Record an HTTP error.
    pub fn record_http_error(&self) {
        self.http_errors_total.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total HTTP requests.
    pub fn http_requests_total(&self) -> u64 {
        self.http_requests_total.load(Ordering::Relaxed)
    }

    /// Get total HTTP errors.
    pub fn http_errors_total(&self) -> u64 {
        self.http_errors_total.load(Ordering::Relaxed)
    }

    /// Get average HTTP request duration in milliseconds.
    pub fn http_duration_avg_ms(&self) -> f64 {
        let total = self.http_duration_total_ms.load(Ordering::Relaxed);
        let count = self.http_requests_total.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }
}
