//! Price Cache - a transparent caching layer for slow price lookup services.
//!
//! This library wraps a fallible, latency-unbounded price source with an
//! in-memory cache so repeated lookups for the same item within a freshness
//! window never hit the underlying service, while callers are guaranteed to
//! never observe a price older than the configured maximum age.
//!
//! # Architecture
//!
//! - **cache**: The transparent cache (single-item and batch lookups)
//! - **source**: The `PriceSource` seam the cache consumes
//! - **client**: HTTP client for the remote price API
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **metrics**: Counters for cache effectiveness and HTTP traffic

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod source;

pub use cache::TransparentCache;
pub use client::{AsyncPriceClient, AsyncPriceClientImpl, PriceClient, Quote};
pub use config::Config;
pub use error::{CacheError, ConfigError, PriceApiError};
pub use metrics::{CacheMetrics, ClientMetrics};
pub use source::{PriceSource, RemotePriceSource};
