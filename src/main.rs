//! Price cache - main entry point
//!
//! Wires the HTTP price client, the price source seam, and the transparent
//! cache together, then resolves the item codes given on the command line.

use anyhow::Result;
use price_cache::client::{AsyncPriceClient, AsyncPriceClientImpl};
use price_cache::source::RemotePriceSource;
use price_cache::{Config, PriceClient, TransparentCache};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging (stderr only, stdout carries the results)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        "Price API URL: {}, max age: {}s",
        config.price_api_url, config.max_age_secs
    );

    let item_codes: Vec<String> = std::env::args().skip(1).collect();
    if item_codes.is_empty() {
        anyhow::bail!("usage: price-cache <item-code> [<item-code>...]");
    }

    // Initialize the client, the source seam, and the cache
    let sync_client = PriceClient::new(&config);
    let client = Arc::new(AsyncPriceClientImpl::new(sync_client)) as Arc<dyn AsyncPriceClient>;
    let source = Arc::new(RemotePriceSource::new(client));
    let cache = TransparentCache::new(source, config.max_age());

    let prices = cache.get_prices(&item_codes).await?;
    for (code, price) in item_codes.iter().zip(&prices) {
        println!("{} {}", code, price);
    }

    info!(
        "Resolved {} item(s), cache hit rate {:.2}",
        item_codes.len(),
        cache.metrics().hit_rate()
    );

    Ok(())
}
