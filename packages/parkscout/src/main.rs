// Main entry point for the interactive park explorer

use anyhow::{Context, Result};
use mapquest_client::MapquestClient;
use parkscout_core::{session, CacheStore, Config, HttpFetcher};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;

    let fetcher = HttpFetcher::new().context("Failed to create HTTP client")?;
    let cache = CacheStore::open(&config.data_dir).context("Failed to open cache store")?;
    let places = MapquestClient::new(config.mapquest_api_key);

    session::run(&fetcher, &cache, &places)
}
