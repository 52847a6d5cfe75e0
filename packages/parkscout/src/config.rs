use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// MapQuest API key; absence is fatal at startup
    pub mapquest_api_key: String,

    /// Directory holding both cache namespaces
    pub data_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            mapquest_api_key: env::var("MAPQUEST_API_KEY")
                .context("MAPQUEST_API_KEY must be set")?,
            data_dir: env::var("PARKSCOUT_DATA_DIR").unwrap_or_else(|_| "data".to_string()),
        })
    }
}
