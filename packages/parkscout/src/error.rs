//! Typed errors for the scrape-and-cache pipeline.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can
//! match on what went wrong; the binary wraps these with `anyhow`.

use thiserror::Error;

/// Errors from fetching and parsing nps.gov pages.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// HTTP fetch failed or timed out
    #[error("network error: {0}")]
    Network(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// An expected structural landmark was missing from the markup
    #[error("parse error: {landmark} not found")]
    Parse { landmark: String },

    /// Cache read/write failed underneath a pipeline step
    #[error("cache error: {0}")]
    Cache(#[from] CacheError),
}

impl ScrapeError {
    /// Parse failure for a named landmark.
    pub fn missing(landmark: impl Into<String>) -> Self {
        Self::Parse {
            landmark: landmark.into(),
        }
    }

    /// Transport failure from any source error.
    pub fn network(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Network(Box::new(source))
    }
}

/// Errors from the on-disk cache store.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem read/write failed
    #[error("cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A listing record did not round-trip through JSON
    #[error("listing record error: {0}")]
    Json(#[from] serde_json::Error),

    /// A resolved-region record did not round-trip through bincode
    #[error("resolved record error: {0}")]
    Binary(#[from] bincode::Error),

    /// Read of a key with no record on disk
    #[error("no cache record for key: {key}")]
    Missing { key: String },
}

/// Result type alias for scrape operations.
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for cache operations.
pub type CacheResult<T> = std::result::Result<T, CacheError>;
