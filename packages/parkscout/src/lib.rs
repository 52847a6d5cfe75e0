//! Scrape-and-cache pipeline for U.S. national park sites.
//!
//! The pipeline turns nps.gov markup into normalized [`Site`] entities
//! and persists what it finds so repeated runs avoid re-fetching:
//!
//! - [`catalog`] builds the region-name → region-URL catalog from the
//!   top-level index page (rebuilt every run).
//! - [`listing`] resolves a region's site listing, memoized on disk.
//! - [`detail`] fetches individual detail pages and resolves whole
//!   regions, with a separate binary cache for the resolved entities.
//! - [`extract`] holds the CSS-selector extraction all of the above
//!   parse with.
//! - [`cache`] is the key-value store behind both cache namespaces.
//! - [`session`] drives the interactive prompt loop and the
//!   nearby-places lookups.
//!
//! Everything is single-threaded and blocking: one request at a time,
//! in listing order.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod listing;
pub mod session;
pub mod testing;
pub mod types;

// Re-export core types at crate root
pub use cache::{cache_key, CacheStore, Namespace};
pub use config::Config;
pub use error::{CacheError, ScrapeError};
pub use fetch::{HttpFetcher, PageFetcher};
pub use types::{RegionCatalog, RegionListing, ResolvedRegion, Site};
