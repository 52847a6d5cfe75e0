//! Region listing fetch with on-disk memoization.

use scraper::Html;
use tracing::{debug, info};

use crate::cache::{CacheStore, Namespace};
use crate::error::Result;
use crate::extract;
use crate::fetch::PageFetcher;
use crate::types::RegionListing;

/// Return a region's site listing, from cache when a record exists.
///
/// A record on disk is trusted unconditionally; the region page is
/// fetched only on a cache miss, and the extracted listing is written
/// back unconditionally before returning. Once persisted, a listing is
/// never re-derived unless its record is deleted externally.
pub fn region_listing(
    fetcher: &dyn PageFetcher,
    cache: &CacheStore,
    region_url: &str,
    region_name: &str,
) -> Result<RegionListing> {
    if cache.exists(Namespace::Listing, region_name) {
        debug!(region = region_name, "Listing cache hit");
        return Ok(cache.read(Namespace::Listing, region_name)?);
    }

    let body = fetcher.fetch(region_url)?;
    let document = Html::parse_document(&body);
    let listing = extract::region_listing(&document)?;

    cache.write(Namespace::Listing, region_name, &listing)?;
    info!(
        region = region_name,
        sites = listing.len(),
        "Cached region listing"
    );
    Ok(listing)
}
