//! Region catalog construction.

use scraper::Html;
use tracing::info;

use crate::error::Result;
use crate::extract;
use crate::fetch::PageFetcher;
use crate::types::RegionCatalog;

/// Top-level index page listing every region.
pub const INDEX_URL: &str = "https://www.nps.gov/index.htm";

/// Fetch the top-level index and build the region catalog.
///
/// Never cached: every call re-fetches the index page. Network and
/// parse failures propagate.
pub fn build_region_catalog(fetcher: &dyn PageFetcher) -> Result<RegionCatalog> {
    let body = fetcher.fetch(INDEX_URL)?;
    let document = Html::parse_document(&body);
    let catalog = extract::region_catalog(&document)?;
    info!(regions = catalog.len(), "Built region catalog");
    Ok(catalog)
}
