//! Site detail fetch and bulk region resolution.

use scraper::Html;
use tracing::{info, warn};

use crate::cache::{CacheStore, Namespace};
use crate::error::Result;
use crate::extract::{self, BASE_URL};
use crate::fetch::PageFetcher;
use crate::types::{RegionListing, ResolvedRegion, Site};

/// Filename appended to every site path to reach its detail page.
const INDEX_FILE: &str = "index.htm";

/// Fetch and parse one site detail page.
///
/// An empty response body yields `Ok(None)`; the condition is logged
/// rather than raised. There is no per-call caching — caching happens
/// one layer up, at resolved-region granularity.
pub fn site_detail(fetcher: &dyn PageFetcher, site_path: &str) -> Result<Option<Site>> {
    let url = format!("{}{}{}", BASE_URL, site_path, INDEX_FILE);
    let body = fetcher.fetch(&url)?;
    if body.is_empty() {
        warn!(url = %url, "Empty response for detail page");
        return Ok(None);
    }

    let document = Html::parse_document(&body);
    Ok(Some(extract::site_detail(&document)?))
}

/// Resolve every site in a listing, consulting the resolved-entities
/// cache first.
///
/// Detail pages are fetched one at a time, in listing order. Per-site
/// failures are logged and skipped — they never abort the rest of the
/// batch. The resolved list is persisted only when every entry produced
/// an entity, so the presence of a cache record always means the whole
/// region resolved.
pub fn resolve_region(
    fetcher: &dyn PageFetcher,
    cache: &CacheStore,
    listing: &RegionListing,
    region_name: &str,
) -> Result<ResolvedRegion> {
    if cache.exists(Namespace::Resolved, region_name) {
        info!(region = region_name, "Resolved-region cache hit");
        return Ok(cache.read(Namespace::Resolved, region_name)?);
    }

    let mut sites = ResolvedRegion::new();
    let mut complete = true;
    for (name, path) in listing {
        match site_detail(fetcher, path) {
            Ok(Some(site)) => sites.push(site),
            Ok(None) => {
                complete = false;
            }
            Err(err) => {
                warn!(site = name.as_str(), error = %err, "Skipping site");
                complete = false;
            }
        }
    }

    if complete {
        cache.write(Namespace::Resolved, region_name, &sites)?;
        info!(
            region = region_name,
            sites = sites.len(),
            "Cached resolved region"
        );
    } else {
        warn!(region = region_name, "Partial resolution; not caching");
    }

    Ok(sites)
}
