//! Core entities: sites, catalogs, listings.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Literal placeholder for optional detail-page fields the markup omits.
pub const NONE_SENTINEL: &str = "None";

/// Ordered mapping of region display name (title case) to region listing URL.
///
/// Built once per run from the top-level index page; never persisted.
pub type RegionCatalog = IndexMap<String, String>;

/// Ordered mapping of site display name to site relative path.
///
/// One per region, in the order sites appear on the listing page.
pub type RegionListing = IndexMap<String, String>;

/// Every site of a region, fully fetched and parsed, in listing order.
pub type ResolvedRegion = Vec<Site>;

/// A single national site's detail record.
///
/// Built once from a detail page and never mutated afterwards. Optional
/// fields hold the literal `"None"` sentinel when the page omits them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Designation, e.g. "National Park". Some sites have a blank one.
    pub category: String,

    /// Display name, e.g. "Isle Royale"
    pub name: String,

    /// `"<locality>, <region-code>"`; either half may be the sentinel
    pub address: String,

    /// Postal code, e.g. "49931" or "82190-0168"
    pub zipcode: String,

    /// Phone, e.g. "(906) 482-0984"
    pub phone: String,
}

impl fmt::Display for Site {
    // One-line rendering used by the numbered site list.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}): {} {}",
            self.name, self.category, self.address, self.zipcode
        )
    }
}
