//! Markup extraction for nps.gov pages.
//!
//! All extraction goes through the `scraper` crate's CSS selectors.
//! Catalog and listing extraction treat a missing container as a hard
//! parse failure; detail-page optional fields degrade per field to the
//! `"None"` sentinel instead.

use scraper::{Html, Selector};

use crate::error::{Result, ScrapeError};
use crate::types::{RegionCatalog, RegionListing, Site, NONE_SENTINEL};

/// Base origin every relative nps.gov path is joined onto.
pub const BASE_URL: &str = "https://www.nps.gov";

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|_| ScrapeError::missing(css))
}

/// Map region display names to absolute region URLs from the top-level
/// index page's dropdown.
///
/// Anchors without an `href` are skipped; a partial mapping is the
/// caller's problem, a missing dropdown is ours.
pub fn region_catalog(document: &Html) -> Result<RegionCatalog> {
    let dropdown = selector("ul.dropdown-menu.SearchBar-keywordSearch")?;
    let anchor = selector("a")?;

    let container = document
        .select(&dropdown)
        .next()
        .ok_or_else(|| ScrapeError::missing("state dropdown"))?;

    let mut catalog = RegionCatalog::new();
    for link in container.select(&anchor) {
        let name = link.text().collect::<String>();
        if let Some(href) = link.value().attr("href") {
            catalog.insert(name, format!("{}{}", BASE_URL, href));
        }
    }

    Ok(catalog)
}

/// Map site display names to site relative paths from a region listing
/// page, in document order.
pub fn region_listing(document: &Html) -> Result<RegionListing> {
    let parks = selector("ul#list_parks")?;
    let item = selector("li.clearfix")?;
    let heading_link = selector("h3 a")?;

    let container = document
        .select(&parks)
        .next()
        .ok_or_else(|| ScrapeError::missing("park list"))?;

    let mut listing = RegionListing::new();
    for li in container.select(&item) {
        let link = match li.select(&heading_link).next() {
            Some(link) => link,
            None => continue,
        };
        let name = link.text().collect::<String>();
        if let Some(href) = link.value().attr("href") {
            listing.insert(name, href.to_string());
        }
    }

    Ok(listing)
}

/// Extract one site record from a detail page.
///
/// Designation and title are required; absence of either fails the
/// whole record. The remaining fields are best-effort and independent,
/// each falling back to the sentinel on its own.
pub fn site_detail(document: &Html) -> Result<Site> {
    let category = required_text(document, "span.Hero-designation")?;
    let name = required_text(document, "a.Hero-title")?;

    let locality = optional_text(document, r#"[itemprop="addressLocality"]"#);
    let region = optional_text(document, r#"[itemprop="addressRegion"]"#);
    let zipcode = optional_text(document, r#"[itemprop="postalCode"]"#);
    let phone = optional_text(document, r#"[itemprop="telephone"]"#);

    // "None, None" is possible and intentional.
    let address = format!("{}, {}", locality, region);

    Ok(Site {
        category,
        name,
        address,
        zipcode,
        phone,
    })
}

fn required_text(document: &Html, css: &str) -> Result<String> {
    let sel = selector(css)?;
    document
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .ok_or_else(|| ScrapeError::missing(css))
}

/// One optional field; absence yields the sentinel and never touches
/// its siblings.
fn optional_text(document: &Html, css: &str) -> String {
    Selector::parse(css)
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .map(|el| el.text().collect::<String>())
        .unwrap_or_else(|| NONE_SENTINEL.to_string())
}
