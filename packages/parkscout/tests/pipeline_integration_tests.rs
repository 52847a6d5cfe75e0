//! End-to-end pipeline tests over a canned nps.gov.

use parkscout_core::cache::{CacheStore, Namespace};
use parkscout_core::detail::resolve_region;
use parkscout_core::listing::region_listing;
use parkscout_core::testing::MockFetcher;
use parkscout_core::types::ResolvedRegion;

const MI_LISTING_URL: &str = "https://www.nps.gov/state/mi/index.htm";

const MI_LISTING_PAGE: &str = r#"
    <ul id="list_parks">
        <li class="clearfix"><h3><a href="/isro/">Isle Royale</a></h3></li>
        <li class="clearfix"><h3><a href="/kewe/">Keweenaw</a></h3></li>
        <li class="clearfix"><h3><a href="/piro/">Pictured Rocks</a></h3></li>
    </ul>
"#;

fn detail_page(designation: &str, title: &str, locality: &str, zip: &str) -> String {
    format!(
        r#"
        <span class="Hero-designation">{}</span>
        <a class="Hero-title">{}</a>
        <span itemprop="addressLocality">{}</span>
        <span itemprop="addressRegion">MI</span>
        <span itemprop="postalCode">{}</span>
        <span itemprop="telephone">(906) 482-0984</span>
    "#,
        designation, title, locality, zip
    )
}

fn canned_michigan() -> MockFetcher {
    MockFetcher::new()
        .with_page(MI_LISTING_URL, MI_LISTING_PAGE)
        .with_page(
            "https://www.nps.gov/isro/index.htm",
            detail_page("National Park", "Isle Royale", "Houghton", "49931"),
        )
        .with_page(
            "https://www.nps.gov/kewe/index.htm",
            detail_page("National Historical Park", "Keweenaw", "Calumet", "49913"),
        )
        .with_page(
            "https://www.nps.gov/piro/index.htm",
            detail_page("National Lakeshore", "Pictured Rocks", "Munising", "49862"),
        )
}

fn resolve_michigan(fetcher: &MockFetcher, cache: &CacheStore) -> ResolvedRegion {
    let listing = region_listing(fetcher, cache, MI_LISTING_URL, "Michigan").unwrap();
    resolve_region(fetcher, cache, &listing, "Michigan").unwrap()
}

#[test]
fn cold_cache_resolves_all_sites_in_listing_order() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheStore::open(dir.path()).unwrap();
    let fetcher = canned_michigan();

    let sites = resolve_michigan(&fetcher, &cache);

    let names: Vec<&str> = sites.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Isle Royale", "Keweenaw", "Pictured Rocks"]);
    assert_eq!(sites[0].address, "Houghton, MI");
    assert_eq!(sites[2].zipcode, "49862");

    // One listing fetch plus one fetch per site.
    assert_eq!(fetcher.calls().len(), 4);
}

#[test]
fn warm_cache_serves_same_entities_without_network() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheStore::open(dir.path()).unwrap();
    let fetcher = canned_michigan();

    let first = resolve_michigan(&fetcher, &cache);
    let fetches_after_first = fetcher.calls().len();

    let second = resolve_michigan(&fetcher, &cache);

    assert_eq!(first, second);
    assert_eq!(fetcher.calls().len(), fetches_after_first);
}

#[test]
fn both_cache_records_exist_after_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheStore::open(dir.path()).unwrap();
    let fetcher = canned_michigan();

    resolve_michigan(&fetcher, &cache);

    assert!(cache.exists(Namespace::Listing, "Michigan"));
    assert!(cache.exists(Namespace::Resolved, "Michigan"));
    assert!(dir.path().join("michigan.json").exists());
    assert!(dir.path().join("michigan.bin").exists());
}

#[test]
fn deleting_resolved_record_forces_detail_refetch_only() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheStore::open(dir.path()).unwrap();
    let fetcher = canned_michigan();

    resolve_michigan(&fetcher, &cache);

    // Out-of-band invalidation: remove the resolved record, keep the listing.
    std::fs::remove_file(dir.path().join("michigan.bin")).unwrap();

    let sites = resolve_michigan(&fetcher, &cache);
    assert_eq!(sites.len(), 3);

    // The listing was served from disk both times.
    assert_eq!(fetcher.fetch_count(MI_LISTING_URL), 1);
    // Each detail page was fetched again.
    assert_eq!(
        fetcher.fetch_count("https://www.nps.gov/isro/index.htm"),
        2
    );
}

#[test]
fn differently_cased_region_names_share_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache = CacheStore::open(dir.path()).unwrap();
    let fetcher = canned_michigan();

    let listing = region_listing(&fetcher, &cache, MI_LISTING_URL, "Michigan").unwrap();
    resolve_region(&fetcher, &cache, &listing, "Michigan").unwrap();
    let fetches = fetcher.calls().len();

    let listing = region_listing(&fetcher, &cache, MI_LISTING_URL, "michigan").unwrap();
    let sites = resolve_region(&fetcher, &cache, &listing, "michigan").unwrap();

    assert_eq!(sites.len(), 3);
    assert_eq!(fetcher.calls().len(), fetches);
}
