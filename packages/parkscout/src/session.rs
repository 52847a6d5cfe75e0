//! Interactive browsing session.
//!
//! Thin glue over the pipeline: prompt for a state, list its sites,
//! look up places near a chosen one. Bad input is reported and the
//! loop continues; nothing a user types is fatal.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Input};
use mapquest_client::{MapquestClient, Place};
use tracing::warn;

use crate::cache::{CacheStore, Namespace};
use crate::catalog;
use crate::detail;
use crate::fetch::PageFetcher;
use crate::listing;
use crate::types::{ResolvedRegion, Site};

/// Drive the prompt loop until the user exits.
pub fn run(
    fetcher: &dyn PageFetcher,
    cache: &CacheStore,
    places: &MapquestClient,
) -> Result<()> {
    let catalog = catalog::build_region_catalog(fetcher)?;

    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(r#"Enter a state name (e.g. Michigan, michigan) or "exit""#)
            .interact_text()?;
        let state = title_case(raw.trim());
        if state == "Exit" {
            break;
        }

        let region_url = match catalog.get(&state) {
            Some(url) => url,
            None => {
                println!("{}", "Not a valid state".red());
                continue;
            }
        };

        let sites = match load_region(fetcher, cache, region_url, &state) {
            Ok(sites) => sites,
            Err(err) => {
                warn!(region = state.as_str(), error = %err, "Failed to load region");
                println!("{} {}", "[Error]".red(), err);
                continue;
            }
        };

        print_site_list(&state, &sites);
        if sites.is_empty() {
            continue;
        }

        let site = choose_site(&sites)?;
        match places.search_nearby(&site.address) {
            Ok(found) => print_places(site, &found),
            Err(err) => {
                warn!(error = %err, "Places query failed");
                println!("{} {}", "[Error]".red(), err);
            }
        }
    }

    Ok(())
}

/// Load a region's resolved sites, reporting whether the cache served
/// them.
fn load_region(
    fetcher: &dyn PageFetcher,
    cache: &CacheStore,
    region_url: &str,
    state: &str,
) -> crate::error::Result<ResolvedRegion> {
    if cache.exists(Namespace::Resolved, state) {
        println!("{}", "Using cache".dimmed());
        return Ok(cache.read(Namespace::Resolved, state)?);
    }

    println!("{}", "Fetching".dimmed());
    let listing = listing::region_listing(fetcher, cache, region_url, state)?;
    detail::resolve_region(fetcher, cache, &listing, state)
}

fn print_site_list(state: &str, sites: &[Site]) {
    let rule = "-".repeat(30);
    println!("{}", rule);
    println!(" List of national sites in {}", state);
    println!("{}", rule);
    for (i, site) in sites.iter().enumerate() {
        println!("[{}] {}", i + 1, site);
    }
}

/// Reprompt until a valid 1-based selection comes in.
fn choose_site<'a>(sites: &'a [Site]) -> Result<&'a Site> {
    loop {
        let raw: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt("Choose a park")
            .interact_text()?;
        match raw.trim().parse::<usize>() {
            Ok(n) if (1..=sites.len()).contains(&n) => return Ok(&sites[n - 1]),
            _ => println!("{}", "[Error] Invalid input".red()),
        }
    }
}

fn print_places(site: &Site, places: &[Place]) {
    let rule = "-".repeat(20);
    println!("{}", rule);
    println!("Places near {}", site.name);
    println!("{}", rule);
    for place in places {
        println!(
            "- {} ({}): {}, {}",
            place.name, place.category, place.address, place.city
        );
    }
}

/// Title-case free-text input the way the catalog keys are cased.
fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case_single_word() {
        assert_eq!(title_case("michigan"), "Michigan");
        assert_eq!(title_case("MICHIGAN"), "Michigan");
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("new mexico"), "New Mexico");
        assert_eq!(title_case("district  of columbia"), "District Of Columbia");
    }

    #[test]
    fn test_exit_normalizes() {
        assert_eq!(title_case("exit"), "Exit");
        assert_eq!(title_case("EXIT"), "Exit");
    }
}
