//! Testing utilities.
//!
//! A canned [`PageFetcher`] so pipeline tests run without the network.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::{Result, ScrapeError};
use crate::fetch::PageFetcher;

/// A mock fetcher serving predefined bodies by URL.
///
/// Every fetch is recorded, so tests can assert how often (and
/// whether) a URL was hit.
#[derive(Default)]
pub struct MockFetcher {
    /// Predefined bodies by URL
    pages: RwLock<HashMap<String, String>>,

    /// URLs that should fail with a transport error
    fail_urls: RwLock<Vec<String>>,

    /// Every URL fetched, in call order
    calls: RwLock<Vec<String>>,
}

impl MockFetcher {
    /// Create a new mock fetcher with no pages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a predefined page body.
    pub fn with_page(self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.write().unwrap().insert(url.into(), body.into());
        self
    }

    /// Mark a URL as failing with a transport error.
    pub fn fail_url(self, url: impl Into<String>) -> Self {
        self.fail_urls.write().unwrap().push(url.into());
        self
    }

    /// Every URL fetched so far, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.read().unwrap().clone()
    }

    /// How many times `url` was fetched.
    pub fn fetch_count(&self, url: &str) -> usize {
        self.calls
            .read()
            .unwrap()
            .iter()
            .filter(|called| called.as_str() == url)
            .count()
    }
}

impl PageFetcher for MockFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.calls.write().unwrap().push(url.to_string());

        if self.fail_urls.read().unwrap().contains(&url.to_string()) {
            return Err(ScrapeError::network(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "mock connection refused",
            )));
        }

        self.pages
            .read()
            .unwrap()
            .get(url)
            .cloned()
            .ok_or_else(|| {
                ScrapeError::network(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("no canned page for {}", url),
                ))
            })
    }
}
