//! Blocking page fetch for nps.gov.

use std::time::Duration;

use crate::error::{Result, ScrapeError};

/// Fetches a page body by URL.
///
/// The pipeline only ever needs `GET url -> body`; the seam exists so
/// tests can substitute canned documents (see [`crate::testing`]).
pub trait PageFetcher {
    /// Fetch a URL and return the response body.
    fn fetch(&self, url: &str) -> Result<String>;
}

/// `reqwest`-backed fetcher used by the binary.
///
/// One request at a time; each call blocks until the response arrives
/// or the transport gives up.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("parkscout/0.1")
            .build()
            .map_err(ScrapeError::network)?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "Fetching page");

        let resp = self
            .client
            .get(url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(ScrapeError::network)?;

        resp.text().map_err(ScrapeError::network)
    }
}
