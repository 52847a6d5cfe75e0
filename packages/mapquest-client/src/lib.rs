//! Pure MapQuest Search API v2 client.
//!
//! A minimal client for MapQuest's geocoded radius search. Builds a query
//! around a free-text origin address and returns the matching points of
//! interest in the order the API listed them.
//!
//! # Example
//!
//! ```rust,ignore
//! use mapquest_client::MapquestClient;
//!
//! let client = MapquestClient::new("your-api-key".into());
//!
//! let places = client.search_nearby("Houghton, MI")?;
//! for place in &places {
//!     println!("{} ({})", place.name, place.category);
//! }
//! ```

pub mod error;
pub mod types;

pub use error::{MapquestError, Result};
pub use types::{Place, PlaceFields, RadiusSearchResponse, SearchResult};

const BASE_URL: &str = "https://www.mapquestapi.com/search/v2";

/// Search radius in miles around the origin.
const RADIUS: u32 = 10;

/// Maximum matches requested per search.
const MAX_MATCHES: u32 = 10;

/// Hosted-data filter selecting the points-of-interest table.
const HOSTED_DATA: &str = "mqap.ntpois|";

pub struct MapquestClient {
    client: reqwest::blocking::Client,
    key: String,
}

impl MapquestClient {
    pub fn new(key: String) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            key,
        }
    }

    /// Build the radius-search URL for a free-text origin address.
    ///
    /// Spaces in the origin become `+`, the form the API expects for
    /// free-text addresses. Radius, match count, ambiguity handling and
    /// the hosted-data filter are fixed.
    fn radius_search_url(&self, origin: &str) -> String {
        format!(
            "{}/radius?origin={}&radius={}&maxMatches={}&ambiguities=ignore&hostedData={}&outFormat=json&key={}",
            BASE_URL,
            origin.replace(' ', "+"),
            RADIUS,
            MAX_MATCHES,
            HOSTED_DATA,
            self.key
        )
    }

    /// Search for points of interest around a free-text origin address.
    ///
    /// Results come back in the order the API returned them; no re-sorting.
    pub fn search_nearby(&self, origin: &str) -> Result<Vec<Place>> {
        let url = self.radius_search_url(origin);
        tracing::debug!(origin, "Querying MapQuest radius search");

        let resp = self.client.get(&url).send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(MapquestError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text()?;
        let parsed: RadiusSearchResponse = serde_json::from_str(&body)?;

        let places: Vec<Place> = parsed
            .search_results
            .into_iter()
            .map(Place::from)
            .collect();
        tracing::debug!(count = places.len(), "MapQuest search returned");

        Ok(places)
    }
}
