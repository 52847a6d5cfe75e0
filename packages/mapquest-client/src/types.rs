use serde::Deserialize;

/// Envelope of a radius-search response.
#[derive(Debug, Clone, Deserialize)]
pub struct RadiusSearchResponse {
    #[serde(rename = "searchResults", default)]
    pub search_results: Vec<SearchResult>,
}

/// One entry of the `searchResults` array.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResult {
    pub fields: PlaceFields,
}

/// The hosted-data fields MapQuest attaches to each match.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceFields {
    pub name: String,
    #[serde(rename = "group_sic_code_name_ext")]
    pub category: String,
    pub address: String,
    pub city: String,
}

/// A point of interest near a search origin.
#[derive(Debug, Clone)]
pub struct Place {
    pub name: String,
    pub category: String,
    pub address: String,
    pub city: String,
}

impl From<SearchResult> for Place {
    fn from(result: SearchResult) -> Self {
        let fields = result.fields;
        Self {
            name: fields.name,
            category: fields.category,
            address: fields.address,
            city: fields.city,
        }
    }
}
