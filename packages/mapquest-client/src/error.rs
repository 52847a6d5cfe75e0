//! Typed errors for the MapQuest client.

use thiserror::Error;

/// Errors that can occur while talking to the MapQuest Search API.
#[derive(Debug, Error)]
pub enum MapquestError {
    /// HTTP transport failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status, e.g. a rejected key.
    #[error("MapQuest API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the JSON shape we expect.
    #[error("malformed API response: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for MapQuest operations.
pub type Result<T> = std::result::Result<T, MapquestError>;
