//! Error types.

use thiserror::Error;

/// The main error type for discourse-logout operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-related error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// A required field was missing in the response.
    #[error("Missing field: {0}")]
    MissingField(String),
}

impl Error {
    /// Create a missing field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Error::MissingField(field.into())
    }

    /// Check if the forum was never reached (no response to inspect).
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Network(_) | Error::Url(_))
    }
}

/// Result type alias for discourse-logout operations.
pub type Result<T> = std::result::Result<T, Error>;
