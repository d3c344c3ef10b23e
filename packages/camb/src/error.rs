//! Error types for the dictionary client.
//!
//! Only conditions that end a lookup are represented here. A missing
//! optional node inside an entry is not an error: extractors log it and
//! leave the field out.

use thiserror::Error;

use crate::types::Source;

/// Main error type for the dictionary client.
#[derive(Debug, Error)]
pub enum CambError {
    /// The document contains no entry for the word.
    #[error("No {dictionary} entry found for '{word}'")]
    NoEntryFound { word: String, dictionary: Source },

    /// The query cannot be turned into a dictionary request.
    #[error("Invalid query: '{0}'. Expected a word or phrase of at most 100 characters")]
    InvalidQuery(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a status the fetcher does not accept.
    #[error("Unexpected HTTP status {status} for {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// All retry attempts failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// A URL could not be derived for a request.
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A stored URL does not belong to a supported dictionary.
    #[error("Unknown dictionary source for URL: {0}")]
    UnknownSource(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed (cache records, `--json` output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The settings file could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),
}

impl CambError {
    /// Whether this error means "the dictionary has no such word".
    ///
    /// Callers use this to fall back to suggestions or the other source
    /// instead of reporting a failure.
    #[must_use]
    pub fn is_no_entry(&self) -> bool {
        matches!(self, Self::NoEntryFound { .. })
    }
}

/// Result type alias for dictionary operations.
pub type Result<T> = std::result::Result<T, CambError>;
