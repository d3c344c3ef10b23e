//! Core data types shared by the fetch, extraction and cache layers.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{CAMBRIDGE_HOST, WEBSTER_HOST};
use crate::error::{CambError, Result};
use crate::render::RenderEvent;

/// The supported online dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// Cambridge Dictionary (dictionary.cambridge.org).
    Cambridge,

    /// Merriam-Webster (www.merriam-webster.com).
    Webster,
}

impl Source {
    /// Short identifier used in settings and cache records.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cambridge => "cambridge",
            Self::Webster => "webster",
        }
    }

    /// The other supported dictionary, used for fallback lookups.
    #[must_use]
    pub fn alternate(&self) -> Self {
        match self {
            Self::Cambridge => Self::Webster,
            Self::Webster => Self::Cambridge,
        }
    }

    /// Determine the source a canonical URL belongs to.
    ///
    /// # Errors
    /// Returns `UnknownSource` when the host is neither dictionary.
    pub fn from_url(url: &str) -> Result<Self> {
        let parsed = url::Url::parse(url).map_err(|source| CambError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        match parsed.host_str() {
            Some(host) if host.ends_with(CAMBRIDGE_HOST) => Ok(Self::Cambridge),
            Some(host) if host.ends_with(WEBSTER_HOST) => Ok(Self::Webster),
            _ => Err(CambError::UnknownSource(url.to_string())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cambridge => f.write_str("Cambridge"),
            Self::Webster => f.write_str("Merriam-Webster"),
        }
    }
}

/// Raw markup of a fetched page together with its canonical URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    /// Dictionary that served the page.
    pub source: Source,

    /// Canonical request URL (after redirects).
    pub url: String,

    /// Raw HTML.
    pub markup: String,
}

impl SourceDocument {
    /// Create a new source document.
    #[must_use]
    pub fn new(source: Source, url: impl Into<String>, markup: impl Into<String>) -> Self {
        Self {
            source,
            url: url.into(),
            markup: markup.into(),
        }
    }

    /// Rebuild the document stored in a cache record.
    ///
    /// The record keeps only the serialized entry markup, which the
    /// extractor accepts like a freshly fetched page.
    #[must_use]
    pub fn from_record(record: &CacheRecord) -> Self {
        Self {
            source: record.source,
            url: record.canonical_url.clone(),
            markup: record.serialized_entry.clone(),
        }
    }
}

/// Result of running the extraction engine over one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// Dictionary the entry came from.
    pub source: Source,

    /// Preferred spelling of the headword according to the dictionary.
    pub canonical_word: String,

    /// Ordered render events.
    pub events: Vec<RenderEvent>,

    /// Markup that reproduces `events` when extracted again.
    pub serialized_entry: String,
}

/// A cached lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheRecord {
    /// Word as typed by the user (normalized).
    pub input_word: String,

    /// Headword reported by the dictionary.
    pub canonical_word: String,

    /// Canonical URL of the page; identity of the record.
    pub canonical_url: String,

    /// Dictionary the entry came from.
    pub source: Source,

    /// Serialized entry markup for replay.
    pub serialized_entry: String,

    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl CacheRecord {
    /// Build a record for a fresh extraction.
    #[must_use]
    pub fn new(
        input_word: impl Into<String>,
        url: impl Into<String>,
        extraction: &Extraction,
    ) -> Self {
        Self {
            input_word: input_word.into(),
            canonical_word: extraction.canonical_word.clone(),
            canonical_url: url.into(),
            source: extraction.source,
            serialized_entry: extraction.serialized_entry.clone(),
            created_at: Utc::now(),
        }
    }

    /// Whether the record answers a query for `word` in `source`.
    #[must_use]
    pub fn matches(&self, word: &str, source: Source) -> bool {
        self.source == source && self.matches_word(word)
    }

    /// Whether `word` is the input or canonical word, ignoring case.
    #[must_use]
    pub fn matches_word(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.input_word.to_lowercase() == word || self.canonical_word.to_lowercase() == word
    }
}
