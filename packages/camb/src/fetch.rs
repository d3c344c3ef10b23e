//! Request descriptors and the page fetcher.

use reqwest::blocking::Client;

use crate::config::{entry_url, is_cambridge_root, spellcheck_url, WEBSTER_WOD_URL};
use crate::error::{CambError, Result};
use crate::http::{create_client, fetch_page, FetchedPage};
use crate::types::Source;

/// What a request asks the dictionary for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// The entry page of a word.
    Entry,
    /// The spelling suggestions for a word.
    Spellcheck,
    /// The Merriam-Webster word of the day.
    WordOfTheDay,
}

/// One page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub source: Source,
    pub word: String,
    pub kind: RequestKind,
    /// Use the Cambridge English-Chinese dictionary.
    pub chinese: bool,
}

impl RequestDescriptor {
    #[must_use]
    pub fn entry(source: Source, word: impl Into<String>, chinese: bool) -> Self {
        Self {
            source,
            word: word.into(),
            kind: RequestKind::Entry,
            chinese,
        }
    }

    #[must_use]
    pub fn spellcheck(source: Source, word: impl Into<String>) -> Self {
        Self {
            source,
            word: word.into(),
            kind: RequestKind::Spellcheck,
            chinese: false,
        }
    }

    #[must_use]
    pub fn word_of_the_day() -> Self {
        Self {
            source: Source::Webster,
            word: String::new(),
            kind: RequestKind::WordOfTheDay,
            chinese: false,
        }
    }

    /// URL of the requested page.
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the URL cannot be built.
    pub fn url(&self) -> Result<String> {
        match self.kind {
            RequestKind::Entry => entry_url(self.source, &self.word, self.chinese),
            RequestKind::Spellcheck => spellcheck_url(self.source, &self.word),
            RequestKind::WordOfTheDay => Ok(WEBSTER_WOD_URL.to_string()),
        }
    }
}

/// Fetches dictionary pages.
pub trait Fetcher {
    /// Fetch the page a request describes.
    ///
    /// # Errors
    /// Returns `NoEntryFound` when the dictionary signals that the word has
    /// no entry, or a transport error.
    fn fetch(&self, request: &RequestDescriptor) -> Result<FetchedPage>;
}

/// Fetcher over the blocking HTTP client.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with a configured client.
    ///
    /// # Errors
    /// Returns `Http` if the client cannot be built.
    pub fn new() -> Result<Self> {
        Ok(Self {
            client: create_client()?,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, request: &RequestDescriptor) -> Result<FetchedPage> {
        let url = request.url()?;
        tracing::debug!(url = %url, kind = ?request.kind, "Fetching");
        let page = fetch_page(&self.client, &url)?;

        if request.kind == RequestKind::Entry {
            let missing = match request.source {
                Source::Cambridge => is_cambridge_root(&page.url),
                Source::Webster => page.is_not_found(),
            };
            if missing {
                tracing::debug!(url = %page.url, status = page.status, "Dictionary has no entry");
                return Err(CambError::NoEntryFound {
                    word: request.word.clone(),
                    dictionary: request.source,
                });
            }
        }
        Ok(page)
    }
}
