//! Lookup service: cache, fetch, extract, fall back and suggest.

use crate::assembler::{extract, ExtractOptions};
use crate::cache::CacheStore;
use crate::config::validate_query;
use crate::error::{CambError, Result};
use crate::fetch::{Fetcher, RequestDescriptor};
use crate::suggest::parse_suggestions;
use crate::types::{CacheRecord, Extraction, Source, SourceDocument};

/// Options for one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupOptions {
    /// Dictionary asked first.
    pub source: Source,

    /// Skip the cache read; the fetched entry is still stored.
    pub fresh: bool,

    /// Use the Cambridge English-Chinese dictionary.
    pub chinese: bool,

    /// Ask the other dictionary when the first has no entry.
    pub fallback: bool,

    /// Render translations.
    pub translations: bool,
}

impl Default for LookupOptions {
    fn default() -> Self {
        Self {
            source: Source::Cambridge,
            fresh: false,
            chinese: false,
            fallback: true,
            translations: false,
        }
    }
}

impl LookupOptions {
    fn extract_options(&self) -> ExtractOptions {
        ExtractOptions {
            translations: self.translations || self.chinese,
        }
    }

    /// Bilingual pages share words with the English ones, so they bypass
    /// the cache entirely.
    fn uses_cache(&self, source: Source) -> bool {
        !(self.chinese && source == Source::Cambridge)
    }
}

/// Result of a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// An entry was found.
    Found {
        extraction: Extraction,
        from_cache: bool,
    },
    /// No dictionary had an entry; `source` is the one asked first.
    NotFound {
        word: String,
        source: Source,
        suggestions: Vec<String>,
    },
}

/// Ties a fetcher and a cache store together.
pub struct Lookup<'a, F: Fetcher, C: CacheStore> {
    fetcher: &'a F,
    cache: &'a C,
}

impl<'a, F: Fetcher, C: CacheStore> Lookup<'a, F, C> {
    #[must_use]
    pub fn new(fetcher: &'a F, cache: &'a C) -> Self {
        Self { fetcher, cache }
    }

    /// Look up a word.
    ///
    /// # Errors
    /// Returns `InvalidQuery` for malformed queries and fetch or cache
    /// errors. A missing entry is not an error but
    /// [`LookupOutcome::NotFound`].
    pub fn search(&self, query: &str, options: &LookupOptions) -> Result<LookupOutcome> {
        let word = validate_query(query)?;

        let mut sources = vec![options.source];
        if options.fallback {
            sources.push(options.source.alternate());
        }

        for source in sources {
            match self.search_source(&word, source, options) {
                Ok((extraction, from_cache)) => {
                    return Ok(LookupOutcome::Found {
                        extraction,
                        from_cache,
                    })
                }
                Err(e) if e.is_no_entry() => {
                    tracing::info!(word = %word, source = %source, "No entry found");
                }
                Err(e) => return Err(e),
            }
        }

        let suggestions = self.suggestions(&word, options.source);
        Ok(LookupOutcome::NotFound {
            word,
            source: options.source,
            suggestions,
        })
    }

    fn search_source(
        &self,
        word: &str,
        source: Source,
        options: &LookupOptions,
    ) -> Result<(Extraction, bool)> {
        let cached = options.uses_cache(source);

        if cached && !options.fresh {
            if let Some(record) = self.cache.find(word, source)? {
                let document = SourceDocument::from_record(&record);
                match extract(&document, &options.extract_options()) {
                    Ok(extraction) => {
                        tracing::debug!(word, url = %record.canonical_url, "Replaying cached entry");
                        return Ok((extraction, true));
                    }
                    Err(e) => {
                        tracing::warn!(
                            url = %record.canonical_url,
                            error = %e,
                            "Cached entry unusable, fetching again"
                        );
                    }
                }
            }
        }

        let request = RequestDescriptor::entry(source, word, options.chinese);
        let page = self.fetcher.fetch(&request)?;
        let document = SourceDocument::new(source, page.url.clone(), page.body);
        let extraction = extract(&document, &options.extract_options()).map_err(|e| match e {
            CambError::NoEntryFound { dictionary, .. } => CambError::NoEntryFound {
                word: word.to_string(),
                dictionary,
            },
            other => other,
        })?;

        if cached {
            let record = CacheRecord::new(word, page.url, &extraction);
            if let Err(e) = self.cache.insert(&record) {
                tracing::warn!(word, error = %e, "Failed to cache entry");
            }
        }
        Ok((extraction, false))
    }

    /// Suggestions never fail the search; an unreachable page gives none.
    fn suggestions(&self, word: &str, source: Source) -> Vec<String> {
        let request = RequestDescriptor::spellcheck(source, word);
        match self.fetcher.fetch(&request) {
            Ok(page) => parse_suggestions(source, &page.body),
            Err(e) => {
                tracing::warn!(word, source = %source, error = %e, "Failed to fetch suggestions");
                Vec::new()
            }
        }
    }
}
