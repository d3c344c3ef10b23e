//! Configuration constants, query validation and user settings.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use url::Url;

use crate::error::{CambError, Result};
use crate::types::Source;

/// Host suffix of the Cambridge Dictionary.
pub const CAMBRIDGE_HOST: &str = "dictionary.cambridge.org";

/// Host suffix of Merriam-Webster.
pub const WEBSTER_HOST: &str = "merriam-webster.com";

/// Base URL of the Cambridge English dictionary.
pub const CAMBRIDGE_DICTIONARY_URL: &str = "https://dictionary.cambridge.org/dictionary/english/";

/// Base URL of the Cambridge English-Chinese (simplified) dictionary.
pub const CAMBRIDGE_CHINESE_URL: &str =
    "https://dictionary.cambridge.org/dictionary/english-chinese-simplified/";

/// Cambridge spellcheck page, queried with `?q=`.
pub const CAMBRIDGE_SPELLCHECK_URL: &str = "https://dictionary.cambridge.org/spellcheck/english/";

/// Base URL of the Merriam-Webster dictionary.
pub const WEBSTER_DICTIONARY_URL: &str = "https://www.merriam-webster.com/dictionary/";

/// Merriam-Webster word of the day page.
pub const WEBSTER_WOD_URL: &str = "https://www.merriam-webster.com/word-of-the-day";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 20;

/// Longest accepted query, in characters.
pub const MAX_QUERY_CHARS: usize = 100;

/// Marker printed before every example sentence.
pub const EXAMPLE_MARKER: &str = "//";

/// Name of the settings file inside the config directory.
const SETTINGS_FILE: &str = "config.yaml";

/// Application directory name used under config and cache roots.
const APP_DIR: &str = "camb";

/// Environment variable overriding the cache directory.
pub const CACHE_DIR_ENV: &str = "CAMB_CACHE_DIR";

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize a user query: NFC, trimmed, inner whitespace collapsed.
///
/// # Examples
/// ```
/// use camb::config::normalize_query;
///
/// assert_eq!(normalize_query("  look   up "), "look up");
/// ```
#[must_use]
pub fn normalize_query(query: &str) -> String {
    let composed: String = query.nfc().collect();
    WHITESPACE.replace_all(composed.trim(), " ").into_owned()
}

/// Validate and normalize a user query.
///
/// # Errors
/// Returns `InvalidQuery` for empty queries, queries longer than
/// [`MAX_QUERY_CHARS`] and queries containing control characters.
///
/// # Examples
/// ```
/// use camb::config::validate_query;
///
/// assert_eq!(validate_query(" Example ").unwrap(), "Example");
/// assert!(validate_query("   ").is_err());
/// ```
pub fn validate_query(query: &str) -> Result<String> {
    let normalized = normalize_query(query);
    if normalized.is_empty()
        || normalized.chars().count() > MAX_QUERY_CHARS
        || normalized.chars().any(char::is_control)
    {
        return Err(CambError::InvalidQuery(query.to_string()));
    }
    Ok(normalized)
}

fn join_segment(base: &str, segment: &str) -> Result<String> {
    let mut url = Url::parse(base).map_err(|source| CambError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    url.path_segments_mut()
        .map_err(|()| CambError::UnknownSource(base.to_string()))?
        .pop_if_empty()
        .push(segment);
    Ok(url.into())
}

/// Build the entry URL for a word.
///
/// Cambridge joins the words of a phrase with hyphens; Merriam-Webster
/// keeps the spaces (percent-encoded).
///
/// # Errors
/// Returns `InvalidUrl` if the base URL cannot be parsed.
pub fn entry_url(source: Source, word: &str, chinese: bool) -> Result<String> {
    match source {
        Source::Cambridge => {
            let base = if chinese {
                CAMBRIDGE_CHINESE_URL
            } else {
                CAMBRIDGE_DICTIONARY_URL
            };
            join_segment(base, &word.replace(' ', "-"))
        }
        Source::Webster => join_segment(WEBSTER_DICTIONARY_URL, word),
    }
}

/// Build the spellcheck (suggestion) URL for a word.
///
/// Merriam-Webster serves suggestions on the entry URL itself.
///
/// # Errors
/// Returns `InvalidUrl` if the base URL cannot be parsed.
pub fn spellcheck_url(source: Source, word: &str) -> Result<String> {
    match source {
        Source::Cambridge => {
            let mut url =
                Url::parse(CAMBRIDGE_SPELLCHECK_URL).map_err(|source| CambError::InvalidUrl {
                    url: CAMBRIDGE_SPELLCHECK_URL.to_string(),
                    source,
                })?;
            url.query_pairs_mut().append_pair("q", word);
            Ok(url.into())
        }
        Source::Webster => entry_url(Source::Webster, word, false),
    }
}

/// Whether a Cambridge response URL is the bare dictionary root.
///
/// Cambridge redirects unknown words to the dictionary home page instead of
/// answering with 404.
#[must_use]
pub fn is_cambridge_root(url: &str) -> bool {
    let trimmed = url.trim_end_matches('/');
    trimmed == CAMBRIDGE_DICTIONARY_URL.trim_end_matches('/')
        || trimmed == CAMBRIDGE_CHINESE_URL.trim_end_matches('/')
}

/// User settings, read from `config.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dictionary used when no source flag is given.
    pub default_source: Source,

    /// Try the other dictionary when the first has no entry.
    pub fallback: bool,

    /// Show Chinese translations from the Cambridge bilingual dictionary.
    pub translations: bool,

    /// Use colors when printing entries.
    pub colors: bool,

    /// Cache directory override.
    pub cache_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_source: Source::Cambridge,
            fallback: true,
            translations: false,
            colors: true,
            cache_dir: None,
        }
    }
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and built-in defaults otherwise.
    ///
    /// # Errors
    /// Returns `Io` when an explicit path cannot be read and `Config` when
    /// the file is not valid YAML for this structure.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(explicit) => explicit.to_path_buf(),
            None => match default_settings_path() {
                Some(candidate) if candidate.is_file() => candidate,
                _ => {
                    tracing::debug!("No settings file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path)?;
        let settings = Self::parse(&content)?;
        tracing::debug!(path = %path.display(), "Loaded settings");
        Ok(settings)
    }

    /// Parse settings from YAML text. Missing keys keep their defaults.
    ///
    /// # Errors
    /// Returns `Config` for malformed YAML.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(content)?)
    }

    /// Resolve the cache directory.
    ///
    /// Priority: explicit override, `CAMB_CACHE_DIR`, settings file,
    /// `$XDG_CACHE_HOME/camb`, `$HOME/.cache/camb`, `./.camb-cache`.
    #[must_use]
    pub fn resolve_cache_dir(&self, explicit: Option<&Path>) -> PathBuf {
        if let Some(dir) = explicit {
            return dir.to_path_buf();
        }
        if let Some(dir) = env::var_os(CACHE_DIR_ENV).filter(|v| !v.is_empty()) {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.cache_dir {
            return dir.clone();
        }
        xdg_dir("XDG_CACHE_HOME", ".cache").unwrap_or_else(|| PathBuf::from(".camb-cache"))
    }
}

fn xdg_dir(variable: &str, home_fallback: &str) -> Option<PathBuf> {
    if let Some(dir) = env::var_os(variable).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir).join(APP_DIR));
    }
    env::var_os("HOME")
        .filter(|v| !v.is_empty())
        .map(|home| PathBuf::from(home).join(home_fallback).join(APP_DIR))
}

/// Default location of the settings file.
#[must_use]
pub fn default_settings_path() -> Option<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", ".config").map(|dir| dir.join(SETTINGS_FILE))
}
