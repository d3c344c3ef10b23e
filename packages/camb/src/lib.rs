//! camb - Terminal client for the Cambridge and Merriam-Webster dictionaries.
//!
//! This crate fetches dictionary pages, extracts their entries into an
//! ordered stream of styled render events and caches the extracted entries
//! locally so repeat lookups stay offline.
//!
//! # Example
//!
//! ```
//! use camb::{extract, ExtractOptions, Source, SourceDocument};
//!
//! let page = r#"<html><head><title>EXAMPLE | English meaning</title></head><body>
//!   <div class="dictionary"><div class="pr entry-body__el">
//!     <div class="pos-header"><span class="hw">example</span> <span class="pos">noun</span></div>
//!     <div class="dsense"><div class="def-block"><div class="def">something typical</div></div></div>
//!   </div></div></body></html>"#;
//! let document = SourceDocument::new(
//!     Source::Cambridge,
//!     "https://dictionary.cambridge.org/dictionary/english/example",
//!     page,
//! );
//!
//! let extraction = extract(&document, &ExtractOptions::default()).unwrap();
//! assert_eq!(extraction.canonical_word, "example");
//! assert_eq!(
//!     camb::render::to_plain_text(&extraction.events),
//!     "example noun\nsomething typical\n"
//! );
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Constants, query validation and user settings
//! - [`types`]: Core data types (Source, SourceDocument, Extraction, CacheRecord)
//! - [`error`]: Error types and Result alias
//! - [`dom`]: Markup loading and node helpers
//! - [`matcher`]: Node signatures and the per-source signature catalogs
//! - [`registry`]: Signature-dispatched element handler system
//! - [`extract`]: Field extractors and the per-source handlers
//! - [`render`]: Render events, the event sink and the terminal presenter
//! - [`assembler`]: Document-level extraction entry point
//! - [`http`]: HTTP client with retries
//! - [`fetch`]: Request descriptors and the page fetcher
//! - [`cache`]: Local cache of extracted entries
//! - [`suggest`]: Spelling suggestions
//! - [`lookup`]: Lookup service tying fetch, extraction and cache together
//! - [`cli`]: Command-line interface

pub mod assembler;
pub mod cache;
pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod lookup;
pub mod matcher;
pub mod registry;
pub mod render;
pub mod suggest;
pub mod types;

// Re-export the extraction entry point
pub use assembler::{extract, ExtractOptions};

// Re-export commonly used items
pub use cache::{CacheStore, FileCache};
pub use error::{CambError, Result};
pub use fetch::{Fetcher, HttpFetcher, RequestDescriptor, RequestKind};
pub use lookup::{Lookup, LookupOptions, LookupOutcome};
pub use render::{Presenter, RenderEvent, Style};
pub use types::{CacheRecord, Extraction, Source, SourceDocument};
