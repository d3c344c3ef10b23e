//! Spelling suggestions for words without an entry.

use std::sync::LazyLock;

use scraper::Selector;

use crate::dom::{load_document, static_selector, text_content};
use crate::types::Source;

static CAMBRIDGE_SUGGESTIONS: LazyLock<Selector> =
    LazyLock::new(|| static_selector("ul.hul-u li a"));

static WEBSTER_SUGGESTIONS: LazyLock<Selector> = LazyLock::new(|| {
    static_selector("p.spelling-suggestions a, .spelling-suggestion-grid a")
});

/// Parse the suggestion list of a spellcheck or "not found" page.
///
/// Suggestions keep page order; duplicates and blank links are dropped.
///
/// # Examples
/// ```
/// use camb::suggest::parse_suggestions;
/// use camb::Source;
///
/// let page = r#"<ul class="hul-u"><li><a>example</a></li><li><a>examples</a></li></ul>"#;
/// assert_eq!(parse_suggestions(Source::Cambridge, page), ["example", "examples"]);
/// ```
#[must_use]
pub fn parse_suggestions(source: Source, markup: &str) -> Vec<String> {
    let document = load_document(markup);
    let selector: &Selector = match source {
        Source::Cambridge => &CAMBRIDGE_SUGGESTIONS,
        Source::Webster => &WEBSTER_SUGGESTIONS,
    };

    let mut suggestions: Vec<String> = Vec::new();
    for link in document.select(selector) {
        let word = text_content(link);
        if !word.is_empty() && !suggestions.contains(&word) {
            suggestions.push(word);
        }
    }
    tracing::debug!(source = %source, count = suggestions.len(), "Parsed suggestions");
    suggestions
}
