//! Entry assembler: turns one fetched page into an [`Extraction`].
//!
//! The assembler finds the schema's entry container, collects the entry
//! subtrees inside it in document order, walks each with a fresh root
//! context and joins the non-empty groups with section breaks. The
//! serialized entry is the page `<title>` followed by the container, which
//! is everything the extraction reads, so extracting it again gives the
//! same events.

use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use scraper::{ElementRef, Selector};
use url::Url;

use crate::dom::{
    descendant_elements, element_children, load_document, static_selector, text_content,
};
use crate::error::{CambError, Result};
use crate::extract::cambridge::create_cambridge_registry;
use crate::extract::webster::create_webster_registry;
use crate::matcher::{cambridge, classify, describe, webster, EntryKind, Signature};
use crate::registry::{DocumentScope, ParseContext, ParseEngine};
use crate::render::EventSink;
use crate::types::{Extraction, Source, SourceDocument};

static TITLE: LazyLock<Selector> = LazyLock::new(|| static_selector("title"));

static CAMBRIDGE_ENGINE: LazyLock<ParseEngine> =
    LazyLock::new(|| ParseEngine::new(create_cambridge_registry()));

static WEBSTER_ENGINE: LazyLock<ParseEngine> =
    LazyLock::new(|| ParseEngine::new(create_webster_registry()));

/// Display options for one extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Render translations (Cambridge bilingual pages).
    pub translations: bool,
}

/// An entry subtree borrowed from a loaded document.
#[derive(Debug, Clone, Copy)]
pub struct EntrySubtree<'a> {
    pub node: ElementRef<'a>,
    pub kind: EntryKind,
}

/// Per-source layout of a dictionary page.
struct Schema {
    container: Signature,
    entry_roots: &'static [(Signature, EntryKind)],
    headword: Signature,
    engine: &'static LazyLock<ParseEngine>,
    canonical_word: fn(Option<&str>, ElementRef<'_>) -> Option<String>,
}

static CAMBRIDGE: Schema = Schema {
    container: cambridge::CONTAINER,
    entry_roots: cambridge::ENTRY_ROOTS,
    headword: cambridge::HEADWORD,
    engine: &CAMBRIDGE_ENGINE,
    canonical_word: cambridge_word,
};

static WEBSTER: Schema = Schema {
    container: webster::CONTAINER,
    entry_roots: webster::ENTRY_ROOTS,
    headword: webster::HEADWORD,
    engine: &WEBSTER_ENGINE,
    canonical_word: webster_word,
};

impl Schema {
    fn for_source(source: Source) -> &'static Self {
        match source {
            Source::Cambridge => &CAMBRIDGE,
            Source::Webster => &WEBSTER,
        }
    }
}

/// Extract the entries of a document.
///
/// # Errors
/// Returns `NoEntryFound` when the document has no entry container or no
/// lexical entry inside it.
pub fn extract(document: &SourceDocument, options: &ExtractOptions) -> Result<Extraction> {
    let schema = Schema::for_source(document.source);
    let html = load_document(&document.markup);
    let root = html.root_element();
    let no_entry = || CambError::NoEntryFound {
        word: word_from_url(&document.url),
        dictionary: document.source,
    };

    let title = root.select(&TITLE).next();
    let Some(container) = descendant_elements(root).find(|node| schema.container.matches(*node))
    else {
        tracing::debug!(url = %document.url, "Entry container not found");
        return Err(no_entry());
    };

    let entries = locate_entries(container, schema.entry_roots);
    if !entries.iter().any(|entry| entry.kind.is_lexical()) {
        tracing::debug!(url = %document.url, subtrees = entries.len(), "No lexical entry found");
        return Err(no_entry());
    }

    let headwords: Vec<String> = descendant_elements(container)
        .filter(|node| schema.headword.matches(*node))
        .map(text_content)
        .collect();
    let scope = DocumentScope::new(document.source)
        .with_headwords(&headwords)
        .with_translations(options.translations);

    let engine: &ParseEngine = schema.engine;
    let mut sink = EventSink::new();
    for entry in &entries {
        let mut group = EventSink::new();
        engine.walk(entry.node, &ParseContext::new(&scope), &mut group);
        if !group.has_text() {
            tracing::debug!(entry = %describe(entry.node), "Entry rendered no text, skipping");
            continue;
        }
        group.ensure_newline();
        if !sink.is_empty() {
            sink.section_break();
        }
        sink.append(group);
    }

    let title_text = title.map(text_content);
    let canonical_word = (schema.canonical_word)(title_text.as_deref(), container)
        .filter(|word| !word.is_empty())
        .unwrap_or_else(|| word_from_url(&document.url));

    let mut serialized_entry = title.map(|title| title.html()).unwrap_or_default();
    serialized_entry.push_str(&container.html());

    tracing::debug!(
        source = %document.source,
        word = %canonical_word,
        entries = entries.len(),
        events = sink.len(),
        "Extracted document"
    );

    Ok(Extraction {
        source: document.source,
        canonical_word,
        events: sink.into_events(),
        serialized_entry,
    })
}

/// Collect entry subtrees under `container` in document order.
///
/// A found root is not searched for further roots.
pub fn locate_entries<'a>(
    container: ElementRef<'a>,
    roots: &[(Signature, EntryKind)],
) -> Vec<EntrySubtree<'a>> {
    let mut entries = Vec::new();
    push_entries(container, roots, &mut entries);
    entries
}

fn push_entries<'a>(
    node: ElementRef<'a>,
    roots: &[(Signature, EntryKind)],
    entries: &mut Vec<EntrySubtree<'a>>,
) {
    for child in element_children(node) {
        match classify(roots, child) {
            Some(kind) => entries.push(EntrySubtree { node: child, kind }),
            None => push_entries(child, roots, entries),
        }
    }
}

/// Cambridge titles read `EXAMPLE | English meaning - Cambridge Dictionary`.
fn cambridge_word(title: Option<&str>, _container: ElementRef<'_>) -> Option<String> {
    let title = title?;
    let word = title.split(cambridge::TITLE_SEPARATOR).next()?;
    Some(word.trim().to_lowercase())
}

/// The first headword of the page, or the title before ` Definition`.
/// Lowercased either way.
fn webster_word(title: Option<&str>, container: ElementRef<'_>) -> Option<String> {
    let heading = descendant_elements(container)
        .find(|node| webster::HEADWORD.matches(*node))
        .map(text_content)
        .filter(|word| !word.is_empty());
    let word = match heading {
        Some(word) => word,
        None => title?.split_once(webster::TITLE_SUFFIX)?.0.trim().to_string(),
    };
    Some(word.to_lowercase())
}

/// Recover the queried word from the last path segment of a URL.
#[must_use]
pub fn word_from_url(url: &str) -> String {
    let segment = Url::parse(url).ok().and_then(|parsed| {
        parsed
            .path_segments()
            .and_then(|mut segments| segments.rfind(|segment| !segment.is_empty()))
            .map(str::to_string)
    });
    let segment = segment.unwrap_or_default();
    percent_decode_str(&segment)
        .decode_utf8_lossy()
        .replace('-', " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::to_plain_text;
    use pretty_assertions::assert_eq;

    fn cambridge(markup: &str) -> SourceDocument {
        SourceDocument::new(
            Source::Cambridge,
            "https://dictionary.cambridge.org/dictionary/english/example",
            markup,
        )
    }

    const PAGE: &str = r#"<html><head><title>EXAMPLE | English meaning - Cambridge Dictionary</title></head>
<body><div class="page"><div class="dictionary">
  <div class="entry-body">
    <div class="pr entry-body__el"><div class="pos-header"><span class="hw">example</span> <span class="pos">noun</span></div>
      <div class="dsense"><div class="def-block"><div class="def">something typical</div></div></div></div>
    <div class="pr entry-body__el"><div class="pos-header"><span class="hw">example</span> <span class="pos">verb</span></div>
      <div class="dsense"><div class="def-block"><div class="def">to be an example</div></div></div></div>
  </div>
</div><div class="dictionary"><div class="entry-body__el"><span class="hw">ignored</span></div></div></div></body></html>"#;

    #[test]
    fn test_groups_joined_with_section_break() {
        let extraction = extract(&cambridge(PAGE), &ExtractOptions::default()).unwrap();
        assert_eq!(extraction.canonical_word, "example");
        assert_eq!(
            to_plain_text(&extraction.events),
            "example noun\nsomething typical\n\nexample verb\nto be an example\n"
        );
    }

    #[test]
    fn test_serialized_entry_replays() {
        let first = extract(&cambridge(PAGE), &ExtractOptions::default()).unwrap();
        assert!(!first.serialized_entry.contains("ignored"));

        let replay = cambridge(&first.serialized_entry);
        let second = extract(&replay, &ExtractOptions::default()).unwrap();
        assert_eq!(first.events, second.events);
        assert_eq!(first.canonical_word, second.canonical_word);
    }

    #[test]
    fn test_no_container_is_no_entry() {
        let home = cambridge("<html><body><p>home</p></body></html>");
        let err = extract(&home, &ExtractOptions::default()).unwrap_err();
        assert!(err.is_no_entry());
        assert_eq!(err.to_string(), "No Cambridge entry found for 'example'");
    }

    #[test]
    fn test_only_cross_references_is_no_entry() {
        let markup = r#"<div class="dictionary"><div class="xref synonyms"><span class="x-h">case</span></div></div>"#;
        assert!(extract(&cambridge(markup), &ExtractOptions::default())
            .unwrap_err()
            .is_no_entry());
    }

    #[test]
    fn test_locate_entries_does_not_descend_into_roots() {
        let doc = scraper::Html::parse_fragment(
            r#"<div class="dictionary"><div class="entry-body__el"><div class="idiom-block"></div></div>
               <div class="wrap"><div class="idiom-block"></div></div></div>"#,
        );
        let container = crate::dom::first_match(doc.root_element(), "div.dictionary").unwrap();
        let kinds: Vec<EntryKind> = locate_entries(container, cambridge::ENTRY_ROOTS)
            .into_iter()
            .map(|entry| entry.kind)
            .collect();
        assert_eq!(kinds, [EntryKind::Lexical, EntryKind::Idiom]);
    }

    #[test]
    fn test_canonical_word_fallbacks() {
        let markup = r#"<html><head><title>Exemplar Definition &amp; Meaning - Merriam-Webster</title></head>
            <body><div id="left-content"><div id="dictionary-entry-1"><div class="vg"></div></div></div></body></html>"#;
        let document = SourceDocument::new(
            Source::Webster,
            "https://www.merriam-webster.com/dictionary/exemplar",
            markup,
        );
        // The entry renders nothing but still counts as found.
        let extraction = extract(&document, &ExtractOptions::default()).unwrap();
        assert_eq!(extraction.canonical_word, "exemplar");
        assert!(extraction.events.is_empty());

        assert_eq!(
            word_from_url("https://dictionary.cambridge.org/dictionary/english/look-up"),
            "look up"
        );
        assert_eq!(word_from_url("https://www.merriam-webster.com/dictionary/look%20up"), "look up");
        assert_eq!(
            word_from_url("https://dictionary.cambridge.org/dictionary/english/caf%C3%A9"),
            "café"
        );
        assert_eq!(
            word_from_url("https://www.merriam-webster.com/dictionary/d%C3%A9j%C3%A0%20vu"),
            "déjà vu"
        );
    }

    #[test]
    fn test_webster_headword_is_lowercased() {
        let markup = r#"<html><head><title>Easter Definition &amp; Meaning - Merriam-Webster</title></head>
            <body><div id="left-content"><h1 class="hword">Easter</h1>
            <div id="dictionary-entry-1"><div class="vg"></div></div></div></body></html>"#;
        let document = SourceDocument::new(
            Source::Webster,
            "https://www.merriam-webster.com/dictionary/easter",
            markup,
        );
        let extraction = extract(&document, &ExtractOptions::default()).unwrap();
        assert_eq!(extraction.canonical_word, "easter");
    }
}
