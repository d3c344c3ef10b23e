//! Merriam-Webster word of the day.
//!
//! The page has no entry container; the word, its attributes and the
//! definition paragraphs are read directly. Example paragraphs carry no
//! class and are recognized by their leading `//`.

use std::sync::LazyLock;

use scraper::{ElementRef, Selector};

use crate::config::EXAMPLE_MARKER;
use crate::dom::{element_children, load_document, static_selector, tag_name, text_content};
use crate::error::{CambError, Result};
use crate::matcher::webster::{WOD_DEFINITION, WOD_POS, WOD_SYLLABLES, WOD_WORD};
use crate::render::{EventSink, RenderEvent, Style};
use crate::types::Source;

static WORD: LazyLock<Selector> = LazyLock::new(|| static_selector(WOD_WORD));
static POS: LazyLock<Selector> = LazyLock::new(|| static_selector(WOD_POS));
static SYLLABLES: LazyLock<Selector> = LazyLock::new(|| static_selector(WOD_SYLLABLES));
static DEFINITION: LazyLock<Selector> = LazyLock::new(|| static_selector(WOD_DEFINITION));

/// The word of the day and its rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordOfTheDay {
    pub word: String,
    pub events: Vec<RenderEvent>,
}

/// Extract the word of the day from its page.
///
/// # Errors
/// Returns `NoEntryFound` when the page has no word heading.
pub fn extract_word_of_the_day(markup: &str) -> Result<WordOfTheDay> {
    let document = load_document(markup);
    let root = document.root_element();

    let word = first_text(root, &WORD)
        .filter(|word| !word.is_empty())
        .ok_or_else(|| CambError::NoEntryFound {
            word: "word of the day".to_string(),
            dictionary: Source::Webster,
        })?;

    let mut sink = EventSink::new();
    sink.text(word.as_str(), Style::Headword);
    if let Some(pos) = first_text(root, &POS).filter(|pos| !pos.is_empty()) {
        sink.plain(" ");
        sink.text(pos, Style::PartOfSpeech);
    }
    sink.newline();
    if let Some(syllables) = first_text(root, &SYLLABLES).filter(|text| !text.is_empty()) {
        sink.text(syllables, Style::Pronunciation);
        sink.newline();
    }

    match root.select(&DEFINITION).next() {
        Some(container) => emit_definition(container, &mut sink),
        None => tracing::debug!("Word of the day without definition"),
    }

    Ok(WordOfTheDay {
        word,
        events: sink.into_events(),
    })
}

fn first_text(root: ElementRef<'_>, selector: &Selector) -> Option<String> {
    root.select(selector).next().map(text_content)
}

fn emit_definition(container: ElementRef<'_>, sink: &mut EventSink) {
    for child in element_children(container) {
        let text = text_content(child);
        if text.is_empty() {
            continue;
        }
        match tag_name(child) {
            "h2" => {
                sink.ensure_newline();
                sink.text(text.to_uppercase(), Style::SectionTitle);
                sink.newline();
            }
            "p" => match text.strip_prefix(EXAMPLE_MARKER) {
                Some(example) => {
                    sink.text(EXAMPLE_MARKER, Style::ExampleMarker);
                    sink.plain(" ");
                    sink.text(example.trim(), Style::Example);
                    sink.newline();
                }
                None => {
                    sink.text(text, Style::Meaning);
                    sink.newline();
                }
            },
            _ => emit_definition(child, sink),
        }
    }
}
