//! Render events: the contract between extraction and presentation.

use serde::{Deserialize, Serialize};

/// Presentation class of a text fragment.
///
/// Styles name what the text *is*; the presenter decides how it looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// Spacing, punctuation and other connective text.
    Plain,
    /// Entry headword.
    Headword,
    /// Part of speech ("noun", "transitive verb").
    PartOfSpeech,
    /// Grammar code ("[C]", "[T]").
    Grammar,
    /// Pronunciation region tag ("UK", "US").
    Region,
    /// Pronunciation string.
    Pronunciation,
    /// Usage, register and grammar labels ("informal", "plural").
    Label,
    /// Vocabulary level badge ("A2").
    Level,
    /// Inflected form.
    Inflection,
    /// Spelling or form variant.
    Variant,
    /// Sense guide word ("(TYPICAL CASE)").
    Guideword,
    /// Sense number or letter.
    SenseNumber,
    /// Definition text.
    Meaning,
    /// Uppercased keyword inside a definition ("SEE ALSO").
    Keyword,
    /// Linked term.
    CrossRefTerm,
    /// Italic run.
    Emphasis,
    /// Bold run, and terms that are headwords of the current document.
    Highlight,
    /// Marker printed before an example.
    ExampleMarker,
    /// Example sentence text.
    Example,
    /// Translation into another language.
    Translation,
    /// Title of a cross-reference group or page section.
    SectionTitle,
    /// Idiom, phrase or run-on headword.
    Phrase,
    /// Spelling suggestion.
    Suggestion,
}

/// One unit of the presentation-agnostic output stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderEvent {
    /// A text fragment with its style.
    Text { content: String, style: Style },
    /// End of line.
    Newline,
    /// Boundary between two entries or top-level sections.
    SectionBreak,
}

impl RenderEvent {
    /// Create a text event.
    #[must_use]
    pub fn text(content: impl Into<String>, style: Style) -> Self {
        Self::Text {
            content: content.into(),
            style,
        }
    }
}

/// Render events as plain text, without styling.
///
/// `SectionBreak` becomes an empty line.
#[must_use]
pub fn to_plain_text(events: &[RenderEvent]) -> String {
    let mut out = String::new();
    for event in events {
        match event {
            RenderEvent::Text { content, .. } => out.push_str(content),
            RenderEvent::Newline | RenderEvent::SectionBreak => out.push('\n'),
        }
    }
    out
}
