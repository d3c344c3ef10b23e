//! Example extractor.
//!
//! One example is one line: indentation, the example marker, the sentence.
//! Emphasized runs are trimmed and get a trailing space only when the text
//! after them does not attach directly to the word.

use super::runs::Run;
use crate::config::EXAMPLE_MARKER;
use crate::dom::collapse_whitespace;
use crate::render::{EventSink, Style};

/// Characters that attach to the end of an emphasized run without a space.
const TIGHT_PUNCTUATION: &[char] = &[',', '.', ';', ':', '!', '?', ')', '\'', '’', '"'];

/// Emit one example line at `indent`.
///
/// Nothing is emitted for an example without text. An attribution is
/// appended after an em dash.
pub fn emit_example(runs: &[Run], attribution: Option<&str>, indent: usize, sink: &mut EventSink) {
    let pieces = space_runs(runs);
    if pieces.is_empty() {
        tracing::debug!("Example without text, skipping");
        return;
    }

    sink.ensure_newline();
    sink.indent(indent);
    sink.text(EXAMPLE_MARKER, Style::ExampleMarker);
    sink.plain(" ");
    for (text, style) in pieces {
        sink.text(text, style);
    }
    if let Some(author) = attribution.map(str::trim).filter(|author| !author.is_empty()) {
        sink.plain(" ");
        sink.text(format!("— {author}"), Style::Label);
    }
    sink.newline();
}

/// Column where the text of an example line starts, relative to its indent.
#[must_use]
pub fn example_text_offset() -> usize {
    EXAMPLE_MARKER.chars().count() + 1
}

/// Apply the emphasis spacing rule and map runs to styled pieces.
#[must_use]
pub fn space_runs(runs: &[Run]) -> Vec<(String, Style)> {
    let mut pieces: Vec<(String, Style)> = Vec::new();
    let mut trim_next = true;

    for (index, run) in runs.iter().enumerate() {
        let text = collapse_whitespace(&run.text);
        if run.kind.is_emphasis() {
            let word = text.trim();
            if word.is_empty() {
                continue;
            }
            let style = if run.kind == crate::matcher::RunKind::Highlight {
                Style::Highlight
            } else {
                Style::Emphasis
            };
            pieces.push((word.to_string(), style));
            let glue = runs
                .get(index + 1)
                .is_some_and(|next| !starts_tight(&next.text));
            if glue {
                pieces.push((" ".to_string(), Style::Example));
            }
            trim_next = true;
        } else {
            let text = if trim_next { text.trim_start() } else { text.as_str() };
            trim_next = false;
            if !text.is_empty() {
                pieces.push((text.to_string(), Style::Example));
            }
        }
    }

    while let Some((last, _)) = pieces.last_mut() {
        let trimmed = last.trim_end();
        if trimmed.is_empty() {
            pieces.pop();
        } else {
            *last = trimmed.to_string();
            break;
        }
    }
    pieces
}

fn starts_tight(text: &str) -> bool {
    text.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || TIGHT_PUNCTUATION.contains(&c))
}
