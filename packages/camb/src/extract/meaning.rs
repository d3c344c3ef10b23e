//! Meaning-text extractor.
//!
//! Renders the runs of a definition: plain text in the given style,
//! keywords uppercased, cased terms transformed, links highlighted when
//! they name one of the document's own headwords. A single trailing colon
//! is dropped.

use super::runs::Run;
use crate::dom::collapse_whitespace;
use crate::matcher::RunKind;
use crate::registry::DocumentScope;
use crate::render::{EventSink, Style};

/// Emit definition runs.
///
/// Whitespace inside runs is collapsed; leading whitespace is dropped
/// whenever the sink already ends with a space.
pub fn emit_meaning(runs: &[Run], scope: &DocumentScope, base: Style, sink: &mut EventSink) {
    for (kind, text) in normalize(runs) {
        match kind {
            RunKind::Plain => emit_text(sink, &text, base),
            RunKind::Keyword => emit_text(sink, &text.to_uppercase(), Style::Keyword),
            RunKind::Colon => sink.plain(": "),
            RunKind::Emphasis => sink.text(text.trim(), Style::Emphasis),
            RunKind::Highlight => sink.text(text.trim(), Style::Highlight),
            RunKind::UpperTerm => emit_term(sink, scope, &text.trim().to_uppercase()),
            RunKind::LowerTerm => emit_term(sink, scope, &text.trim().to_lowercase()),
            RunKind::Link => emit_term(sink, scope, text.trim()),
            RunKind::Skip => {}
        }
    }
}

/// Emit a cross-referenced term, highlighted when it is a document headword.
pub fn emit_term(sink: &mut EventSink, scope: &DocumentScope, term: &str) {
    let style = if scope.is_headword(term) {
        Style::Highlight
    } else {
        Style::CrossRefTerm
    };
    sink.text(term, style);
}

fn emit_text(sink: &mut EventSink, text: &str, style: Style) {
    let text = if sink.ends_with_space() {
        text.trim_start()
    } else {
        text
    };
    sink.text(text, style);
}

/// Collapse whitespace, trim the outer ends and strip one trailing colon.
fn normalize(runs: &[Run]) -> Vec<(RunKind, String)> {
    let mut out: Vec<(RunKind, String)> = runs
        .iter()
        .filter(|run| run.kind != RunKind::Skip)
        .map(|run| (run.kind, collapse_whitespace(&run.text)))
        .collect();

    while out.first().is_some_and(|(_, text)| text.trim().is_empty()) {
        out.remove(0);
    }
    while out.last().is_some_and(|(_, text)| text.trim().is_empty()) {
        out.pop();
    }

    if let Some((kind, text)) = out.last_mut() {
        let trimmed = text.trim_end();
        let stripped = trimmed.strip_suffix(':').unwrap_or(trimmed).trim_end();
        *text = stripped.to_string();
        if *kind == RunKind::Colon && text.is_empty() {
            out.pop();
        }
    }
    out
}
