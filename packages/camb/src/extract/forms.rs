//! Word-form and variant extractor.
//!
//! Grammar labels and "or"-style joiners look alike in text ("also" is
//! both); only their class tells them apart.

use scraper::ElementRef;

use crate::dom::{element_children, text_content};
use crate::matcher::{classify, FormRun, Signature};
use crate::render::{EventSink, Next, Separator, SeparatorTable, Style};

/// Separator after a form run, keyed on the run that follows.
pub static FORM_SEPARATORS: SeparatorTable<FormRun> = SeparatorTable::new(
    &[
        (FormRun::Label, Next::End, Separator::Nothing),
        (FormRun::Joiner, Next::End, Separator::Nothing),
        (FormRun::Form, Next::End, Separator::Nothing),
        (FormRun::Form, Next::Is(FormRun::Form), Separator::Text(", ")),
        (FormRun::Form, Next::Is(FormRun::Label), Separator::Text("; ")),
    ],
    Separator::Space,
);

/// Collect the classified runs under `node` in document order.
///
/// Classified elements are not descended into; unclassified ones are.
pub fn collect_form_runs(
    node: ElementRef<'_>,
    table: &[(Signature, FormRun)],
    skip: &[Signature],
) -> Vec<(FormRun, String)> {
    let mut runs = Vec::new();
    push_form_runs(node, table, skip, &mut runs);
    runs
}

fn push_form_runs(
    node: ElementRef<'_>,
    table: &[(Signature, FormRun)],
    skip: &[Signature],
    runs: &mut Vec<(FormRun, String)>,
) {
    for child in element_children(node) {
        if skip.iter().any(|signature| signature.matches(child)) {
            continue;
        }
        match classify(table, child) {
            Some(kind) => {
                let text = text_content(child);
                if !text.is_empty() {
                    runs.push((kind, text));
                }
            }
            None => push_form_runs(child, table, skip, runs),
        }
    }
}

/// Emit form runs. Forms use `form_style`.
pub fn emit_forms(runs: &[(FormRun, String)], form_style: Style, sink: &mut EventSink) {
    for (index, (kind, text)) in runs.iter().enumerate() {
        let style = match kind {
            FormRun::Label => Style::Label,
            FormRun::Joiner => Style::Plain,
            FormRun::Form => form_style,
        };
        sink.text(text.as_str(), style);
        let next = runs.get(index + 1).map(|(kind, _)| *kind);
        FORM_SEPARATORS.lookup(*kind, next).emit(sink);
    }
}
