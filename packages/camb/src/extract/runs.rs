//! Text run collection for definitions and examples.

use scraper::ElementRef;

use crate::matcher::{classify, RunKind, Signature};

/// A contiguous piece of text with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub kind: RunKind,
    pub text: String,
}

impl Run {
    #[must_use]
    pub fn new(kind: RunKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// Split the text under `node` into runs, in document order.
///
/// Elements classified as a leaf kind become one run holding their whole
/// text. Unclassified elements are transparent. Text inside a `Keyword`
/// container becomes keyword text; elements inside it are still classified.
/// Adjacent text of the same kind is merged.
pub fn collect_runs(
    node: ElementRef<'_>,
    table: &[(Signature, RunKind)],
    skip: &[Signature],
) -> Vec<Run> {
    let mut runs = Vec::new();
    push_runs(node, table, skip, RunKind::Plain, &mut runs);
    runs
}

fn push_runs(
    node: ElementRef<'_>,
    table: &[(Signature, RunKind)],
    skip: &[Signature],
    inherited: RunKind,
    runs: &mut Vec<Run>,
) {
    for child in node.children() {
        if let Some(text) = child.value().as_text() {
            push_text(runs, inherited, text);
            continue;
        }
        let Some(element) = ElementRef::wrap(child) else {
            continue;
        };
        if skip.iter().any(|signature| signature.matches(element)) {
            continue;
        }
        match classify(table, element) {
            Some(RunKind::Skip) => {}
            Some(RunKind::Keyword) => push_runs(element, table, skip, RunKind::Keyword, runs),
            Some(RunKind::Plain) | None => push_runs(element, table, skip, inherited, runs),
            Some(kind) => runs.push(Run::new(kind, element.text().collect::<String>())),
        }
    }
}

fn push_text(runs: &mut Vec<Run>, kind: RunKind, text: &str) {
    if let Some(last) = runs.last_mut() {
        if last.kind == kind && matches!(kind, RunKind::Plain | RunKind::Keyword) {
            last.text.push_str(text);
            return;
        }
    }
    runs.push(Run::new(kind, text));
}
