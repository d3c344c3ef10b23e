//! Cross-reference group handler.

use scraper::ElementRef;

use crate::extract::xref::{collect_terms, emit_xref_group};
use crate::matcher::cambridge::{XREF_KINDS, XREF_TERM};
use crate::matcher::{classify, describe};
use crate::registry::{Ancestor, ElementHandler, ElementType, ParseContext, RecurseFn};
use crate::render::EventSink;

/// Handler for `xref` groups, inside senses and at page level.
pub struct XrefHandler;

impl ElementHandler for XrefHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        _recurse: &RecurseFn<'a>,
    ) {
        let Some(kind) = classify(XREF_KINDS, node) else {
            tracing::debug!(element = %describe(node), "Unknown cross-reference group, skipping");
            return;
        };
        let terms = collect_terms(node, XREF_TERM);
        emit_xref_group(kind, &terms, &context.within(Ancestor::CrossReference), sink);
    }
}
