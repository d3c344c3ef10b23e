//! Cross-reference handlers: page sections and cognate references.

use scraper::ElementRef;

use crate::dom::{find_descendant, text_content};
use crate::extract::xref::{collect_terms, emit_cognate, emit_xref_group};
use crate::matcher::webster::{COGNATE_LABEL, COGNATE_TARGET, XREF_KINDS, XREF_TERM};
use crate::matcher::{classify, describe};
use crate::registry::{Ancestor, ElementHandler, ElementType, ParseContext, RecurseFn};
use crate::render::EventSink;

/// Handler for the synonyms, antonyms and phrases sections of a page.
pub struct XrefSectionHandler;

impl ElementHandler for XrefSectionHandler {
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
            tracing::debug!(element = %describe(node), "Unknown cross-reference section, skipping");
            return;
        };
        let terms = collect_terms(node, XREF_TERM);
        emit_xref_group(kind, &terms, &context.within(Ancestor::CrossReference), sink);
    }
}

/// Handler for cognate references ("plural of example").
pub struct CognateHandler;

impl ElementHandler for CognateHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        _recurse: &RecurseFn<'a>,
    ) {
        let label = find_descendant(node, |child| COGNATE_LABEL.matches(child))
            .map(text_content)
            .unwrap_or_default();
        let target = find_descendant(node, |child| COGNATE_TARGET.matches(child))
            .map(text_content)
            .unwrap_or_default();
        emit_cognate(&label, &target, context, sink);
    }
}
