//! Entry-level handlers: entries, verb dividers and run-ons.

use scraper::ElementRef;

use super::HEADER_RULES;
use crate::dom::{element_children, text_content};
use crate::extract::header::{collect_fields, emit_fields, Field, HEADER_SEPARATORS};
use crate::matcher::webster::{HEADER_REGION, RUNON_BODY};
use crate::registry::{Ancestor, ElementHandler, ElementType, ParseContext, RecurseFn};
use crate::render::{EventSink, Style};

/// Handler for `dictionary-entry-N` sections.
///
/// The header regions are rendered first as one field list, then the
/// remaining children in document order.
pub struct EntryHandler;

impl ElementHandler for EntryHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    ) {
        let (header, body): (Vec<_>, Vec<_>) =
            element_children(node).partition(|child| HEADER_REGION.matches(*child));

        let fields: Vec<Field<'a>> = header
            .into_iter()
            .flat_map(|region| collect_fields(region, &HEADER_RULES))
            .collect();
        if fields.is_empty() {
            tracing::debug!("Entry without header fields");
        }
        emit_header(&fields, context.indent(), sink);

        let entry = context.within(Ancestor::Entry);
        for child in body {
            recurse(child, &entry, sink);
        }
    }
}

/// Handler for defined (`dro`) and undefined (`uro`) run-ons.
///
/// Children before the first body element form the run-on header; the body
/// is indented two columns.
pub struct RunOnHandler;

impl ElementHandler for RunOnHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Structural
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    ) {
        let children: Vec<ElementRef<'a>> = element_children(node).collect();
        let split = children
            .iter()
            .position(|child| RUNON_BODY.matches(*child))
            .unwrap_or(children.len());
        let (header, body) = children.split_at(split);

        let fields: Vec<Field<'a>> = header
            .iter()
            .flat_map(|child| collect_fields(*child, &HEADER_RULES))
            .collect();
        emit_header(&fields, context.indent(), sink);

        let nested = context
            .within(Ancestor::RunOn)
            .with_indent(context.indent() + 2);
        for child in body {
            recurse(*child, &nested, sink);
        }
    }
}

/// Handler for verb dividers ("transitive verb").
pub struct VerbDividerHandler;

impl ElementHandler for VerbDividerHandler {
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
        let text = text_content(node);
        if text.is_empty() {
            return;
        }
        sink.ensure_newline();
        sink.indent(context.indent());
        sink.text(text, Style::PartOfSpeech);
        sink.newline();
    }
}

fn emit_header(fields: &[Field<'_>], indent: usize, sink: &mut EventSink) {
    sink.ensure_newline();
    emit_fields(fields, &HEADER_RULES, &HEADER_SEPARATORS, indent, sink);
    sink.ensure_newline();
}
