//! Entry-level handlers: entry roots, headers, run-ons and phrase blocks.

use scraper::ElementRef;

use super::HEADER_RULES;
use crate::dom::{element_children, find_descendant, text_content};
use crate::extract::header::{collect_fields, emit_fields, HEADER_SEPARATORS};
use crate::matcher::cambridge::{PHRASE_HEAD, PHRASE_TITLE, RUNON_TITLE};
use crate::matcher::{describe, EntryKind};
use crate::registry::{
    walk_children, walk_children_where, Ancestor, ElementHandler, ElementType, ParseContext,
    RecurseFn,
};
use crate::render::{EventSink, Style};

/// Handler for entry roots: entries, idiom blocks and phrasal verb blocks.
pub struct EntryHandler {
    kind: EntryKind,
}

impl EntryHandler {
    #[must_use]
    pub fn new(kind: EntryKind) -> Self {
        Self { kind }
    }
}

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
        let ancestor = match self.kind {
            EntryKind::Idiom | EntryKind::PhrasalVerb => Ancestor::Idiom,
            EntryKind::Lexical | EntryKind::CrossReference => Ancestor::Entry,
        };
        tracing::trace!(entry = %describe(node), "Walking entry");
        walk_children(node, &context.within(ancestor), sink, recurse);
    }
}

/// Handler for `pos-header` and `di-head` blocks.
///
/// Emits headword, part of speech, grammar, pronunciations, forms,
/// variants and labels.
pub struct HeaderHandler;

impl ElementHandler for HeaderHandler {
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
        let fields = collect_fields(node, &HEADER_RULES);
        if fields.is_empty() {
            tracing::debug!("Entry header without fields");
            return;
        }
        sink.ensure_newline();
        emit_fields(&fields, &HEADER_RULES, &HEADER_SEPARATORS, context.indent(), sink);
        sink.ensure_newline();
    }
}

/// Handler for run-on entries (derived words under the main entry).
///
/// The title line uses the header layout; the body is indented.
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
        let fields: Vec<_> = element_children(node)
            .filter(|child| RUNON_TITLE.matches(*child))
            .flat_map(|child| collect_fields(child, &HEADER_RULES))
            .collect();

        sink.ensure_newline();
        emit_fields(&fields, &HEADER_RULES, &HEADER_SEPARATORS, context.indent(), sink);
        sink.ensure_newline();

        let body = context
            .within(Ancestor::RunOn)
            .with_indent(context.indent() + 2);
        walk_children_where(node, &body, sink, recurse, |child| {
            !RUNON_TITLE.matches(child)
        });
    }
}

/// Handler for phrase blocks ("for example").
pub struct PhraseBlockHandler;

impl ElementHandler for PhraseBlockHandler {
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
        match find_descendant(node, |child| PHRASE_TITLE.matches(child)) {
            Some(title) => {
                sink.ensure_newline();
                sink.indent(context.indent());
                sink.text(text_content(title), Style::Phrase);
                sink.newline();
            }
            None => tracing::debug!("Phrase block without title"),
        }

        let body = context
            .within(Ancestor::PhraseBlock)
            .with_indent(context.indent() + 2);
        walk_children_where(node, &body, sink, recurse, |child| {
            !PHRASE_HEAD.matches(child) && !PHRASE_TITLE.matches(child)
        });
    }
}
