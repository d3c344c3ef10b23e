//! Sense handlers: guideword senses, definition blocks and examples.
//!
//! Cambridge senses are not numbered. A sense opens with its guideword and
//! holds one or more definition blocks; each definition line is followed by
//! its translation and examples, two columns further in.

use scraper::ElementRef;

use super::HEADER_RULES;
use crate::dom::{
    descendant_elements, element_children, find_child, find_descendant, text_content,
};
use crate::extract::example::{emit_example, example_text_offset};
use crate::extract::header::{collect_fields, emit_fields, INFO_SEPARATORS};
use crate::extract::meaning::emit_meaning;
use crate::extract::runs::collect_runs;
use crate::matcher::cambridge::{
    DEF, DEF_BODY, DEF_INFO, EXAMPLE_RUNS, EXAMPLE_SENTENCE, GUIDEWORD, MEANING_RUNS,
    MORE_EXAMPLES_ITEM, SENSE_HEADER, SKIP, TRANSLATION,
};
use crate::registry::{
    walk_children_where, Ancestor, ElementHandler, ElementType, ParseContext, RecurseFn,
};
use crate::render::{EventSink, Style};

/// Handler for `dsense` blocks.
pub struct SenseHandler;

impl ElementHandler for SenseHandler {
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
        let guideword = find_child(node, |child| SENSE_HEADER.matches(child))
            .and_then(|header| find_descendant(header, |child| GUIDEWORD.matches(child)))
            .map(text_content)
            .filter(|text| !text.is_empty());

        if let Some(guideword) = guideword {
            sink.ensure_newline();
            sink.indent(context.indent());
            sink.text(guideword, Style::Guideword);
            sink.newline();
        }

        walk_children_where(
            node,
            &context.within(Ancestor::Sense),
            sink,
            recurse,
            |child| !SENSE_HEADER.matches(child),
        );
    }
}

/// Handler for definition blocks.
pub struct DefBlockHandler;

impl ElementHandler for DefBlockHandler {
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
        let mut line = EventSink::new();

        if let Some(info) = find_descendant(node, |child| DEF_INFO.matches(child)) {
            let fields = collect_fields(info, &HEADER_RULES);
            emit_fields(&fields, &HEADER_RULES, &INFO_SEPARATORS, 0, &mut line);
        }

        match find_descendant(node, |child| DEF.matches(child)) {
            Some(def) => {
                let runs = collect_runs(def, MEANING_RUNS, SKIP);
                emit_meaning(&runs, context.scope, Style::Meaning, &mut line);
            }
            None => tracing::debug!("Definition block without definition text"),
        }

        if line.has_text() {
            sink.ensure_newline();
            sink.indent(context.indent());
            sink.append(line);
            sink.newline();
        }

        let Some(body) = find_descendant(node, |child| DEF_BODY.matches(child)) else {
            return;
        };
        let nested = context.with_indent(context.indent() + 2);
        for child in element_children(body) {
            recurse(child, &nested, sink);
        }
    }
}

/// Handler for `examp` blocks: the sentence and, when enabled, its
/// translation.
pub struct ExampleHandler;

impl ElementHandler for ExampleHandler {
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
        let Some(sentence) = find_child(node, |child| EXAMPLE_SENTENCE.matches(child)) else {
            tracing::debug!("Example block without sentence");
            return;
        };
        let runs = collect_runs(sentence, EXAMPLE_RUNS, SKIP);
        emit_example(&runs, None, context.indent(), sink);

        if context.scope.translations {
            if let Some(translation) = find_child(node, |child| TRANSLATION.matches(child)) {
                emit_translation(
                    &text_content(translation),
                    context.indent() + example_text_offset(),
                    sink,
                );
            }
        }
    }
}

/// Handler for the "more examples" accordion.
pub struct MoreExamplesHandler;

impl ElementHandler for MoreExamplesHandler {
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
        let indent = context.indent() + 2;
        let items = descendant_elements(node).filter(|item| MORE_EXAMPLES_ITEM.matches(*item));
        for item in items {
            let runs = collect_runs(item, EXAMPLE_RUNS, SKIP);
            emit_example(&runs, None, indent, sink);
        }
    }
}

/// Handler for definition translations. Only active when translations are
/// enabled for the document.
pub struct TranslationHandler;

impl ElementHandler for TranslationHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn can_handle(&self, _node: ElementRef<'_>, context: &ParseContext<'_>) -> bool {
        context.scope.translations
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        _recurse: &RecurseFn<'a>,
    ) {
        emit_translation(&text_content(node), context.indent(), sink);
    }
}

fn emit_translation(text: &str, indent: usize, sink: &mut EventSink) {
    if text.is_empty() {
        return;
    }
    sink.ensure_newline();
    sink.indent(indent);
    sink.text(text, Style::Translation);
    sink.newline();
}
