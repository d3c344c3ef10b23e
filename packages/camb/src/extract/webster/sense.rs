//! Sense handlers.
//!
//! A sense block (`sb`) groups the senses under one number. Each sense
//! prints its label at a column derived from the block's label width and
//! lettering, and its content one column after the label:
//!
//! ```text
//! 1 a : first sense
//!   b : second sense
//!     (1) : sub-sense
//! ```

use scraper::ElementRef;

use crate::dom::{
    descendant_elements, element_children, find_child, find_descendant, text_content,
};
use crate::extract::example::emit_example;
use crate::extract::meaning::emit_meaning;
use crate::extract::runs::collect_runs;
use crate::matcher::webster::{
    sense_field, SenseLabel, ATTRIBUTION, DEFINITION_TEXT, DIRECTIONAL_XREF, EXAMPLE_RUNS,
    EXAMPLE_THREAD, LABEL_LETTER, LABEL_NUMBER, MEANING_RUNS, SENSE_CONTENT, SENSE_DIVIDER,
    SENSE_NUMBER, SKIP,
};
use crate::matcher::{NumberingScheme, RunKind, SenseField};
use crate::registry::{
    walk_children, walk_children_where, Ancestor, ElementHandler, ElementType, ParseContext,
    RecurseFn,
};
use crate::render::{EventSink, Next, Separator, SeparatorTable, Style};

/// Separators between the label and the fields of a sense.
static SENSE_SEPARATORS: SeparatorTable<SenseField> = SeparatorTable::new(
    &[
        (SenseField::Number, Next::Is(SenseField::Label), Separator::Space),
        (SenseField::Number, Next::Is(SenseField::Definition), Separator::Space),
        (SenseField::Number, Next::Any, Separator::Nothing),
        (SenseField::Label, Next::Is(SenseField::Label), Separator::Space),
        (SenseField::Label, Next::Is(SenseField::Definition), Separator::Space),
    ],
    Separator::Newline,
);

/// Handler for sense blocks.
pub struct SenseBlockHandler;

impl ElementHandler for SenseBlockHandler {
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
        let label_width = find_descendant(node, |child| LABEL_NUMBER.matches(child))
            .map_or(0, |number| text_content(number).chars().count());
        let lettered = descendant_elements(node).any(|child| LABEL_LETTER.matches(child));

        let block = context
            .within(Ancestor::SenseBlock)
            .with_label_width(label_width, lettered);
        walk_children(node, &block, sink, recurse);
    }
}

/// Column of a sense label inside its block.
fn label_indent(scheme: NumberingScheme, context: &ParseContext<'_>) -> usize {
    let base = context.indent();
    let width = context.ancestor.label_width;
    let under_number = if width > 0 { width + 1 } else { 0 };
    let under_letter = if context.ancestor.lettered { 2 } else { 0 };

    match scheme {
        NumberingScheme::NumericOnly
        | NumberingScheme::NumberLetter
        | NumberingScheme::NumberSub => base,
        NumberingScheme::LetterOnly | NumberingScheme::LetterSub => base + under_number,
        NumberingScheme::SubNumbered | NumberingScheme::Unnumbered => {
            base + under_number + under_letter
        }
    }
}

/// Handler for single senses.
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
        let label = find_child(node, |child| SENSE_NUMBER.matches(child))
            .map(SenseLabel::read)
            .unwrap_or_default();
        let scheme = label.scheme();
        let indent = label_indent(scheme, context);
        let width = label.width();
        let content_indent = if width > 0 { indent + width + 1 } else { indent };

        sink.ensure_newline();
        let mut previous = None;
        if scheme != NumberingScheme::Unnumbered {
            sink.indent(indent);
            let parts: Vec<&str> = label.parts().collect();
            sink.text(parts.join(" "), Style::SenseNumber);
            previous = Some(SenseField::Number);
        }

        let content = context.within(Ancestor::Sense).with_indent(content_indent);
        let body = find_child(node, |child| SENSE_CONTENT.matches(child)).unwrap_or(node);
        for child in element_children(body).filter(|child| !SENSE_NUMBER.matches(*child)) {
            let kind = sense_field(child);
            if kind == SenseField::Label && text_content(child).is_empty() {
                continue;
            }
            if let Some(previous) = previous {
                SENSE_SEPARATORS.lookup(previous, Some(kind)).emit(sink);
            }
            match kind {
                SenseField::Label => {
                    if sink.at_line_start() {
                        sink.indent(content_indent);
                    }
                    sink.text(text_content(child), Style::Label);
                }
                SenseField::Number | SenseField::Definition | SenseField::Other => {
                    recurse(child, &content, sink);
                }
            }
            previous = Some(kind);
        }
        if let Some(previous) = previous {
            SENSE_SEPARATORS.lookup(previous, None).emit(sink);
        }
        sink.ensure_newline();
    }
}

/// Handler for definition wrappers (`dt`).
///
/// The first definition text continues the label line; directional cross
/// references stay on the line they follow.
pub struct DefinitionHandler;

impl ElementHandler for DefinitionHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    ) {
        let mut first = true;
        for child in element_children(node) {
            if DEFINITION_TEXT.matches(child) {
                if !first || sink.at_line_start() {
                    sink.ensure_newline();
                    sink.indent(context.indent());
                }
                let runs = collect_runs(child, MEANING_RUNS, SKIP);
                emit_meaning(&runs, context.scope, Style::Meaning, sink);
                first = false;
            } else if DIRECTIONAL_XREF.matches(child) {
                if sink.at_line_start() {
                    sink.indent(context.indent());
                } else if !sink.ends_with_space() {
                    sink.plain(" ");
                }
                let mut runs = collect_runs(child, MEANING_RUNS, SKIP);
                for run in &mut runs {
                    if run.kind == RunKind::Plain {
                        run.kind = RunKind::Keyword;
                    }
                }
                emit_meaning(&runs, context.scope, Style::Meaning, sink);
            } else {
                recurse(child, context, sink);
            }
        }
        sink.ensure_newline();
    }
}

/// Handler for example sentences with optional author attribution.
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
        let runs = collect_runs(node, EXAMPLE_RUNS, SKIP);
        let attribution = find_descendant(node, |child| ATTRIBUTION.matches(child))
            .map(text_content)
            .map(|author| author.trim_start_matches(['—', '-']).trim().to_string());
        emit_example(&runs, attribution.as_deref(), context.indent(), sink);
    }
}

/// Handler for usage notes ("— used in plural").
pub struct UsageNoteHandler;

impl ElementHandler for UsageNoteHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    ) {
        let runs = collect_runs(node, MEANING_RUNS, SKIP);
        let mut line = EventSink::new();
        emit_meaning(&runs, context.scope, Style::Meaning, &mut line);
        if line.has_text() {
            sink.ensure_newline();
            sink.indent(context.indent());
            sink.append(line);
            sink.newline();
        }
        walk_children_where(node, context, sink, recurse, |child| {
            EXAMPLE_THREAD.matches(child)
        });
    }
}

/// Handler for divided senses ("also : ...").
pub struct DividedSenseHandler;

impl ElementHandler for DividedSenseHandler {
    fn element_type(&self) -> ElementType {
        ElementType::Inline
    }

    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    ) {
        sink.ensure_newline();
        sink.indent(context.indent());
        if let Some(divider) = find_child(node, |child| SENSE_DIVIDER.matches(child)) {
            sink.text(text_content(divider), Style::Label);
            sink.plain(" ");
        }
        walk_children_where(node, context, sink, recurse, |child| {
            !SENSE_DIVIDER.matches(child)
        });
        sink.ensure_newline();
    }
}
