//! Header extractor.
//!
//! A header is a list of fields found in source order. The separator after
//! each field depends on the kind of the field that follows it, so fields
//! are collected first, fields without text are dropped, and only then is
//! anything emitted.

use scraper::ElementRef;

use super::forms::{collect_form_runs, emit_forms};
use super::pron::{emit_prons, Pron};
use crate::dom::{element_children, text_content};
use crate::matcher::{classify, FormRun, HeaderField, Signature};
use crate::render::{EventSink, Next, Separator, SeparatorTable, Style};

/// Separators between the fields of an entry header.
///
/// Headword, part of speech, grammar, labels and badges share the first
/// line; pronunciations, forms and variants get a line each.
pub static HEADER_SEPARATORS: SeparatorTable<HeaderField> = SeparatorTable::new(
    &[
        (HeaderField::Headword, Next::Is(HeaderField::PartOfSpeech), Separator::Space),
        (HeaderField::Headword, Next::Is(HeaderField::Suffix), Separator::Space),
        (HeaderField::Headword, Next::Is(HeaderField::Grammar), Separator::Space),
        (HeaderField::Headword, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::Headword, Next::Is(HeaderField::Level), Separator::Space),
        (HeaderField::RunOn, Next::Is(HeaderField::PartOfSpeech), Separator::Space),
        (HeaderField::RunOn, Next::Is(HeaderField::Grammar), Separator::Space),
        (HeaderField::RunOn, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::RunOn, Next::Is(HeaderField::Pronunciation), Separator::Space),
        (HeaderField::PartOfSpeech, Next::Is(HeaderField::PartOfSpeech), Separator::Text(", ")),
        (HeaderField::PartOfSpeech, Next::Is(HeaderField::Grammar), Separator::Space),
        (HeaderField::PartOfSpeech, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::PartOfSpeech, Next::Is(HeaderField::Level), Separator::Space),
        (HeaderField::Suffix, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::Grammar, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::Grammar, Next::Is(HeaderField::Level), Separator::Space),
        (HeaderField::Label, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::Label, Next::Is(HeaderField::Grammar), Separator::Space),
        (HeaderField::Label, Next::Is(HeaderField::Level), Separator::Space),
        (HeaderField::Level, Next::Is(HeaderField::Label), Separator::Space),
        (HeaderField::Level, Next::Is(HeaderField::Grammar), Separator::Space),
        (HeaderField::Forms, Next::Is(HeaderField::Variants), Separator::Text("; ")),
        (HeaderField::Variants, Next::Is(HeaderField::Forms), Separator::Text("; ")),
    ],
    Separator::Newline,
);

/// Separators inside a definition info block: every field is followed by a
/// space, including the last one, which precedes the definition text.
pub static INFO_SEPARATORS: SeparatorTable<HeaderField> =
    SeparatorTable::new(&[], Separator::Space);

/// Schema-specific rules for reading header fields.
pub struct HeaderRules {
    /// Field signatures.
    pub fields: &'static [(Signature, HeaderField)],
    /// Word-form run signatures.
    pub forms: &'static [(Signature, FormRun)],
    /// Noise signatures.
    pub skip: &'static [Signature],
    /// Read the pronunciations of one pronunciation field.
    pub prons: fn(ElementRef<'_>) -> Vec<Pron>,
    /// Marks around each pronunciation group.
    pub pron_wrap: Option<&'static str>,
}

/// A header field and the elements it was read from.
#[derive(Debug, Clone)]
pub struct Field<'a> {
    pub kind: HeaderField,
    pub nodes: Vec<ElementRef<'a>>,
}

/// Collect the header fields under `node` in document order.
///
/// Classified elements are not descended into. Consecutive pronunciations
/// become one field.
pub fn collect_fields<'a>(node: ElementRef<'a>, rules: &HeaderRules) -> Vec<Field<'a>> {
    let mut fields = Vec::new();
    push_fields(node, rules, &mut fields);
    fields
}

fn push_fields<'a>(node: ElementRef<'a>, rules: &HeaderRules, fields: &mut Vec<Field<'a>>) {
    for child in element_children(node) {
        if rules.skip.iter().any(|signature| signature.matches(child)) {
            continue;
        }
        let Some(kind) = classify(rules.fields, child) else {
            push_fields(child, rules, fields);
            continue;
        };
        match fields.last_mut() {
            Some(last) if kind == HeaderField::Pronunciation && last.kind == kind => {
                last.nodes.push(child);
            }
            _ => fields.push(Field {
                kind,
                nodes: vec![child],
            }),
        }
    }
}

/// Emit header fields, one line group at `indent`.
///
/// The line ends after the last field.
pub fn emit_fields(
    fields: &[Field<'_>],
    rules: &HeaderRules,
    separators: &SeparatorTable<HeaderField>,
    indent: usize,
    sink: &mut EventSink,
) {
    let present: Vec<&Field<'_>> = fields
        .iter()
        .filter(|field| {
            let has_text = field.nodes.iter().any(|node| !text_content(*node).is_empty());
            if !has_text {
                tracing::debug!(field = ?field.kind, "Header field without text, skipping");
            }
            has_text
        })
        .collect();

    for (index, field) in present.iter().enumerate() {
        if sink.at_line_start() {
            sink.indent(indent);
        }
        emit_field(field, rules, sink);
        let next = present.get(index + 1).map(|field| field.kind);
        separators.lookup(field.kind, next).emit(sink);
    }
}

fn emit_field(field: &Field<'_>, rules: &HeaderRules, sink: &mut EventSink) {
    let first = |style: Style, sink: &mut EventSink| {
        if let Some(node) = field.nodes.first() {
            sink.text(text_content(*node), style);
        }
    };
    match field.kind {
        HeaderField::Headword => first(Style::Headword, sink),
        HeaderField::RunOn => first(Style::Phrase, sink),
        HeaderField::PartOfSpeech => first(Style::PartOfSpeech, sink),
        HeaderField::Suffix | HeaderField::Label => first(Style::Label, sink),
        HeaderField::Level => first(Style::Level, sink),
        HeaderField::Grammar => {
            if let Some(node) = field.nodes.first() {
                sink.text(compact_grammar(&text_content(*node)), Style::Grammar);
            }
        }
        HeaderField::Pronunciation => {
            let prons: Vec<Pron> = field
                .nodes
                .iter()
                .flat_map(|node| (rules.prons)(*node))
                .collect();
            emit_prons(&prons, rules.pron_wrap, sink);
        }
        HeaderField::Forms | HeaderField::Variants | HeaderField::SpellingVariants => {
            let style = if field.kind == HeaderField::Forms {
                Style::Inflection
            } else {
                Style::Variant
            };
            for node in &field.nodes {
                let runs = collect_form_runs(*node, rules.forms, rules.skip);
                if runs.is_empty() {
                    sink.text(text_content(*node), style);
                } else {
                    emit_forms(&runs, style, sink);
                }
            }
        }
    }
}

/// Remove the padding inside grammar codes: `[ C ]` becomes `[C]`.
#[must_use]
pub fn compact_grammar(code: &str) -> String {
    let spaced = code.split_whitespace().collect::<Vec<_>>().join(" ");
    spaced.replace("[ ", "[").replace(" ]", "]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::first_match;
    use crate::render::to_plain_text;
    use scraper::Html;

    fn no_prons(_: ElementRef<'_>) -> Vec<Pron> {
        Vec::new()
    }

    fn text_prons(node: ElementRef<'_>) -> Vec<Pron> {
        vec![Pron::new(None, text_content(node))]
    }

    const FIELDS: &[(Signature, HeaderField)] = &[
        (Signature::class("hw"), HeaderField::Headword),
        (Signature::class("pos"), HeaderField::PartOfSpeech),
        (Signature::class("gram"), HeaderField::Grammar),
        (Signature::class("pr"), HeaderField::Pronunciation),
        (Signature::class("ins"), HeaderField::Forms),
    ];

    const FORMS: &[(Signature, FormRun)] = &[
        (Signature::class("il"), FormRun::Label),
        (Signature::class("if"), FormRun::Form),
    ];

    fn rules(prons: fn(ElementRef<'_>) -> Vec<Pron>) -> HeaderRules {
        HeaderRules {
            fields: FIELDS,
            forms: FORMS,
            skip: &[],
            prons,
            pron_wrap: Some("\\"),
        }
    }

    fn render(html: &str, rules: &HeaderRules) -> String {
        let doc = Html::parse_fragment(html);
        let node = first_match(doc.root_element(), "div").unwrap();
        let fields = collect_fields(node, rules);
        let mut sink = EventSink::new();
        emit_fields(&fields, rules, &HEADER_SEPARATORS, 0, &mut sink);
        sink.ensure_newline();
        to_plain_text(sink.events())
    }

    #[test]
    fn test_header_line_layout() {
        let out = render(
            r#"<div><p><span class="hw">example</span></p><span class="pos">noun</span>
               <span class="gram">[ C ]</span><span class="pr">ig-ˈzam-pəl</span><span class="pr">-ˈzäm-</span>
               <span class="ins"><span class="il">plural</span> <span class="if">examples</span></span></div>"#,
            &rules(text_prons),
        );
        assert_eq!(out, "example noun [C]\n\\ig-ˈzam-pəl, -ˈzäm-\\\nplural examples\n");
    }

    #[test]
    fn test_missing_field_changes_previous_separator() {
        let with_pos = render(
            r#"<div><span class="hw">example</span><span class="pos">noun</span></div>"#,
            &rules(no_prons),
        );
        let without_pos = render(
            r#"<div><span class="hw">example</span><span class="pos"> </span><span class="ins"><span class="if">examples</span></span></div>"#,
            &rules(no_prons),
        );
        assert_eq!(with_pos, "example noun\n");
        assert_eq!(without_pos, "example\nexamples\n");
    }

    #[test]
    fn test_compact_grammar() {
        assert_eq!(compact_grammar("[ C ]"), "[C]");
        assert_eq!(compact_grammar("[ T  or  I ]"), "[T or I]");
    }
}
