//! Cross-reference extractor.
//!
//! The group title comes from the group kind, never from the markup, so
//! both class-naming conventions of a group render the same.

use scraper::ElementRef;

use super::meaning::emit_term;
use crate::dom::{descendant_elements, tag_name, text_content};
use crate::matcher::{Signature, XrefKind, XrefLayout};
use crate::registry::ParseContext;
use crate::render::{EventSink, Style};

/// Collect the linked terms of a group, without duplicates.
///
/// Terms are the elements matching `term`; groups without such elements
/// fall back to their links.
pub fn collect_terms(node: ElementRef<'_>, term: Signature) -> Vec<String> {
    let mut terms: Vec<String> = descendant_elements(node)
        .filter(|element| term.matches(*element))
        .map(text_content)
        .collect();
    if terms.is_empty() {
        terms = descendant_elements(node)
            .filter(|element| tag_name(*element) == "a")
            .map(text_content)
            .collect();
    }

    let mut unique: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        if !term.is_empty() && !unique.contains(&term) {
            unique.push(term);
        }
    }
    unique
}

/// Emit a cross-reference group at the context indent.
pub fn emit_xref_group(
    kind: XrefKind,
    terms: &[String],
    context: &ParseContext<'_>,
    sink: &mut EventSink,
) {
    if terms.is_empty() {
        tracing::debug!(group = kind.name(), "Cross-reference group without terms, skipping");
        return;
    }

    let indent = context.indent();
    sink.ensure_newline();
    sink.indent(indent);
    sink.text(kind.title(), Style::SectionTitle);

    match kind.layout() {
        XrefLayout::Inline => {
            sink.plain(" ");
            for (index, term) in terms.iter().enumerate() {
                if index > 0 {
                    sink.plain(", ");
                }
                emit_term(sink, context.scope, term);
            }
            sink.newline();
        }
        XrefLayout::List => {
            sink.newline();
            for term in terms {
                sink.indent(indent + 2);
                emit_term(sink, context.scope, term);
                sink.newline();
            }
        }
    }
}

/// Emit a cognate reference line such as `plural of example`.
pub fn emit_cognate(label: &str, target: &str, context: &ParseContext<'_>, sink: &mut EventSink) {
    if target.is_empty() {
        tracing::debug!(label, "Cognate reference without target, skipping");
        return;
    }
    sink.ensure_newline();
    sink.indent(context.indent());
    if !label.is_empty() {
        sink.text(label, Style::Label);
        sink.plain(" ");
    }
    emit_term(sink, context.scope, target);
    sink.newline();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::first_match;
    use crate::registry::DocumentScope;
    use crate::render::{to_plain_text, RenderEvent};
    use crate::types::Source;
    use scraper::Html;

    #[test]
    fn test_collect_terms_with_fallback_and_dedup() {
        let doc = Html::parse_fragment(
            r#"<div class="x"><a><span class="x-h">instance</span></a><a><span class="x-h">case</span></a><a><span class="x-h">instance</span></a></div>
               <div class="y"><a>sample</a><a> </a></div>"#,
        );
        let root = doc.root_element();
        let x = first_match(root, "div.x").unwrap();
        let y = first_match(root, "div.y").unwrap();

        assert_eq!(collect_terms(x, Signature::class("x-h")), ["instance", "case"]);
        assert_eq!(collect_terms(y, Signature::class("x-h")), ["sample"]);
    }

    #[test]
    fn test_inline_group() {
        let scope = DocumentScope::new(Source::Cambridge).with_headwords(["case"]);
        let context = ParseContext::new(&scope).with_indent(2);
        let mut sink = EventSink::new();
        emit_xref_group(
            XrefKind::Synonyms,
            &["instance".to_string(), "case".to_string()],
            &context,
            &mut sink,
        );

        assert_eq!(to_plain_text(sink.events()), "  SYNONYMS instance, case\n");
        assert!(sink
            .events()
            .contains(&RenderEvent::text("case", Style::Highlight)));
    }

    #[test]
    fn test_list_group() {
        let scope = DocumentScope::new(Source::Cambridge);
        let context = ParseContext::new(&scope);
        let mut sink = EventSink::new();
        emit_xref_group(
            XrefKind::Idioms,
            &["make an example of someone".to_string(), "for example".to_string()],
            &context,
            &mut sink,
        );

        assert_eq!(
            to_plain_text(sink.events()),
            "IDIOMS\n  make an example of someone\n  for example\n"
        );
    }

    #[test]
    fn test_empty_group_emits_nothing() {
        let scope = DocumentScope::new(Source::Webster);
        let context = ParseContext::new(&scope);
        let mut sink = EventSink::new();
        emit_xref_group(XrefKind::Phrases, &[], &context, &mut sink);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_cognate() {
        let scope = DocumentScope::new(Source::Webster);
        let context = ParseContext::new(&scope);
        let mut sink = EventSink::new();
        emit_cognate("plural of", "example", &context, &mut sink);
        assert_eq!(to_plain_text(sink.events()), "plural of example\n");
    }
}
