//! Merriam-Webster handlers.
//!
//! Entries are numbered sense lists under a header; run-ons and the
//! synonyms, antonyms and phrases sections follow the entries.

mod entry;
mod sense;
mod wod;
mod xref;

pub use entry::{EntryHandler, RunOnHandler, VerbDividerHandler};
pub use sense::{
    DefinitionHandler, DividedSenseHandler, ExampleHandler, SenseBlockHandler, SenseHandler,
    UsageNoteHandler,
};
pub use wod::{extract_word_of_the_day, WordOfTheDay};
pub use xref::{CognateHandler, XrefSectionHandler};

use scraper::ElementRef;

use super::header::HeaderRules;
use super::pron::Pron;
use crate::dom::text_content;
use crate::matcher::webster::{
    COGNATE_XREF, DEFINED_RUNON, DEFINITION, DIVIDED_SENSE, ENTRY_ROOTS, EXAMPLE, FORM_RUNS,
    HEADER_FIELDS, SENSE, SENSE_BLOCK, SKIP, UNDEFINED_RUNON, USAGE_NOTE, VERB_DIVIDER,
    XREF_KINDS,
};
use crate::matcher::EntryKind;
use crate::registry::ElementRegistry;

/// Header rules of the Merriam-Webster markup.
pub static HEADER_RULES: HeaderRules = HeaderRules {
    fields: HEADER_FIELDS,
    forms: FORM_RUNS,
    skip: SKIP,
    prons: read_prons,
    pron_wrap: Some("\\"),
};

fn read_prons(node: ElementRef<'_>) -> Vec<Pron> {
    vec![Pron::new(None, text_content(node))]
}

/// Create a registry with every Merriam-Webster handler registered.
#[must_use]
pub fn create_webster_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    for (signature, kind) in ENTRY_ROOTS {
        if *kind == EntryKind::Lexical {
            registry.register(*signature, EntryHandler);
        }
    }
    for (signature, _) in XREF_KINDS {
        registry.register(*signature, XrefSectionHandler);
    }
    registry.register(DEFINED_RUNON, RunOnHandler);
    registry.register(UNDEFINED_RUNON, RunOnHandler);
    registry.register(VERB_DIVIDER, VerbDividerHandler);
    registry.register(SENSE_BLOCK, SenseBlockHandler);
    registry.register(SENSE, SenseHandler);
    registry.register(DEFINITION, DefinitionHandler);
    registry.register(DIVIDED_SENSE, DividedSenseHandler);
    registry.register(EXAMPLE, ExampleHandler);
    registry.register(USAGE_NOTE, UsageNoteHandler);
    registry.register(COGNATE_XREF, CognateHandler);

    registry.skip(SKIP.iter().copied());
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::first_match;
    use crate::registry::{DocumentScope, ParseContext, ParseEngine};
    use crate::render::{to_plain_text, EventSink, RenderEvent, Style};
    use crate::types::Source;
    use pretty_assertions::assert_eq;
    use scraper::Html;

    fn walk(html: &str) -> Vec<RenderEvent> {
        let doc = Html::parse_fragment(html);
        let root = first_match(doc.root_element(), "div").unwrap();
        let scope = DocumentScope::new(Source::Webster).with_headwords(["example"]);
        let engine = ParseEngine::new(create_webster_registry());
        let mut sink = EventSink::new();
        engine.walk(root, &ParseContext::new(&scope), &mut sink);
        sink.into_events()
    }

    const ENTRY: &str = r#"
<div id="dictionary-entry-1" class="entry-word-section-container">
  <div class="row entry-header"><div class="col-12"><h1 class="hword">example</h1>
    <h2 class="parts-of-speech"><a>noun</a></h2></div></div>
  <div class="row entry-attr"><div class="col"><span class="word-syllables-entry">ex·am·ple</span>
    <span class="prons-entries-list-inline"><a class="prons-entry-list-item">ig-ˈzam-pəl<span class="play-pron-v2"></span></a>
    <a class="prons-entry-list-item">-ˈzäm-</a></span></div></div>
  <div class="vg">
    <div class="sb has-num has-let">
      <div class="sb-0"><div class="sense has-sn"><span class="sn"><span class="num">1</span> <span class="letter">a</span></span>
        <div class="sense-content"><span class="dt"><span class="dtText"><strong class="mw_t_bc">: </strong>one that serves as a pattern</span>
          <div class="sub-content-thread"><span class="ex-sent"><span class="t">set a good <em>example</em> for the others</span> <span class="aq">— Jane Doe</span></span></div></span></div></div></div>
      <div class="sb-1"><div class="sense has-sn"><span class="sn"><span class="letter">b</span></span>
        <div class="sense-content"><span class="sl">archaic</span> <span class="dt"><span class="dtText"><strong class="mw_t_bc">: </strong>a parallel or closely similar case</span></span></div></div></div>
    </div>
    <div class="sb has-num">
      <div class="sense has-sn"><span class="sn"><span class="num">2</span></span>
        <div class="sense-content"><span class="dt"><span class="dtText"><strong class="mw_t_bc">: </strong>a typical instance <span class="dx">—see also <a class="mw_t_dxt">SAMPLE</a></span></span></span></div></div>
    </div>
  </div>
  <div class="uro"><div class="uro-wrapper"><span class="ure">exampleless</span> <span class="fl">adjective</span></div></div>
</div>"#;

    #[test]
    fn test_entry_layout() {
        let events = walk(ENTRY);
        assert_eq!(
            to_plain_text(&events),
            concat!(
                "example noun\n",
                "\\ig-ˈzam-pəl, -ˈzäm-\\\n",
                "1 a : one that serves as a pattern\n",
                "    // set a good example for the others — Jane Doe\n",
                "  b archaic : a parallel or closely similar case\n",
                "2 : a typical instance —SEE ALSO sample\n",
                "exampleless adjective\n",
            )
        );
        assert!(events.contains(&RenderEvent::text("1 a", Style::SenseNumber)));
        assert!(events.contains(&RenderEvent::text("archaic", Style::Label)));
        assert!(events.contains(&RenderEvent::text("example", Style::Emphasis)));
        assert!(events.contains(&RenderEvent::text("sample", Style::CrossRefTerm)));
    }

    #[test]
    fn test_sub_numbered_senses_align() {
        let html = r#"<div id="dictionary-entry-1"><div class="vg"><div class="sb">
            <div class="sense"><span class="sn"><span class="num">1</span><span class="letter">a</span><span class="sub-num">(1)</span></span>
              <div class="sense-content"><span class="dt"><span class="dtText">: first</span></span></div></div>
            <div class="sense"><span class="sn"><span class="sub-num">(2)</span></span>
              <div class="sense-content"><span class="dt"><span class="dtText">: second</span></span></div></div>
            <div class="sense"><span class="sn"><span class="letter">b</span></span>
              <div class="sense-content"><span class="dt"><span class="dtText">: third</span></span></div></div>
          </div></div></div>"#;
        assert_eq!(
            to_plain_text(&walk(html)),
            "1 a (1) : first\n    (2) : second\n  b : third\n"
        );
    }

    #[test]
    fn test_verb_divider_and_defined_runon() {
        let html = r#"<div id="dictionary-entry-2">
            <div class="vg"><div class="vd"><a>transitive verb</a></div>
              <div class="sb"><div class="sense"><span class="sn"><span class="num">1</span></span>
                <div class="sense-content"><span class="dt"><span class="dtText">: to serve as an example of</span></span></div></div></div></div>
            <div class="dro"><div class="drp-wrapper"><h2 class="drp">for example</h2></div>
              <div class="vg"><div class="sb"><div class="sense"><div class="sense-content">
                <span class="dt"><span class="dtText"><strong class="mw_t_bc">: </strong>as an example</span></span></div></div></div></div></div>
          </div>"#;
        assert_eq!(
            to_plain_text(&walk(html)),
            "transitive verb\n1 : to serve as an example of\nfor example\n  : as an example\n"
        );
    }

    #[test]
    fn test_divided_sense_usage_note_and_cognate() {
        let html = r#"<div id="dictionary-entry-3">
            <p class="cxl-ref"><span class="cxl">plural of</span> <a class="cxt">example</a></p>
            <div class="vg"><div class="sb"><div class="sense"><span class="sn"><span class="num">1</span></span>
              <div class="sense-content"><span class="dt"><span class="dtText">: a model</span>
                <span class="uns">—used in plural</span></span>
                <div class="sdsense"><span class="sd">also</span> <span class="dt"><span class="dtText">: a sample</span></span></div>
              </div></div></div></div>
          </div>"#;
        let events = walk(html);
        assert_eq!(
            to_plain_text(&events),
            "plural of example\n1 : a model\n  —used in plural\n  also : a sample\n"
        );
        assert!(events.contains(&RenderEvent::text("example", Style::Highlight)));
    }

    #[test]
    fn test_synonyms_section() {
        let html = r#"<div id="synonyms-anchor"><h2>Synonyms of <em>example</em></h2>
            <ul class="mw-list"><li class="mw-list-item"><a>instance</a></li><li class="mw-list-item"><a>case</a></li></ul></div>"#;
        assert_eq!(to_plain_text(&walk(html)), "SYNONYMS instance, case\n");
    }
}
