//! Cambridge Dictionary handlers.
//!
//! Entries, idiom blocks and phrasal verb blocks share one layout: a header
//! line group, then guideword senses whose definition lines carry their
//! examples two columns further in.

mod entry;
mod sense;
mod xref;

pub use entry::{EntryHandler, HeaderHandler, PhraseBlockHandler, RunOnHandler};
pub use sense::{
    DefBlockHandler, ExampleHandler, MoreExamplesHandler, SenseHandler, TranslationHandler,
};
pub use xref::XrefHandler;

use scraper::ElementRef;

use super::header::HeaderRules;
use super::pron::Pron;
use crate::dom::{find_descendant, text_content};
use crate::matcher::cambridge::{
    DEF_BLOCK, ENTRY_ROOTS, EXAMPLE, FORM_RUNS, HEADER, HEADER_FIELDS, MORE_EXAMPLES,
    PHRASE_BLOCK, PRON_REGION, PRON_TEXT, RUNON, SENSE, SKIP, TRANSLATION, XREF,
};
use crate::matcher::EntryKind;
use crate::registry::ElementRegistry;

/// Header rules of the Cambridge markup.
pub static HEADER_RULES: HeaderRules = HeaderRules {
    fields: HEADER_FIELDS,
    forms: FORM_RUNS,
    skip: SKIP,
    prons: read_prons,
    pron_wrap: None,
};

/// Read one pronunciation: region tag and slashed text.
fn read_prons(node: ElementRef<'_>) -> Vec<Pron> {
    let region = find_descendant(node, |child| PRON_REGION.matches(child)).map(text_content);
    let Some(text) = find_descendant(node, |child| PRON_TEXT.matches(child)).map(text_content)
    else {
        return Vec::new();
    };
    vec![Pron::new(region.as_deref(), text)]
}

/// Create a registry with every Cambridge handler registered.
#[must_use]
pub fn create_cambridge_registry() -> ElementRegistry {
    let mut registry = ElementRegistry::new();

    for (signature, kind) in ENTRY_ROOTS {
        if *kind == EntryKind::CrossReference {
            continue;
        }
        registry.register(*signature, EntryHandler::new(*kind));
    }
    registry.register(HEADER, HeaderHandler);
    registry.register(RUNON, RunOnHandler);
    registry.register(PHRASE_BLOCK, PhraseBlockHandler);
    registry.register(SENSE, SenseHandler);
    registry.register(DEF_BLOCK, DefBlockHandler);
    registry.register(EXAMPLE, ExampleHandler);
    registry.register(MORE_EXAMPLES, MoreExamplesHandler);
    registry.register(TRANSLATION, TranslationHandler);
    registry.register(XREF, XrefHandler);

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

    const ENTRY: &str = r#"
<div class="pr entry-body__el">
  <div class="pos-header dpos-h">
    <div class="di-title"><span class="headword hdb"><span class="hw dhw">example</span></span></div>
    <div class="posgram dpos-g"><span class="pos dpos">noun</span></div>
    <span class="uk dpron-i"><span class="region dreg">uk</span><span class="daud"><audio></audio></span>
      <span class="pron dpron">/<span class="ipa">ɪɡˈzɑːm.pəl</span>/</span></span>
    <span class="us dpron-i"><span class="region dreg">us</span>
      <span class="pron dpron">/<span class="ipa">ɪɡˈzæm.pəl</span>/</span></span>
  </div>
  <div class="pos-body">
    <div class="pr dsense">
      <h3 class="dsense_h"><span class="guideword dsense_gw">(<span>TYPICAL CASE</span>)</span></h3>
      <div class="sense-body dsense_b">
        <div class="def-block ddef_block">
          <div class="ddef_h">
            <div class="def-info ddef-info"><span class="epp-xref dxref B1">B1</span>
              <span class="gram dgram">[ C ]</span></div>
            <div class="def ddef_d db">something that is typical of the group of things that it is a member of: </div>
          </div>
          <div class="def-body ddef_b">
            <span class="trans dtrans">例子</span>
            <div class="examp dexamp"><span class="eg deg">This painting is a <b>fine</b> example of her work.</span>
              <span class="trans dtrans">这幅画是她作品的一个好例子。</span></div>
          </div>
        </div>
        <div class="daccord"><ul><li class="eg dexamp hax">Can you give me an example?</li></ul></div>
        <div class="xref synonym hax"><div class="lcs"><a><span class="x-h dx-h">instance</span></a></div></div>
      </div>
    </div>
  </div>
</div>"#;

    fn walk(html: &str, translations: bool) -> Vec<RenderEvent> {
        let doc = Html::parse_fragment(html);
        let root = first_match(doc.root_element(), "div.entry-body__el").unwrap();
        let scope = DocumentScope::new(Source::Cambridge)
            .with_headwords(["example"])
            .with_translations(translations);
        let engine = ParseEngine::new(create_cambridge_registry());
        let mut sink = EventSink::new();
        engine.walk(root, &ParseContext::new(&scope), &mut sink);
        sink.into_events()
    }

    #[test]
    fn test_entry_layout() {
        let events = walk(ENTRY, false);
        assert_eq!(
            to_plain_text(&events),
            "example noun\n\
             UK /ɪɡˈzɑːm.pəl/ US /ɪɡˈzæm.pəl/\n\
             (TYPICAL CASE)\n\
             B1 [C] something that is typical of the group of things that it is a member of\n\
             \x20\x20// This painting is a fine example of her work.\n\
             \x20\x20// Can you give me an example?\n\
             SYNONYMS instance\n"
        );
    }

    #[test]
    fn test_translations_follow_definition_and_example() {
        let text = to_plain_text(&walk(ENTRY, true));
        assert!(text.contains("member of\n  例子\n  // This painting"));
        assert!(text.contains("of her work.\n     这幅画是她作品的一个好例子。\n"));
    }

    #[test]
    fn test_styles() {
        let events = walk(ENTRY, false);
        assert!(events.contains(&RenderEvent::text("example", Style::Headword)));
        assert!(events.contains(&RenderEvent::text("noun", Style::PartOfSpeech)));
        assert!(events.contains(&RenderEvent::text("(TYPICAL CASE)", Style::Guideword)));
        assert!(events.contains(&RenderEvent::text("fine", Style::Highlight)));
        assert!(events.contains(&RenderEvent::text("B1", Style::Level)));
    }

    #[test]
    fn test_phrase_block_indents_body() {
        let html = r#"<div class="entry-body__el"><div class="dsense">
            <div class="phrase-block dphrase-block">
              <div class="phrase-head dphrase_h"><span class="phrase-title dphrase-title"><b>for example</b></span></div>
              <div class="phrase-body dphrase_b"><div class="def-block"><div class="def">used when giving an example</div>
                <div class="def-body"><div class="examp"><span class="eg">There are many <b>examples</b>, for example this one.</span></div></div>
              </div></div>
            </div></div></div>"#;
        assert_eq!(
            to_plain_text(&walk(html, false)),
            "for example\n  used when giving an example\n    // There are many examples, for example this one.\n"
        );
    }

    #[test]
    fn test_runon_title_and_body() {
        let html = r#"<div class="entry-body__el"><div class="runon">
            <div class="runon-title"><span class="w">exemplary</span> <span class="pos">adjective</span></div>
            <div class="runon-body"><div class="examp"><span class="eg">an exemplary student</span></div></div>
          </div></div>"#;
        assert_eq!(
            to_plain_text(&walk(html, false)),
            "exemplary adjective\n  // an exemplary student\n"
        );
    }

    #[test]
    fn test_unknown_xref_group_is_dropped() {
        let html = r#"<div class="entry-body__el"><div class="xref mystery"><a><span class="x-h">thing</span></a></div></div>"#;
        assert!(walk(html, false).is_empty());
    }
}
