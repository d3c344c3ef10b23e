//! End-to-end extraction tests over saved dictionary pages.
//!
//! Fixtures under `tests/fixtures/` are trimmed copies of real Cambridge and
//! Merriam-Webster pages, keeping the surrounding page chrome the extractor
//! has to ignore.

use std::fs;
use std::path::Path;

use camb::extract::webster::extract_word_of_the_day;
use camb::render::to_plain_text;
use camb::suggest::parse_suggestions;
use camb::{extract, CacheRecord, ExtractOptions, RenderEvent, Source, SourceDocument, Style};
use pretty_assertions::assert_eq;

const CAMBRIDGE_URL: &str = "https://dictionary.cambridge.org/dictionary/english/example";
const WEBSTER_URL: &str = "https://www.merriam-webster.com/dictionary/example";

const CAMBRIDGE_NOUN: &str = "example noun\n\
    UK /ɪɡˈzɑːm.pəl/ US /ɪɡˈzæm.pəl/\n\
    (TYPICAL CASE)\n\
    B1 [C] something that is typical of the group of things that it is a member of\n\
    \x20\x20// This painting is a fine example of her work.\n\
    \x20\x20// Can you give me an example?\n\
    SYNONYMS instance\n";

const CAMBRIDGE_VERB: &str = "example verb\nto be an example of something\n";

/// Load fixture file content.
fn load_fixture(source: &str, name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(source)
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

fn cambridge(markup: String) -> SourceDocument {
    SourceDocument::new(Source::Cambridge, CAMBRIDGE_URL, markup)
}

fn webster(markup: String) -> SourceDocument {
    SourceDocument::new(Source::Webster, WEBSTER_URL, markup)
}

fn plain(document: &SourceDocument) -> String {
    let extraction = extract(document, &ExtractOptions::default()).unwrap();
    to_plain_text(&extraction.events)
}

#[test]
fn test_cambridge_page() {
    let document = cambridge(load_fixture("cambridge", "example.html"));
    let extraction = extract(&document, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.source, Source::Cambridge);
    assert_eq!(extraction.canonical_word, "example");
    assert_eq!(
        to_plain_text(&extraction.events),
        format!("{CAMBRIDGE_NOUN}\n{CAMBRIDGE_VERB}")
    );
    // Only the first dictionary block is read.
    assert!(!extraction.serialized_entry.contains("cacd"));
    assert!(extraction.serialized_entry.starts_with("<title>"));
}

#[test]
fn test_webster_page() {
    let document = webster(load_fixture("webster", "example.html"));
    let extraction = extract(&document, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.canonical_word, "example");
    assert_eq!(
        to_plain_text(&extraction.events),
        concat!(
            "example noun\n",
            "\\ig-ˈzam-pəl, -ˈzäm-\\\n",
            "1 a : one that serves as a pattern\n",
            "    // set a good example for the others — Jane Doe\n",
            "  b archaic : a parallel or closely similar case\n",
            "2 : a typical instance —SEE ALSO sample\n",
            "exampleless adjective\n",
            "\n",
            "SYNONYMS instance, case\n",
        )
    );
}

#[test]
fn test_extraction_is_deterministic() {
    for document in [
        cambridge(load_fixture("cambridge", "example.html")),
        webster(load_fixture("webster", "example.html")),
    ] {
        let first = extract(&document, &ExtractOptions::default()).unwrap();
        let second = extract(&document, &ExtractOptions::default()).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_groups_keep_source_order() {
    let document = cambridge(load_fixture("cambridge", "example.html"));
    let events = extract(&document, &ExtractOptions::default()).unwrap().events;

    let groups: Vec<&[RenderEvent]> = events
        .split(|event| *event == RenderEvent::SectionBreak)
        .collect();
    assert_eq!(groups.len(), 2);
    assert_eq!(to_plain_text(groups[0]), CAMBRIDGE_NOUN);
    assert_eq!(to_plain_text(groups[1]), CAMBRIDGE_VERB);

    // Each group starts with its header.
    for group in groups {
        assert_eq!(group[0], RenderEvent::text("example", Style::Headword));
    }
}

#[test]
fn test_cache_record_replays_identically() {
    for document in [
        cambridge(load_fixture("cambridge", "example.html")),
        webster(load_fixture("webster", "example.html")),
        webster(load_fixture("webster", "exemplar.html")),
    ] {
        let fresh = extract(&document, &ExtractOptions::default()).unwrap();
        let record = CacheRecord::new("example", document.url.clone(), &fresh);

        let json = serde_json::to_string(&record).unwrap();
        let stored: CacheRecord = serde_json::from_str(&json).unwrap();
        let replay = extract(&SourceDocument::from_record(&stored), &ExtractOptions::default())
            .unwrap();

        assert_eq!(replay.canonical_word, fresh.canonical_word);
        assert_eq!(replay.events, fresh.events);
    }
}

#[test]
fn test_missing_pronunciation_only_drops_that_line() {
    let full = load_fixture("cambridge", "example.html");
    let without_prons: String = full
        .lines()
        .filter(|line| !line.contains("dpron-i"))
        .collect::<Vec<_>>()
        .join("\n");

    let expected = format!("{CAMBRIDGE_NOUN}\n{CAMBRIDGE_VERB}")
        .replace("UK /ɪɡˈzɑːm.pəl/ US /ɪɡˈzæm.pəl/\n", "");
    assert_eq!(plain(&cambridge(without_prons)), expected);
}

#[test]
fn test_home_page_is_no_entry() {
    let document = cambridge(load_fixture("cambridge", "home.html"));
    let err = extract(&document, &ExtractOptions::default()).unwrap_err();
    assert!(err.is_no_entry());
    assert_eq!(err.to_string(), "No Cambridge entry found for 'example'");
}

#[test]
fn test_webster_not_found_page() {
    let markup = load_fixture("webster", "not_found.html");
    let document = SourceDocument::new(
        Source::Webster,
        "https://www.merriam-webster.com/dictionary/exampel",
        markup.clone(),
    );

    let err = extract(&document, &ExtractOptions::default()).unwrap_err();
    assert_eq!(err.to_string(), "No Merriam-Webster entry found for 'exampel'");
    assert_eq!(
        parse_suggestions(Source::Webster, &markup),
        ["example", "exampled", "sample"]
    );
}

#[test]
fn test_single_numbered_sense_with_example() {
    let document = SourceDocument::new(
        Source::Webster,
        "https://www.merriam-webster.com/dictionary/exemplar",
        load_fixture("webster", "exemplar.html"),
    );
    let extraction = extract(&document, &ExtractOptions::default()).unwrap();

    assert_eq!(extraction.canonical_word, "exemplar");
    assert_eq!(
        to_plain_text(&extraction.events),
        "exemplar noun\n1 : one that serves as a model\n  // an exemplar of good manners\n"
    );
    assert_eq!(
        extraction.events[0],
        RenderEvent::text("exemplar", Style::Headword)
    );
    assert!(extraction
        .events
        .contains(&RenderEvent::text("1", Style::SenseNumber)));
    let markers = extraction
        .events
        .iter()
        .filter(|event| **event == RenderEvent::text("//", Style::ExampleMarker))
        .count();
    assert_eq!(markers, 1);
}

#[test]
fn test_lettered_senses_indent_under_number_width() {
    let text = plain(&webster(load_fixture("webster", "example.html")));
    let lines: Vec<&str> = text.lines().collect();

    let first = lines.iter().position(|line| line.starts_with("1 a ")).unwrap();
    // "1" is one column wide, so "b" sits under "a".
    assert!(lines[first + 2].starts_with("  b "));
    assert_eq!(lines[first].find('a'), lines[first + 2].find('b'));
}

#[test]
fn test_double_digit_number_widens_label_column() {
    let document = SourceDocument::new(
        Source::Webster,
        "https://www.merriam-webster.com/dictionary/set",
        load_fixture("webster", "set.html"),
    );
    let text = plain(&document);
    assert_eq!(
        text,
        concat!(
            "set noun\n",
            "9 : a group of things used together\n",
            "10 a : the scenery for a play\n",
            "     // built the scenery in a week\n",
            "   b : a stage for filming\n",
            "     // quiet on the stage\n",
        )
    );

    // "b" sits under "a"; examples start at the definition column.
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[2].find('a'), lines[4].find('b'));
    assert_eq!(lines[2].find(':'), lines[3].find("//"));
    assert_eq!(lines[3].find("//"), lines[5].find("//"));
}

#[test]
fn test_plural_cross_reference_class_matches_singular() {
    let singular = load_fixture("cambridge", "example.html");
    let plural = singular.replace("xref synonym hax", "xref synonyms hax");
    assert_ne!(singular, plural);

    assert_eq!(
        extract(&cambridge(singular), &ExtractOptions::default())
            .unwrap()
            .events,
        extract(&cambridge(plural), &ExtractOptions::default())
            .unwrap()
            .events
    );
}

#[test]
fn test_word_of_the_day_page() {
    let wod = extract_word_of_the_day(&load_fixture("webster", "word_of_the_day.html")).unwrap();
    assert_eq!(wod.word, "ebullient");
    assert_eq!(
        to_plain_text(&wod.events),
        concat!(
            "ebullient adjective\n",
            "ih-BULL-yunt\n",
            "WHAT IT MEANS\n",
            "Someone described as ebullient is lively and enthusiastic.\n",
            "// The crowd grew ebullient as the band took the stage.\n",
            "DID YOU KNOW?\n",
            "It comes from the Latin verb meaning \"to bubble out.\"\n",
            "// Her ebullient personality won them over.\n",
        )
    );
}
