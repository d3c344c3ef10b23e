//! Signature catalog of the Merriam-Webster markup.

use scraper::ElementRef;

use super::{
    classify, EntryKind, FormRun, HeaderField, NumberingScheme, RunKind, SenseField, Signature,
    XrefKind,
};
use crate::dom::{descendant_elements, text_content};

/// Entry container.
pub const CONTAINER: Signature = Signature::id_prefix("left-content").with_tag("div");

/// Page title suffix after the headword.
pub const TITLE_SUFFIX: &str = " Definition";

/// Entry subtree roots, searched in document order.
pub const ENTRY_ROOTS: &[(Signature, EntryKind)] = &[
    (Signature::id_prefix("dictionary-entry-"), EntryKind::Lexical),
    (Signature::id_prefix("synonyms"), EntryKind::CrossReference),
    (Signature::id_prefix("antonyms"), EntryKind::CrossReference),
    (Signature::id_prefix("phrases"), EntryKind::CrossReference),
];

/// Header regions at the top of an entry.
pub const HEADER_REGION: Signature = Signature::one_of(&[
    "entry-header",
    "entry-attr",
    "headword-row",
    "header-ins",
    "header-vrs",
    "header-lbs",
]);

/// Headword elements, collected for the document scope.
pub const HEADWORD: Signature = Signature::class("hword");

/// Fields of an entry header or a run-on line.
pub const HEADER_FIELDS: &[(Signature, HeaderField)] = &[
    (Signature::class("hword"), HeaderField::Headword),
    (Signature::one_of(&["ure", "drp"]), HeaderField::RunOn),
    (
        Signature::class("fl")
            .with_tag("span")
            .with_title("adjective-forming suffix"),
        HeaderField::Suffix,
    ),
    (
        Signature::class("fl")
            .with_tag("span")
            .with_title("noun-forming suffix"),
        HeaderField::Suffix,
    ),
    (Signature::one_of(&["fl", "parts-of-speech"]), HeaderField::PartOfSpeech),
    (Signature::class("prons-entry-list-item"), HeaderField::Pronunciation),
    (Signature::one_of(&["ins", "in-more"]), HeaderField::Forms),
    (Signature::one_of(&["vrs", "vg-ins"]), HeaderField::Variants),
    (Signature::one_of(&["lbs", "lb", "sls", "sl"]), HeaderField::Label),
    (Signature::containing("badge"), HeaderField::Level),
];

/// Runs of an inflection or variant group.
pub const FORM_RUNS: &[(Signature, FormRun)] = &[
    (Signature::class("il"), FormRun::Label),
    (Signature::class("vl"), FormRun::Joiner),
    (Signature::one_of(&["if", "va", "v"]), FormRun::Form),
];

/// Sense group of an entry, optionally preceded by a verb divider.
pub const VERB_GROUP: Signature = Signature::class("vg").with_tag("div");

/// Verb divider ("transitive verb").
pub const VERB_DIVIDER: Signature = Signature::class("vd");

/// Numbered sense block.
pub const SENSE_BLOCK: Signature = Signature::class("sb").with_tag("div");

/// Single sense.
pub const SENSE: Signature = Signature::one_of(&["sense", "sen"]).with_tag("div");

/// Sense number wrapper.
pub const SENSE_NUMBER: Signature = Signature::class("sn");

/// Sense body.
pub const SENSE_CONTENT: Signature = Signature::class("sense-content");

/// Number of a sense label.
pub const LABEL_NUMBER: Signature = Signature::class("num");

/// Letter of a sense label.
pub const LABEL_LETTER: Signature = Signature::class("letter");

/// Parenthesized sub-number of a sense label.
pub const LABEL_SUB: Signature = Signature::class("sub-num");

/// Fields of a sense body.
pub const SENSE_FIELDS: &[(Signature, SenseField)] = &[
    (
        Signature::one_of(&["sl", "sls", "lb", "lbs", "sgram", "sense-label"]),
        SenseField::Label,
    ),
    (Signature::class("dt"), SenseField::Definition),
];

/// Definition text wrapper.
pub const DEFINITION: Signature = Signature::class("dt");

/// Definition text.
pub const DEFINITION_TEXT: Signature = Signature::class("dtText");

/// Divided sense ("also : ...").
pub const DIVIDED_SENSE: Signature = Signature::class("sdsense");

/// Divider of a divided sense.
pub const SENSE_DIVIDER: Signature = Signature::class("sd");

/// Example sentence.
pub const EXAMPLE: Signature = Signature::class("ex-sent");

/// Wrapper of the examples following a definition or usage note.
pub const EXAMPLE_THREAD: Signature = Signature::class("sub-content-thread");

/// First children of a run-on body; everything before them is its header.
pub const RUNON_BODY: Signature =
    Signature::one_of(&["vg", "utxt", "sub-content-thread", "ex-sent", "sb"]);

/// Author attribution of an example.
pub const ATTRIBUTION: Signature = Signature::class("aq");

/// Usage note ("— used ...").
pub const USAGE_NOTE: Signature = Signature::one_of(&["uns", "snote"]);

/// Directional cross reference ("— see also ...").
pub const DIRECTIONAL_XREF: Signature = Signature::one_of(&["dx", "dxs"]);

/// Cognate cross reference ("plural of ...").
pub const COGNATE_XREF: Signature = Signature::class("cxl-ref");

/// Label of a cognate cross reference.
pub const COGNATE_LABEL: Signature = Signature::class("cxl");

/// Target of a cognate cross reference.
pub const COGNATE_TARGET: Signature = Signature::class("cxt");

/// Defined run-on phrase.
pub const DEFINED_RUNON: Signature = Signature::class("dro");

/// Undefined run-on word.
pub const UNDEFINED_RUNON: Signature = Signature::class("uro");

/// Page-level cross-reference section kinds.
pub const XREF_KINDS: &[(Signature, XrefKind)] = &[
    (Signature::id_prefix("synonyms"), XrefKind::Synonyms),
    (Signature::id_prefix("antonyms"), XrefKind::Opposites),
    (Signature::id_prefix("phrases"), XrefKind::Phrases),
    (Signature::one_of(&["synonym", "synonyms"]), XrefKind::Synonyms),
    (Signature::one_of(&["antonym", "antonyms"]), XrefKind::Opposites),
];

/// Linked term of a cross-reference section.
pub const XREF_TERM: Signature = Signature::one_of(&["mw-list-item", "pseudo-link"]);

/// Runs of a definition.
pub const MEANING_RUNS: &[(Signature, RunKind)] = &[
    (Signature::class("mw_t_bc"), RunKind::Colon),
    (Signature::one_of(&["mw_t_sx", "mw_t_sc"]), RunKind::UpperTerm),
    (Signature::class("mw_t_dxt"), RunKind::LowerTerm),
    (Signature::one_of(&["mw_t_it", "mw_t_wi"]), RunKind::Emphasis),
    (Signature::one_of(&["dx", "dxs"]), RunKind::Keyword),
    (
        Signature::one_of(&["ex-sent", "sub-content-thread", "uns", "sdsense", "aq"]),
        RunKind::Skip,
    ),
    (Signature::tag("a"), RunKind::Link),
    (Signature::tag("em"), RunKind::Emphasis),
    (Signature::tag("i"), RunKind::Emphasis),
    (Signature::tag("strong"), RunKind::Highlight),
    (Signature::tag("b"), RunKind::Highlight),
];

/// Runs of an example sentence.
pub const EXAMPLE_RUNS: &[(Signature, RunKind)] = &[
    (Signature::class("aq"), RunKind::Skip),
    (Signature::one_of(&["mw_t_it", "mw_t_wi"]), RunKind::Emphasis),
    (Signature::tag("em"), RunKind::Emphasis),
    (Signature::tag("i"), RunKind::Emphasis),
    (Signature::tag("strong"), RunKind::Highlight),
    (Signature::tag("b"), RunKind::Highlight),
];

/// Noise: audio buttons, syllable breaks, ads, etymology, nearby entries.
pub const SKIP: &[Signature] = &[
    Signature::one_of(&[
        "play-pron-v2",
        "word-syllables-entry",
        "ad-container",
        "abl",
        "wgt-incentive-anchors",
        "nearby-entries",
    ]),
    Signature::id_prefix("etymology"),
    Signature::id_prefix("nearby-entries"),
    Signature::tag("script"),
    Signature::tag("style"),
    Signature::tag("noscript"),
    Signature::tag("img"),
    Signature::tag("svg"),
];

/// Word of the day headword.
pub const WOD_WORD: &str = ".word-and-pronunciation h2";

/// Word of the day part of speech.
pub const WOD_POS: &str = ".main-attr";

/// Word of the day syllables.
pub const WOD_SYLLABLES: &str = ".word-syllables";

/// Word of the day definition container.
pub const WOD_DEFINITION: &str = ".wod-definition-container";

/// Numbering scheme keyed on which label parts are present:
/// `(number, letter, sub-number)`.
const NUMBERING: &[((bool, bool, bool), NumberingScheme)] = &[
    ((true, false, false), NumberingScheme::NumericOnly),
    ((true, true, false), NumberingScheme::NumberLetter),
    ((true, true, true), NumberingScheme::NumberLetter),
    ((false, true, false), NumberingScheme::LetterOnly),
    ((false, false, true), NumberingScheme::SubNumbered),
    ((true, false, true), NumberingScheme::NumberSub),
    ((false, true, true), NumberingScheme::LetterSub),
];

/// Parts of a sense label, in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SenseLabel {
    pub number: Option<String>,
    pub letter: Option<String>,
    pub sub: Option<String>,
}

impl SenseLabel {
    /// Read the label parts from a sense number wrapper.
    pub fn read(sn: ElementRef<'_>) -> Self {
        let part = |signature: Signature| {
            descendant_elements(sn)
                .find(|node| signature.matches(*node))
                .map(text_content)
                .filter(|text| !text.is_empty())
        };
        Self {
            number: part(LABEL_NUMBER),
            letter: part(LABEL_LETTER),
            sub: part(LABEL_SUB),
        }
    }

    /// Numbering scheme of the label.
    #[must_use]
    pub fn scheme(&self) -> NumberingScheme {
        let key = (self.number.is_some(), self.letter.is_some(), self.sub.is_some());
        NUMBERING
            .iter()
            .find(|(present, _)| *present == key)
            .map_or(NumberingScheme::Unnumbered, |(_, scheme)| *scheme)
    }

    /// Present parts in display order.
    pub fn parts(&self) -> impl Iterator<Item = &str> {
        [&self.number, &self.letter, &self.sub]
            .into_iter()
            .filter_map(|part| part.as_deref())
    }

    /// Rendered width of the label ("1 a" is 3).
    #[must_use]
    pub fn width(&self) -> usize {
        let parts: Vec<&str> = self.parts().collect();
        let chars: usize = parts.iter().map(|part| part.chars().count()).sum();
        chars + parts.len().saturating_sub(1)
    }
}

/// Classify a sense body field.
pub fn sense_field(node: ElementRef<'_>) -> SenseField {
    classify(SENSE_FIELDS, node).unwrap_or(SenseField::Other)
}
