//! Signature catalog of the Cambridge Dictionary markup.

use super::{EntryKind, FormRun, HeaderField, RunKind, Signature, XrefKind};

/// Entry container: the first dictionary block of the page.
pub const CONTAINER: Signature = Signature::class("dictionary").with_tag("div");

/// Page title carrying the canonical headword before a `|`.
pub const TITLE_SEPARATOR: char = '|';

/// Entry subtree roots, searched in document order.
pub const ENTRY_ROOTS: &[(Signature, EntryKind)] = &[
    (Signature::class("entry-body__el"), EntryKind::Lexical),
    (Signature::class("pv-block"), EntryKind::PhrasalVerb),
    (Signature::class("idiom-block"), EntryKind::Idiom),
    (Signature::class("xref").with_tag("div"), EntryKind::CrossReference),
];

/// Header regions of an entry, idiom or phrasal verb block.
pub const HEADER: Signature = Signature::one_of(&["pos-header", "di-head"]);

/// Headword elements, collected for the document scope.
pub const HEADWORD: Signature = Signature::one_of(&["headword", "hw"]);

/// Fields of a header, a run-on title or a definition info block.
pub const HEADER_FIELDS: &[(Signature, HeaderField)] = &[
    (Signature::one_of(&["headword", "hw"]), HeaderField::Headword),
    (Signature::class("w"), HeaderField::RunOn),
    (Signature::class("pos"), HeaderField::PartOfSpeech),
    (Signature::class("gram"), HeaderField::Grammar),
    (Signature::one_of(&["dpron-i", "pron-info"]), HeaderField::Pronunciation),
    (Signature::class("irreg-infls"), HeaderField::Forms),
    (Signature::class("var"), HeaderField::Variants),
    (Signature::class("spellvar"), HeaderField::SpellingVariants),
    (Signature::class("lab"), HeaderField::Label),
    (Signature::class("epp-xref"), HeaderField::Level),
    (Signature::containing("badge"), HeaderField::Level),
];

/// Region tag inside a pronunciation.
pub const PRON_REGION: Signature = Signature::class("region");

/// Pronunciation text inside a pronunciation.
pub const PRON_TEXT: Signature = Signature::class("pron");

/// Runs of an irregular-forms or variant group.
pub const FORM_RUNS: &[(Signature, FormRun)] = &[
    (Signature::class("lab"), FormRun::Label),
    (Signature::one_of(&["inf", "v"]), FormRun::Form),
];

/// Sense wrapper.
pub const SENSE: Signature = Signature::class("dsense");

/// Sense header holding the guideword.
pub const SENSE_HEADER: Signature = Signature::one_of(&["dsense_h", "sense-head"]);

/// Guideword of a sense.
pub const GUIDEWORD: Signature = Signature::class("guideword");

/// Definition block: info, definition text, translation, examples.
pub const DEF_BLOCK: Signature = Signature::class("def-block");

/// Grammar codes, labels and level badge before a definition.
pub const DEF_INFO: Signature = Signature::class("def-info");

/// Definition text.
pub const DEF: Signature = Signature::class("def");

/// Body of a definition block.
pub const DEF_BODY: Signature = Signature::class("def-body");

/// Translation of a definition or an example.
pub const TRANSLATION: Signature = Signature::class("trans");

/// Example wrapper.
pub const EXAMPLE: Signature = Signature::class("examp");

/// Example sentence.
pub const EXAMPLE_SENTENCE: Signature = Signature::class("eg");

/// "More examples" accordion.
pub const MORE_EXAMPLES: Signature = Signature::class("daccord");

/// One sentence of the "more examples" accordion.
pub const MORE_EXAMPLES_ITEM: Signature = Signature::class("eg").with_tag("li");

/// Phrase block inside a sense.
pub const PHRASE_BLOCK: Signature = Signature::class("phrase-block");

/// Phrase block head.
pub const PHRASE_HEAD: Signature = Signature::class("phrase-head");

/// Phrase title.
pub const PHRASE_TITLE: Signature = Signature::class("phrase-title");

/// Run-on entry.
pub const RUNON: Signature = Signature::class("runon");

/// Run-on title line.
pub const RUNON_TITLE: Signature = Signature::one_of(&["runon-title", "runon-info"]);

/// Cross-reference group.
pub const XREF: Signature = Signature::class("xref").with_tag("div");

/// Cross-reference group kinds. Singular and plural class names are the
/// same group.
pub const XREF_KINDS: &[(Signature, XrefKind)] = &[
    (Signature::one_of(&["synonym", "synonyms"]), XrefKind::Synonyms),
    (Signature::one_of(&["see_also", "see-also"]), XrefKind::SeeAlso),
    (Signature::class("compare"), XrefKind::Compare),
    (
        Signature::one_of(&["opposite", "opposites", "antonym", "antonyms"]),
        XrefKind::Opposites,
    ),
    (
        Signature::one_of(&["related_word", "related_words"]),
        XrefKind::RelatedWords,
    ),
    (Signature::one_of(&["idiom", "idioms"]), XrefKind::Idioms),
    (
        Signature::one_of(&["phrasal_verb", "phrasal_verbs"]),
        XrefKind::PhrasalVerbs,
    ),
];

/// Linked term of a cross-reference group.
pub const XREF_TERM: Signature = Signature::class("x-h");

/// Runs of a definition.
pub const MEANING_RUNS: &[(Signature, RunKind)] = &[
    (Signature::tag("b"), RunKind::Highlight),
    (Signature::tag("i"), RunKind::Emphasis),
    (Signature::tag("em"), RunKind::Emphasis),
];

/// Runs of an example sentence.
pub const EXAMPLE_RUNS: &[(Signature, RunKind)] = &[
    (Signature::tag("b"), RunKind::Highlight),
    (Signature::class("lu"), RunKind::Highlight),
    (Signature::tag("i"), RunKind::Emphasis),
    (Signature::tag("em"), RunKind::Emphasis),
];

/// Noise: audio, images, icons, share and word-list widgets, scripts.
pub const SKIP: &[Signature] = &[
    Signature::one_of(&["daud", "dimg", "share", "dwl", "i"]),
    Signature::tag("script"),
    Signature::tag("style"),
    Signature::tag("noscript"),
    Signature::tag("img"),
    Signature::tag("amp-img"),
    Signature::tag("audio"),
];
