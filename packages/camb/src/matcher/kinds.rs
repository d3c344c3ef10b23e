//! Closed classification enums shared by both dictionary schemas.

/// Kind of an entry subtree located by the assembler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A headword entry, usually one part of speech.
    Lexical,
    /// An idiom block.
    Idiom,
    /// A phrasal verb block.
    PhrasalVerb,
    /// A page-level cross-reference group.
    CrossReference,
}

impl EntryKind {
    /// Whether the subtree counts as dictionary content on its own.
    ///
    /// A page holding nothing but cross-reference groups has no entry.
    #[must_use]
    pub fn is_lexical(self) -> bool {
        !matches!(self, Self::CrossReference)
    }
}

/// Field of an entry header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderField {
    /// Entry headword.
    Headword,
    /// Run-on headword.
    RunOn,
    /// Part of speech.
    PartOfSpeech,
    /// Suffix label standing in for the part of speech.
    Suffix,
    /// Grammar code.
    Grammar,
    /// One pronunciation; consecutive ones form a single field.
    Pronunciation,
    /// Inflected or irregular forms.
    Forms,
    /// Variant forms.
    Variants,
    /// Spelling variants.
    SpellingVariants,
    /// Usage label.
    Label,
    /// Vocabulary level badge.
    Level,
}

/// Run of a word-form group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormRun {
    /// Grammar label ("plural", "past tense").
    Label,
    /// Joiner between alternatives ("or", "also").
    Joiner,
    /// The form itself.
    Form,
}

/// Text run inside a definition or example.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunKind {
    /// Ordinary text.
    Plain,
    /// Container whose own text is an uppercase keyword ("see also").
    Keyword,
    /// Term rendered uppercase.
    UpperTerm,
    /// Term rendered lowercase.
    LowerTerm,
    /// Italic run.
    Emphasis,
    /// Bold run.
    Highlight,
    /// Linked term; highlighted when it is one of the document's headwords.
    Link,
    /// Bold definition colon.
    Colon,
    /// Not rendered.
    Skip,
}

impl RunKind {
    /// Whether the run is an emphasized leaf for the example spacing rule.
    #[must_use]
    pub fn is_emphasis(self) -> bool {
        matches!(self, Self::Emphasis | Self::Highlight)
    }
}

/// Kind of a cross-reference group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefKind {
    Synonyms,
    SeeAlso,
    Compare,
    Opposites,
    RelatedWords,
    Idioms,
    PhrasalVerbs,
    Phrases,
}

/// How a cross-reference group lays out its terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XrefLayout {
    /// Title and terms on one line, joined with `, `.
    Inline,
    /// Title line, then one term per line.
    List,
}

impl XrefKind {
    /// Group name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Synonyms => "synonyms",
            Self::SeeAlso => "see also",
            Self::Compare => "compare",
            Self::Opposites => "opposites",
            Self::RelatedWords => "related words",
            Self::Idioms => "idioms",
            Self::PhrasalVerbs => "phrasal verbs",
            Self::Phrases => "phrases",
        }
    }

    /// Group title as rendered.
    #[must_use]
    pub fn title(self) -> String {
        self.name().to_uppercase()
    }

    /// Layout of the group.
    #[must_use]
    pub fn layout(self) -> XrefLayout {
        match self {
            Self::Idioms | Self::PhrasalVerbs | Self::Phrases => XrefLayout::List,
            _ => XrefLayout::Inline,
        }
    }
}

/// Numbering scheme of a sense label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberingScheme {
    /// "1"
    NumericOnly,
    /// "1 a"
    NumberLetter,
    /// "b", aligned under the letter of "1 a"
    LetterOnly,
    /// "(2)", aligned under the first sub-number
    SubNumbered,
    /// "1 (1)"
    NumberSub,
    /// "b (1)"
    LetterSub,
    /// No label
    Unnumbered,
}

/// Field of a sense body, used for separator lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SenseField {
    /// The sense label.
    Number,
    /// Sense-level label ("chiefly British", "[count]").
    Label,
    /// Definition text.
    Definition,
    /// Anything else in the sense body.
    Other,
}
