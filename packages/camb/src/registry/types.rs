//! Types for the element registry system.

use std::collections::BTreeSet;

use crate::types::Source;

/// Classification of handlers for processing strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    /// Entry and sense containers.
    Structural,
    /// Text-level constructs (definitions, examples, labels).
    Inline,
    /// Elements to ignore completely.
    Skip,
}

/// Nearest structurally significant ancestor of the node being walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ancestor {
    /// Directly inside an entry subtree.
    Entry,
    /// Inside a numbered sense block.
    SenseBlock,
    /// Inside a single sense.
    Sense,
    /// Inside a phrase block.
    PhraseBlock,
    /// Inside a run-on entry.
    RunOn,
    /// Inside an idiom or phrasal verb block.
    Idiom,
    /// Inside a cross-reference group.
    CrossReference,
}

/// Immutable record threaded through every recursive call.
///
/// Indentation of nested content depends on the label of a sense block
/// several levels up; carrying it here avoids walking back up the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncestorContext {
    /// Nearest significant ancestor.
    pub ancestor: Ancestor,

    /// Character width of the enclosing numbered label ("1" is 1, "10" is 2).
    pub label_width: usize,

    /// Whether the enclosing sense block numbers its senses with letters.
    pub lettered: bool,

    /// Column where nested content starts.
    pub indent: usize,
}

impl AncestorContext {
    /// Context at the root of an entry subtree.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            ancestor: Ancestor::Entry,
            label_width: 0,
            lettered: false,
            indent: 0,
        }
    }
}

impl Default for AncestorContext {
    fn default() -> Self {
        Self::root()
    }
}

/// Per-document state shared by every context of one extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentScope {
    /// Dictionary the document comes from.
    pub source: Source,

    /// Lowercased headwords of the document's own entries.
    pub headwords: BTreeSet<String>,

    /// Whether translations are rendered.
    pub translations: bool,
}

impl DocumentScope {
    /// Create a scope without headwords.
    #[must_use]
    pub fn new(source: Source) -> Self {
        Self {
            source,
            headwords: BTreeSet::new(),
            translations: false,
        }
    }

    /// Set the document headwords. Words are lowercased and trimmed.
    #[must_use]
    pub fn with_headwords(mut self, words: impl IntoIterator<Item = impl AsRef<str>>) -> Self {
        self.headwords = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        self
    }

    /// Enable or disable translations.
    #[must_use]
    pub fn with_translations(mut self, translations: bool) -> Self {
        self.translations = translations;
        self
    }

    /// Check whether a term is one of the document's own headwords.
    #[must_use]
    pub fn is_headword(&self, term: &str) -> bool {
        self.headwords.contains(&term.trim().to_lowercase())
    }
}

/// Context passed through parsing operations.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'s> {
    /// Document-wide scope.
    pub scope: &'s DocumentScope,

    /// Structural position.
    pub ancestor: AncestorContext,
}

impl<'s> ParseContext<'s> {
    /// Create a root context for one entry subtree.
    #[must_use]
    pub fn new(scope: &'s DocumentScope) -> Self {
        Self {
            scope,
            ancestor: AncestorContext::root(),
        }
    }

    /// Derive a context for a child construct.
    #[must_use]
    pub fn within(mut self, ancestor: Ancestor) -> Self {
        self.ancestor.ancestor = ancestor;
        self
    }

    /// Derive a context for the senses of a sense block.
    #[must_use]
    pub fn with_label_width(mut self, label_width: usize, lettered: bool) -> Self {
        self.ancestor.label_width = label_width;
        self.ancestor.lettered = lettered;
        self
    }

    /// Derive a context whose nested content starts at `indent`.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.ancestor.indent = indent;
        self
    }

    /// Column where nested content starts.
    #[must_use]
    pub fn indent(&self) -> usize {
        self.ancestor.indent
    }
}
