//! Table-driven trailing separators.
//!
//! The dictionaries lay fields out so that the text after a field depends on
//! whether a next structural sibling exists and what it is: a headword is
//! followed by a space when a part of speech comes next and by a line end
//! when the pronunciations come next. Each construct keeps those rules in a
//! [`SeparatorTable`] instead of scattering conditionals.

use super::sink::EventSink;

/// Text placed after a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Nothing.
    Nothing,
    /// A single space.
    Space,
    /// End of line.
    Newline,
    /// Literal text.
    Text(&'static str),
}

impl Separator {
    /// Write the separator.
    pub fn emit(self, sink: &mut EventSink) {
        match self {
            Self::Nothing => {}
            Self::Space => sink.plain(" "),
            Self::Newline => sink.ensure_newline(),
            Self::Text(text) => sink.plain(text),
        }
    }
}

/// What follows the current field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Next<K> {
    /// A sibling of the given kind.
    Is(K),
    /// No further sibling.
    End,
    /// Any sibling, or none.
    Any,
}

impl<K: PartialEq> Next<K> {
    fn accepts(&self, next: Option<&K>) -> bool {
        match (self, next) {
            (Self::Any, _) => true,
            (Self::End, None) => true,
            (Self::Is(expected), Some(actual)) => expected == actual,
            _ => false,
        }
    }
}

/// Ordered `{current, next} → separator` rules with a default.
#[derive(Debug)]
pub struct SeparatorTable<K: 'static> {
    rules: &'static [(K, Next<K>, Separator)],
    default: Separator,
}

impl<K: PartialEq + Copy> SeparatorTable<K> {
    /// Create a table. The first matching rule wins.
    #[must_use]
    pub const fn new(rules: &'static [(K, Next<K>, Separator)], default: Separator) -> Self {
        Self { rules, default }
    }

    /// Find the separator after `current` when `next` follows.
    #[must_use]
    pub fn lookup(&self, current: K, next: Option<K>) -> Separator {
        self.rules
            .iter()
            .find(|(kind, expected, _)| *kind == current && expected.accepts(next.as_ref()))
            .map_or(self.default, |(_, _, separator)| *separator)
    }
}
