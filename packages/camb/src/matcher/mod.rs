//! Node matcher: pure classification of elements against fixed signatures.
//!
//! A [`Signature`] describes an element by tag, class tokens, id prefix and
//! an optional fixed `title` attribute. Per-source tables map signatures to
//! small closed enums; the first matching row wins, so tables list the more
//! specific signatures first.
//!
//! Matching never looks at text content.

pub mod cambridge;
mod kinds;
pub mod webster;

pub use kinds::*;

use scraper::ElementRef;

use crate::dom::{attribute, class_tokens, tag_name};

/// How the class attribute of an element must look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassMatch {
    /// Any class attribute, including none.
    Any,
    /// One exact token.
    Token(&'static str),
    /// At least one of several exact tokens (alternation).
    OneOf(&'static [&'static str]),
    /// Every listed token.
    AllOf(&'static [&'static str]),
    /// Some token contains the substring.
    Contains(&'static str),
}

impl ClassMatch {
    /// Check an element's class tokens.
    pub fn matches(&self, node: ElementRef<'_>) -> bool {
        match *self {
            Self::Any => true,
            Self::Token(token) => class_tokens(node).any(|c| c == token),
            Self::OneOf(tokens) => class_tokens(node).any(|c| tokens.contains(&c)),
            Self::AllOf(tokens) => tokens
                .iter()
                .all(|token| class_tokens(node).any(|c| c == *token)),
            Self::Contains(part) => class_tokens(node).any(|c| c.contains(part)),
        }
    }
}

/// Structural signature of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    /// Required tag name.
    pub tag: Option<&'static str>,

    /// Class requirement.
    pub class: ClassMatch,

    /// Required prefix of the `id` attribute.
    pub id_prefix: Option<&'static str>,

    /// Required exact `title` attribute.
    pub title: Option<&'static str>,
}

impl Signature {
    const fn base(class: ClassMatch) -> Self {
        Self {
            tag: None,
            class,
            id_prefix: None,
            title: None,
        }
    }

    /// Any element carrying `token`.
    #[must_use]
    pub const fn class(token: &'static str) -> Self {
        Self::base(ClassMatch::Token(token))
    }

    /// Any element carrying one of `tokens`.
    #[must_use]
    pub const fn one_of(tokens: &'static [&'static str]) -> Self {
        Self::base(ClassMatch::OneOf(tokens))
    }

    /// Any element carrying all of `tokens`.
    #[must_use]
    pub const fn all_of(tokens: &'static [&'static str]) -> Self {
        Self::base(ClassMatch::AllOf(tokens))
    }

    /// Any element with a class token containing `part`.
    #[must_use]
    pub const fn containing(part: &'static str) -> Self {
        Self::base(ClassMatch::Contains(part))
    }

    /// Any element with tag `tag`.
    #[must_use]
    pub const fn tag(tag: &'static str) -> Self {
        Self::base(ClassMatch::Any).with_tag(tag)
    }

    /// Any element whose id starts with `prefix`.
    #[must_use]
    pub const fn id_prefix(prefix: &'static str) -> Self {
        let mut signature = Self::base(ClassMatch::Any);
        signature.id_prefix = Some(prefix);
        signature
    }

    /// Additionally require a tag.
    #[must_use]
    pub const fn with_tag(mut self, tag: &'static str) -> Self {
        self.tag = Some(tag);
        self
    }

    /// Additionally require an exact `title` attribute.
    #[must_use]
    pub const fn with_title(mut self, title: &'static str) -> Self {
        self.title = Some(title);
        self
    }

    /// Check an element against this signature.
    pub fn matches(&self, node: ElementRef<'_>) -> bool {
        if let Some(tag) = self.tag {
            if tag_name(node) != tag {
                return false;
            }
        }
        if let Some(prefix) = self.id_prefix {
            if !attribute(node, "id").is_some_and(|id| id.starts_with(prefix)) {
                return false;
            }
        }
        if let Some(title) = self.title {
            if attribute(node, "title") != Some(title) {
                return false;
            }
        }
        self.class.matches(node)
    }
}

/// Look an element up in a signature table. First match wins.
pub fn classify<K: Copy>(table: &[(Signature, K)], node: ElementRef<'_>) -> Option<K> {
    table
        .iter()
        .find(|(signature, _)| signature.matches(node))
        .map(|(_, kind)| *kind)
}

/// Describe an element for log messages, e.g. `div.pr.dsense`.
pub fn describe(node: ElementRef<'_>) -> String {
    let mut out = tag_name(node).to_string();
    if let Some(id) = attribute(node, "id") {
        out.push('#');
        out.push_str(id);
    }
    for token in class_tokens(node) {
        out.push('.');
        out.push_str(token);
    }
    out
}
