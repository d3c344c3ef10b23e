//! Navigation helpers over `scraper` element trees.
//!
//! The extraction core only reads the tree; none of these helpers mutate it.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Load markup into a navigable tree.
///
/// The HTML parser recovers from any input, so loading never fails.
#[must_use]
pub fn load_document(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Get the lowercase tag name of an element.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use camb::dom::{first_match, tag_name};
///
/// let doc = Html::parse_fragment(r#"<span class="hw">example</span>"#);
/// let span = first_match(doc.root_element(), "span").unwrap();
/// assert_eq!(tag_name(span), "span");
/// ```
pub fn tag_name<'a>(node: ElementRef<'a>) -> &'a str {
    node.value().name()
}

/// Iterate over the class tokens of an element.
pub fn class_tokens<'a>(node: ElementRef<'a>) -> impl Iterator<Item = &'a str> {
    node.value().classes()
}

/// Check whether an element carries a class token.
pub fn has_class(node: ElementRef<'_>, class: &str) -> bool {
    class_tokens(node).any(|token| token == class)
}

/// Get an attribute value.
pub fn attribute<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name)
}

/// Get the element children of a node, skipping text and comments.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use camb::dom::{element_children, first_match};
///
/// let doc = Html::parse_fragment("<div>text<b>1</b>more<i>2</i></div>");
/// let div = first_match(doc.root_element(), "div").unwrap();
/// assert_eq!(element_children(div).count(), 2);
/// ```
pub fn element_children<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.children().filter_map(ElementRef::wrap)
}

/// Find the first element child matching a predicate.
pub fn find_child<'a>(
    node: ElementRef<'a>,
    predicate: impl Fn(ElementRef<'a>) -> bool,
) -> Option<ElementRef<'a>> {
    element_children(node).find(|child| predicate(*child))
}

/// Find the first element child carrying a class token.
pub fn find_child_with_class<'a>(node: ElementRef<'a>, class: &str) -> Option<ElementRef<'a>> {
    find_child(node, |child| has_class(child, class))
}

/// Iterate over all element descendants of a node, excluding the node itself.
pub fn descendant_elements<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().skip(1).filter_map(ElementRef::wrap)
}

/// Find the first element descendant matching a predicate, in document order.
pub fn find_descendant<'a>(
    node: ElementRef<'a>,
    predicate: impl Fn(ElementRef<'a>) -> bool,
) -> Option<ElementRef<'a>> {
    descendant_elements(node).find(|child| predicate(*child))
}

/// Find the first element descendant carrying a class token.
pub fn find_descendant_with_class<'a>(
    node: ElementRef<'a>,
    class: &str,
) -> Option<ElementRef<'a>> {
    find_descendant(node, |child| has_class(child, class))
}

/// Get the next element sibling, skipping text nodes.
pub fn next_element_sibling<'a>(node: ElementRef<'a>) -> Option<ElementRef<'a>> {
    node.next_siblings().find_map(ElementRef::wrap)
}

/// Get the parent element.
pub fn parent_element<'a>(node: ElementRef<'a>) -> Option<ElementRef<'a>> {
    node.parent().and_then(ElementRef::wrap)
}

/// Collapse every whitespace run to a single space, keeping the ends.
#[must_use]
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Get the text content of a node with whitespace collapsed and trimmed.
///
/// # Examples
/// ```
/// use scraper::Html;
/// use camb::dom::{first_match, text_content};
///
/// let doc = Html::parse_fragment("<p>  an <b>odd</b>\n  example </p>");
/// let p = first_match(doc.root_element(), "p").unwrap();
/// assert_eq!(text_content(p), "an odd example");
/// ```
pub fn text_content(node: ElementRef<'_>) -> String {
    let raw: String = node.text().collect();
    collapse_whitespace(&raw).trim().to_string()
}

/// Parse a selector that is known to be valid at compile time.
///
/// # Panics
/// Panics if the selector is invalid; only call with literals.
#[allow(clippy::expect_used)] // Callers pass static selector literals
#[must_use]
pub fn static_selector(selector: &str) -> Selector {
    Selector::parse(selector).expect("valid selector")
}

/// Find the first descendant matching a CSS selector.
///
/// Returns `None` for invalid selectors as well as for no match.
pub fn first_match<'a>(node: ElementRef<'a>, selector: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(selector).ok()?;
    let found = node.select(&selector).next();
    found
}
