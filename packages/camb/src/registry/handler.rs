//! Element handler trait definition.

use scraper::ElementRef;

use super::types::{ElementType, ParseContext};
use crate::dom::element_children;
use crate::render::EventSink;

/// Function type for recursive processing of child elements.
pub type RecurseFn<'a> = dyn Fn(ElementRef<'a>, &ParseContext<'_>, &mut EventSink) + 'a;

/// Trait for element handlers.
///
/// A handler owns one dictionary construct. It appends the construct's
/// render events to the sink and receives a `recurse` function for the
/// children it does not handle itself.
pub trait ElementHandler: Send + Sync {
    /// Return the type classification of this element.
    fn element_type(&self) -> ElementType;

    /// Check if this handler can process the given element.
    ///
    /// Default implementation always returns true.
    fn can_handle(&self, _node: ElementRef<'_>, _context: &ParseContext<'_>) -> bool {
        true
    }

    /// Process the element.
    ///
    /// # Arguments
    /// * `node` - The element to process
    /// * `context` - Current parsing context
    /// * `sink` - Destination for render events
    /// * `recurse` - Function to call for recursive child processing
    fn handle<'a>(
        &self,
        node: ElementRef<'a>,
        context: &ParseContext<'_>,
        sink: &mut EventSink,
        recurse: &RecurseFn<'a>,
    );
}

/// Recurse into every element child of `node` in document order.
pub fn walk_children<'a>(
    node: ElementRef<'a>,
    context: &ParseContext<'_>,
    sink: &mut EventSink,
    recurse: &RecurseFn<'a>,
) {
    for child in element_children(node) {
        recurse(child, context, sink);
    }
}

/// Recurse into the element children of `node` that `keep` accepts.
pub fn walk_children_where<'a>(
    node: ElementRef<'a>,
    context: &ParseContext<'_>,
    sink: &mut EventSink,
    recurse: &RecurseFn<'a>,
    keep: impl Fn(ElementRef<'a>) -> bool,
) {
    for child in element_children(node).filter(|child| keep(*child)) {
        recurse(child, context, sink);
    }
}
