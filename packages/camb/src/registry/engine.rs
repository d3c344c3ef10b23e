//! Parse engine that orchestrates element walking using the registry.

use scraper::ElementRef;

use super::core::ElementRegistry;
use super::types::ParseContext;
use crate::dom::element_children;
use crate::matcher::describe;
use crate::render::EventSink;

/// Engine that walks an entry subtree and dispatches elements to their
/// registered handlers.
///
/// Elements without a handler are logged at trace level and their children
/// are walked in their place, so layout wrappers the registry does not know
/// about never hide the constructs inside them.
pub struct ParseEngine {
    registry: ElementRegistry,
}

impl ParseEngine {
    /// Create a new engine with the given registry.
    #[must_use]
    pub fn new(registry: ElementRegistry) -> Self {
        Self { registry }
    }

    /// Get a reference to the underlying registry.
    #[must_use]
    pub fn registry(&self) -> &ElementRegistry {
        &self.registry
    }

    /// Walk an element tree recursively.
    ///
    /// # Arguments
    /// * `node` - The element to walk
    /// * `context` - Current parsing context
    /// * `sink` - Destination for render events
    pub fn walk(&self, node: ElementRef<'_>, context: &ParseContext<'_>, sink: &mut EventSink) {
        if self.registry.should_skip(node) {
            return;
        }

        let recurse = |child: ElementRef<'_>, ctx: &ParseContext<'_>, sink: &mut EventSink| {
            self.walk(child, ctx, sink);
        };

        if let Some(handler) = self.registry.get_handler(node, context) {
            tracing::trace!(
                element = %describe(node),
                kind = ?handler.element_type(),
                "Dispatching"
            );
            handler.handle(node, context, sink, &recurse);
            return;
        }

        tracing::trace!(element = %describe(node), "No handler, descending into children");
        for child in element_children(node) {
            recurse(child, context, sink);
        }
    }
}
