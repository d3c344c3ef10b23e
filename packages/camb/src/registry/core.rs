//! Element registry for mapping element signatures to handlers.

use scraper::ElementRef;

use super::handler::ElementHandler;
use super::types::ParseContext;
use crate::matcher::Signature;

/// Registry mapping element signatures to handlers.
///
/// Handlers are looked up in registration order and the first signature
/// that matches wins, so specific signatures must be registered before
/// general ones. Skip signatures take precedence over every handler.
pub struct ElementRegistry {
    handlers: Vec<(Signature, Box<dyn ElementHandler>)>,
    skip_signatures: Vec<Signature>,
}

impl ElementRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            skip_signatures: Vec::new(),
        }
    }

    /// Register a handler for a signature.
    pub fn register(&mut self, signature: Signature, handler: impl ElementHandler + 'static) {
        self.handlers.push((signature, Box::new(handler)));
    }

    /// Mark signatures as skip (don't process, emit nothing).
    pub fn skip(&mut self, signatures: impl IntoIterator<Item = Signature>) {
        self.skip_signatures.extend(signatures);
    }

    /// Get the appropriate handler for an element.
    ///
    /// Returns `None` if the element should be skipped or has no handler.
    pub fn get_handler(
        &self,
        node: ElementRef<'_>,
        context: &ParseContext<'_>,
    ) -> Option<&dyn ElementHandler> {
        if self.should_skip(node) {
            return None;
        }

        self.handlers
            .iter()
            .filter(|(signature, _)| signature.matches(node))
            .map(|(_, handler)| handler.as_ref())
            .find(|handler| handler.can_handle(node, context))
    }

    /// Check if an element should be skipped.
    #[must_use]
    pub fn should_skip(&self, node: ElementRef<'_>) -> bool {
        self.skip_signatures
            .iter()
            .any(|signature| signature.matches(node))
    }

    /// Check if a handler is registered for an element.
    #[must_use]
    pub fn has_handler(&self, node: ElementRef<'_>) -> bool {
        self.handlers
            .iter()
            .any(|(signature, _)| signature.matches(node))
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for ElementRegistry {
    fn default() -> Self {
        Self::new()
    }
}
