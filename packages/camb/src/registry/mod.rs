//! Element registry system for signature-dispatched extraction.
//!
//! Each dictionary schema registers one handler per construct it knows
//! (entry header, sense, definition, example, cross-reference group). The
//! engine walks an entry subtree and dispatches every element to the first
//! handler whose signature matches; unknown wrappers are walked through.

mod core;
mod engine;
mod handler;
mod types;

pub use core::ElementRegistry;
pub use engine::ParseEngine;
pub use handler::{walk_children, walk_children_where, ElementHandler, RecurseFn};
pub use types::{Ancestor, AncestorContext, DocumentScope, ElementType, ParseContext};
