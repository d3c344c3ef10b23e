//! Extraction engine: per-construct extractors and the handlers of both
//! dictionary schemas.
//!
//! The shared extractors (header, meaning, example, cross reference, word
//! form, pronunciation) turn classified nodes into render events. The
//! per-source handlers decide which extractor owns which element and how
//! the ancestor context changes on the way down.

pub mod cambridge;
mod example;
mod forms;
mod header;
mod meaning;
mod pron;
mod runs;
pub mod webster;
mod xref;

pub use example::{emit_example, example_text_offset, space_runs};
pub use forms::{collect_form_runs, emit_forms, FORM_SEPARATORS};
pub use header::{
    collect_fields, compact_grammar, emit_fields, Field, HeaderRules, HEADER_SEPARATORS,
    INFO_SEPARATORS,
};
pub use meaning::{emit_meaning, emit_term};
pub use pron::{emit_prons, Pron};
pub use runs::{collect_runs, Run};
pub use xref::{collect_terms, emit_cognate, emit_xref_group};
