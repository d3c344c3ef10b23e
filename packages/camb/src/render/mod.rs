//! Render event stream and its presentation.
//!
//! Extractors append [`RenderEvent`]s to an [`EventSink`]; the
//! [`Presenter`] turns the finished stream into terminal output.

mod event;
pub mod presenter;
mod separator;
mod sink;

pub use event::{to_plain_text, RenderEvent, Style};
pub use presenter::{write_json, Presenter};
pub use separator::{Next, Separator, SeparatorTable};
pub use sink::EventSink;
