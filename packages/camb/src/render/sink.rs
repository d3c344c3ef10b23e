//! Append-only event sink used by the extractors.

use super::event::{RenderEvent, Style};

/// Ordered collector of render events.
///
/// Extractors only append. Empty text is dropped and the line helpers never
/// produce two line ends in a row, so output stays stable no matter how
/// many optional fields an entry lacks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSink {
    events: Vec<RenderEvent>,
}

impl EventSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text fragment. Empty content is ignored.
    pub fn text(&mut self, content: impl Into<String>, style: Style) {
        let content = content.into();
        if content.is_empty() {
            return;
        }
        self.events.push(RenderEvent::Text { content, style });
    }

    /// Append plain connective text.
    pub fn plain(&mut self, content: impl Into<String>) {
        self.text(content, Style::Plain);
    }

    /// Append `width` spaces.
    pub fn indent(&mut self, width: usize) {
        if width > 0 {
            self.plain(" ".repeat(width));
        }
    }

    /// End the current line.
    pub fn newline(&mut self) {
        self.events.push(RenderEvent::Newline);
    }

    /// End the current line unless nothing has been written on it.
    pub fn ensure_newline(&mut self) {
        if !self.at_line_start() {
            self.newline();
        }
    }

    /// Append a section boundary.
    pub fn section_break(&mut self) {
        self.events.push(RenderEvent::SectionBreak);
    }

    /// Whether the next fragment starts a new line.
    #[must_use]
    pub fn at_line_start(&self) -> bool {
        matches!(
            self.events.last(),
            None | Some(RenderEvent::Newline | RenderEvent::SectionBreak)
        )
    }

    /// Whether the last text fragment ends with whitespace.
    #[must_use]
    pub fn ends_with_space(&self) -> bool {
        match self.events.last() {
            Some(RenderEvent::Text { content, .. }) => content.ends_with(' '),
            _ => true,
        }
    }

    /// Append another sink's events.
    pub fn append(&mut self, other: EventSink) {
        self.events.extend(other.events);
    }

    /// Whether no event was written.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Whether any text fragment was written.
    #[must_use]
    pub fn has_text(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, RenderEvent::Text { .. }))
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Borrow the events.
    #[must_use]
    pub fn events(&self) -> &[RenderEvent] {
        &self.events
    }

    /// Take the events.
    #[must_use]
    pub fn into_events(self) -> Vec<RenderEvent> {
        self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::to_plain_text;

    #[test]
    fn test_text_ignores_empty() {
        let mut sink = EventSink::new();
        sink.text("", Style::Meaning);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_ensure_newline() {
        let mut sink = EventSink::new();
        sink.ensure_newline();
        assert!(sink.is_empty());

        sink.text("a", Style::Meaning);
        sink.ensure_newline();
        sink.ensure_newline();
        assert_eq!(sink.len(), 2);
        assert!(sink.at_line_start());
    }

    #[test]
    fn test_indent() {
        let mut sink = EventSink::new();
        sink.indent(0);
        assert!(sink.is_empty());
        sink.indent(3);
        sink.text("b", Style::SenseNumber);
        assert_eq!(to_plain_text(sink.events()), "   b");
    }

    #[test]
    fn test_ends_with_space() {
        let mut sink = EventSink::new();
        assert!(sink.ends_with_space());
        sink.text("word", Style::Meaning);
        assert!(!sink.ends_with_space());
        sink.plain(" ");
        assert!(sink.ends_with_space());
    }

    #[test]
    fn test_append_and_has_text() {
        let mut first = EventSink::new();
        first.newline();
        assert!(!first.has_text());

        let mut second = EventSink::new();
        second.text("x", Style::Plain);
        first.append(second);

        assert!(first.has_text());
        assert_eq!(first.into_events().len(), 2);
    }
}
