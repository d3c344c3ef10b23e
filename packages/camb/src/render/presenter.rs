//! Terminal presenter for render event streams.

use std::io::Write;

use console::Style as TermStyle;

use super::event::{RenderEvent, Style};
use crate::error::Result;

/// Writes render events to a terminal or any other writer.
///
/// The presenter maps styles to colors and nothing else; it never
/// interprets dictionary content.
#[derive(Debug, Clone, Copy)]
pub struct Presenter {
    colors: bool,
}

impl Presenter {
    /// Create a presenter. Without colors every fragment is written as is.
    #[must_use]
    pub fn new(colors: bool) -> Self {
        Self { colors }
    }

    /// Write events to `out`.
    ///
    /// # Errors
    /// Returns an error if writing fails.
    pub fn write<W: Write>(&self, events: &[RenderEvent], out: &mut W) -> Result<()> {
        for event in events {
            match event {
                RenderEvent::Text { content, style } if self.colors => {
                    write!(out, "{}", terminal_style(*style).apply_to(content))?;
                }
                RenderEvent::Text { content, .. } => write!(out, "{content}")?,
                RenderEvent::Newline | RenderEvent::SectionBreak => writeln!(out)?,
            }
        }
        out.flush()?;
        Ok(())
    }

    /// Render events to a string.
    ///
    /// # Errors
    /// Returns an error if formatting an event fails.
    pub fn render(&self, events: &[RenderEvent]) -> Result<String> {
        let mut buffer = Vec::new();
        self.write(events, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

/// Write events as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or writing fails.
pub fn write_json<W: Write>(events: &[RenderEvent], out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, events)?;
    writeln!(out)?;
    Ok(())
}

fn terminal_style(style: Style) -> TermStyle {
    let base = TermStyle::new();
    match style {
        Style::Plain | Style::Example => base,
        Style::Headword => base.bold().cyan(),
        Style::PartOfSpeech => base.green(),
        Style::Grammar | Style::Level => base.yellow(),
        Style::Region => base.bold(),
        Style::Pronunciation => base.dim(),
        Style::Label | Style::Inflection | Style::Variant => base.magenta(),
        Style::Guideword => base.bold().yellow(),
        Style::SenseNumber => base.bold(),
        Style::Meaning => base.white(),
        Style::Keyword | Style::SectionTitle => base.bold().blue(),
        Style::CrossRefTerm => base.underlined(),
        Style::Emphasis => base.italic(),
        Style::Highlight => base.bold(),
        Style::ExampleMarker => base.dim(),
        Style::Translation => base.cyan(),
        Style::Phrase => base.bold().green(),
        Style::Suggestion => base.yellow(),
    }
}
