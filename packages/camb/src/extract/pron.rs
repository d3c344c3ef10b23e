//! Pronunciation extractor.

use crate::render::{EventSink, Style};

/// One pronunciation string and the region it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pron {
    pub region: Option<String>,
    pub text: String,
}

impl Pron {
    #[must_use]
    pub fn new(region: Option<&str>, text: impl Into<String>) -> Self {
        Self {
            region: region
                .map(str::trim)
                .filter(|region| !region.is_empty())
                .map(str::to_uppercase),
            text: text.into(),
        }
    }
}

/// Emit pronunciations grouped by region.
///
/// Consecutive pronunciations of the same region form one group, joined
/// with `, ` and prefixed by the region tag. A group without region gets no
/// tag, so a single unlabeled group renders as the bare pronunciation.
/// `wrap` surrounds each group, e.g. the backslashes of Merriam-Webster.
pub fn emit_prons(prons: &[Pron], wrap: Option<&str>, sink: &mut EventSink) {
    let groups = group_by_region(prons);
    for (index, (region, texts)) in groups.iter().enumerate() {
        if index > 0 {
            sink.plain(" ");
        }
        if let Some(region) = region {
            sink.text(*region, Style::Region);
            sink.plain(" ");
        }
        let joined = texts.join(", ");
        match wrap {
            Some(mark) => sink.text(format!("{mark}{joined}{mark}"), Style::Pronunciation),
            None => sink.text(joined, Style::Pronunciation),
        }
    }
}

fn group_by_region(prons: &[Pron]) -> Vec<(Option<&str>, Vec<&str>)> {
    let mut groups: Vec<(Option<&str>, Vec<&str>)> = Vec::new();
    for pron in prons {
        let text = pron.text.trim();
        if text.is_empty() {
            continue;
        }
        let region = pron.region.as_deref();
        match groups.last_mut() {
            Some((last, texts)) if *last == region => texts.push(text),
            _ => groups.push((region, vec![text])),
        }
    }
    groups
}
