//! Bracketed annotation removal.

use crate::normalize::{Context, Stage};

/// Removes `(...)` spans, then `[...]` spans.
pub struct BracketStage {
    _private: (),
}

impl BracketStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for BracketStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for BracketStage {
    fn name(&self) -> &'static str {
        "brackets"
    }

    fn apply(&self, title: String, _ctx: &Context<'_>) -> String {
        let title = strip_spans(title, '(', ')');
        strip_spans(title, '[', ']')
    }
}

/// Repeatedly remove the first complete `open ... close` span.
///
/// A span runs from the first `open` to the first `close` after it. Unmatched
/// delimiters are left in place.
pub fn strip_spans(mut text: String, open: char, close: char) -> String {
    while let Some(range) = first_span(&text, open, close) {
        text.replace_range(range, "");
    }
    text
}

fn first_span(text: &str, open: char, close: char) -> Option<std::ops::Range<usize>> {
    let start = text.find(open)?;
    let inner = start + open.len_utf8();
    let end = inner + text[inner..].find(close)? + close.len_utf8();
    Some(start..end)
}
