//! Final presentation: extension suffix and title case.

use crate::normalize::{Context, Stage};

/// Appends `.ext` (lowercased) when enabled and the input had an extension.
pub struct ExtensionStage {
    _private: (),
}

impl ExtensionStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for ExtensionStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ExtensionStage {
    fn name(&self) -> &'static str {
        "extension"
    }

    fn apply(&self, title: String, ctx: &Context<'_>) -> String {
        match ctx.name.extension {
            Some(ext) if ctx.options.append_extension && !ext.is_empty() => {
                format!("{title}.{}", ext.to_lowercase())
            }
            _ => title,
        }
    }
}

/// Uppercases the first letter of every whitespace-delimited word.
pub struct TitleCaseStage {
    _private: (),
}

impl TitleCaseStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for TitleCaseStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for TitleCaseStage {
    fn name(&self) -> &'static str {
        "title_case"
    }

    fn apply(&self, title: String, _ctx: &Context<'_>) -> String {
        title_case(&title)
    }
}

/// Uppercase each word's first character, leaving the rest untouched.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut word_start = true;
    for c in text.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}
