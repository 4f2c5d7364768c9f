//! Year re-insertion.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::blacklist::{NON_WORD, YEAR_PATTERN};
use crate::normalize::{Context, Stage};

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(^|{NON_WORD})({YEAR_PATTERN})({NON_WORD}|$)")).unwrap()
});

/// First boundary-delimited release year in `text`.
pub fn extract_year(text: &str) -> Option<&str> {
    YEAR_TOKEN
        .captures(text)
        .and_then(|caps| caps.get(2))
        .map(|m| m.as_str())
}

/// Appends ` (YYYY)` when filtering removed every year the file name had.
pub struct YearStage {
    _private: (),
}

impl YearStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for YearStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for YearStage {
    fn name(&self) -> &'static str {
        "year"
    }

    fn apply(&self, title: String, ctx: &Context<'_>) -> String {
        if !ctx.options.append_year || YEAR_TOKEN.is_match(&title) {
            return title;
        }

        match extract_year(ctx.name.file_name) {
            Some(year) => format!("{title} ({year})"),
            None => title,
        }
    }
}
