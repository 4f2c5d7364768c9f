//! Repair passes run after filtering: whitespace, release group, disc marker, stray dashes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{Context, Stage};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s\s+").unwrap());

// Scene release names end in `-GROUP`
static GROUP_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([A-Za-z0-9]+)$").unwrap());

/// Collapses whitespace runs to one space and trims both ends.
pub struct WhitespaceStage {
    _private: (),
}

impl WhitespaceStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for WhitespaceStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for WhitespaceStage {
    fn name(&self) -> &'static str {
        "whitespace"
    }

    fn apply(&self, title: String, _ctx: &Context<'_>) -> String {
        WHITESPACE_RUN.replace_all(&title, " ").trim().to_string()
    }
}

/// Drops a release-group tail left detached by the blacklist filter.
///
/// `Movie x264-GROUP` becomes `Movie -GROUP` once `x264` is stripped. The tail
/// is only dropped when it is exactly the `-GROUP` suffix of the original stem
/// and starts the string or follows a space, so hyphenated titles survive.
/// Whether it goes never depends on how much text precedes it.
pub struct ReleaseGroupStage {
    _private: (),
}

impl ReleaseGroupStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for ReleaseGroupStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ReleaseGroupStage {
    fn name(&self) -> &'static str {
        "release_group"
    }

    fn apply(&self, title: String, ctx: &Context<'_>) -> String {
        if !ctx.options.strip_release_group {
            return title;
        }

        let Some(tail) = GROUP_TAIL.find(ctx.name.stem) else {
            return title;
        };

        match title.strip_suffix(tail.as_str()) {
            Some(rest) if rest.is_empty() || rest.ends_with(' ') => rest.trim_end().to_string(),
            _ => title,
        }
    }
}

/// Drops a trailing `cdN`-style disc marker.
pub struct DiscStage {
    _private: (),
}

impl DiscStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for DiscStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DiscStage {
    fn name(&self) -> &'static str {
        "disc"
    }

    fn apply(&self, title: String, _ctx: &Context<'_>) -> String {
        let mut parts: Vec<&str> = title.split(' ').collect();
        let is_disc = parts
            .last()
            .is_some_and(|last| last.to_lowercase().starts_with("cd"));

        if !is_disc {
            return title;
        }
        parts.pop();
        parts.join(" ")
    }
}

/// Removes one stray trailing `-`, then one stray leading `-`.
///
/// Single pass: `Movie --` keeps one dash.
pub struct DashTrimStage {
    _private: (),
}

impl DashTrimStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for DashTrimStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for DashTrimStage {
    fn name(&self) -> &'static str {
        "dash_trim"
    }

    fn apply(&self, title: String, _ctx: &Context<'_>) -> String {
        let mut title = title;
        if let Some(rest) = title.strip_suffix('-') {
            title = rest.trim().to_string();
        }
        if let Some(rest) = title.strip_prefix('-') {
            title = rest.trim().to_string();
        }
        title
    }
}
