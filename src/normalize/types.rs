//! Core types for the normalization pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named group of blacklist patterns.
///
/// The declaration order here is the order categories are applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Authors,
    Subs,
    Source,
    Release,
    Encoding,
    Resolution,
}

impl Category {
    /// Every category, in application order.
    pub const ALL: [Category; 6] = [
        Category::Authors,
        Category::Subs,
        Category::Source,
        Category::Release,
        Category::Encoding,
        Category::Resolution,
    ];

    /// Get the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Authors => "Authors",
            Category::Subs => "Subs",
            Category::Source => "Source",
            Category::Release => "Release",
            Category::Encoding => "Encoding",
            Category::Resolution => "Resolution",
        }
    }

    /// Parse from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "authors" => Some(Category::Authors),
            "subs" => Some(Category::Subs),
            "source" => Some(Category::Source),
            "release" => Some(Category::Release),
            "encoding" => Some(Category::Encoding),
            "resolution" => Some(Category::Resolution),
            _ => None,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key that enables every category at once.
pub const WILDCARD: &str = "*";

/// The set of enabled blacklist categories.
///
/// A category is active when it is enabled by name or when the wildcard is set.
/// Turning a single category off therefore has no effect while the wildcard is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySet {
    wildcard: bool,
    enabled: [bool; 6],
}

impl CategorySet {
    /// Every category enabled through the wildcard.
    pub fn all() -> Self {
        Self {
            wildcard: true,
            enabled: [false; 6],
        }
    }

    /// No category enabled.
    pub fn none() -> Self {
        Self {
            wildcard: false,
            enabled: [false; 6],
        }
    }

    /// Only the given categories.
    pub fn only(categories: &[Category]) -> Self {
        let mut set = Self::none();
        for category in categories {
            set.enabled[category.index()] = true;
        }
        set
    }

    /// Every category except the given ones.
    pub fn all_except(categories: &[Category]) -> Self {
        let mut set = Self {
            wildcard: false,
            enabled: [true; 6],
        };
        for category in categories {
            set.enabled[category.index()] = false;
        }
        set
    }

    /// Build from `name -> enabled` flags.
    ///
    /// Returns the set and the keys that named no known category.
    pub fn from_flags<'a, I>(flags: I) -> (Self, Vec<&'a str>)
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut set = Self::none();
        let mut unknown = Vec::new();

        for (key, on) in flags {
            if key == WILDCARD {
                set.wildcard = on;
            } else if let Some(category) = Category::from_str(key) {
                set.enabled[category.index()] = on;
            } else {
                unknown.push(key);
            }
        }

        (set, unknown)
    }

    /// Enable or disable one category by name.
    pub fn set(&mut self, category: Category, on: bool) {
        self.enabled[category.index()] = on;
    }

    /// Enable or disable the wildcard.
    pub fn set_wildcard(&mut self, on: bool) {
        self.wildcard = on;
    }

    /// Whether the category's blacklist is applied.
    pub fn is_enabled(&self, category: Category) -> bool {
        self.wildcard || self.enabled[category.index()]
    }

    /// The active categories, in application order.
    pub fn active(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::all()
    }
}

/// Options controlling a normalization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeOptions {
    /// Re-append a year found in the file name when filtering removed it.
    pub append_year: bool,
    /// Suffix the lowercased original extension.
    pub append_extension: bool,
    /// Drop a `-GROUP` tail left detached by the blacklist filter.
    pub strip_release_group: bool,
    /// Blacklist categories to apply.
    pub categories: CategorySet,
}

impl Default for NormalizeOptions {
    fn default() -> Self {
        Self {
            append_year: true,
            append_extension: false,
            strip_release_group: true,
            categories: CategorySet::all(),
        }
    }
}

/// A file name split into the parts the stages care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitName<'a> {
    /// Final path segment, extension included.
    pub file_name: &'a str,
    /// File name without the extension.
    pub stem: &'a str,
    /// Text after the last `.`, if any.
    pub extension: Option<&'a str>,
}

impl<'a> SplitName<'a> {
    /// Split a raw input (optionally a full path).
    pub fn parse(input: &'a str) -> Self {
        let file_name = basename(input);
        match file_name.rsplit_once('.') {
            Some((stem, extension)) => Self {
                file_name,
                stem,
                extension: Some(extension),
            },
            None => Self {
                file_name,
                stem: file_name,
                extension: None,
            },
        }
    }
}

/// Final path segment, ignoring trailing separators.
pub fn basename(path: &str) -> &str {
    let trimmed = path.trim_end_matches(['/', '\\']);
    trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
}

/// Everything a stage may read besides the working string.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
    pub name: SplitName<'a>,
    pub options: &'a NormalizeOptions,
}

impl<'a> Context<'a> {
    pub fn new(input: &'a str, options: &'a NormalizeOptions) -> Self {
        Self {
            name: SplitName::parse(input),
            options,
        }
    }
}

/// Output of a single stage, recorded by [`super::Pipeline::trace`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageTrace {
    pub stage: &'static str,
    pub output: String,
}
