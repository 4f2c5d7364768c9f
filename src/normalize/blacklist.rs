//! Blacklist table and its compiled matchers.
//!
//! Every entry is a regex fragment, spliced as-is into three boundary-aware
//! matchers. Fragments are not grouped before splicing, so an alternation in
//! a fragment (the year pattern) binds looser than the surrounding hyphen.

use once_cell::sync::Lazy;
use regex::Regex;

use super::Category;

/// Release year: 1940-1999 or 2000-2099. Never matches `1080` or `1920`.
pub const YEAR_PATTERN: &str = r"19[4-9][0-9]|20[0-9]{2}";

/// Any character outside `[A-Za-z0-9_]`.
pub(crate) const NON_WORD: &str = r"[^A-Za-z0-9_]";

// Release groups and site tags
const AUTHORS: &[&str] = &[
    "jamgood",
    "stv 2005 dvdrip xvid internal",
    "LiMiTED",
    "teste divxovore com",
    "done",
    "don",
    "dimension",
    "progress",
    "CLASSiC",
    "CtrlHD",
    "Asteroids",
    "esir",
    "dc",
    "Os Iluminados",
    "Legacy",
    "LinkoManija Net",
    "deity",
    "TEAM APEX",
    "bald",
    "KLAXXON",
    "YMG",
    "Dvl",
    "ill",
    "hv",
    "INTERNAL",
    "SEPTiC",
    "malibu",
    "ucr",
    "anarchy",
    "hnm",
    "sinners",
    "DiSSOLVE",
    "hls",
    "Mp3 Beef Stew",
    "tmg",
    "crf",
    "iwok",
    "PerfectionHD",
    "JUST4FUN TEAM",
];

const SUBS: &[&str] = &[
    "custom",
    "nlsubbed",
    "Subbed",
    "multisubs",
    "nl",
    "es",
    "eng",
    "dut",
    "ger",
    "fr",
];

const SOURCE: &[&str] = &[
    "dvdrip",
    "rerip",
    "HDDVDRip",
    "HDDVD",
    "xscr",
    "hdtv",
    "dvdscr",
    "dvd",
    "tc",
    "ts",
    "kvcd",
    "svcd",
    "vcd",
    "bluray",
    "repack",
    "r5",
];

const RELEASE: &[&str] = &[YEAR_PATTERN, "Directors Cut"];

const ENCODING: &[&str] = &[
    "divx", "xvid", "X264", "ac3", "dd5 1", "ttf", "dts", "192k", "196k", "128k", "320k",
];

const RESOLUTION: &[&str] = &[
    "pal", "ntsc", "1080p", "1080i", "hd1080", "720p", "720i", "1920", "1080", "720",
];

/// The raw patterns of a category, in application order.
pub fn patterns(category: Category) -> &'static [&'static str] {
    match category {
        Category::Authors => AUTHORS,
        Category::Subs => SUBS,
        Category::Source => SOURCE,
        Category::Release => RELEASE,
        Category::Encoding => ENCODING,
        Category::Resolution => RESOLUTION,
    }
}

/// The three removal matchers built from one blacklist entry.
#[derive(Debug)]
pub struct Matchers {
    pattern: &'static str,
    hyphen_prefixed: Regex,
    hyphen_suffixed: Regex,
    standalone: Regex,
}

impl Matchers {
    fn compile(pattern: &'static str) -> Self {
        let build = |re: String| Regex::new(&re).unwrap();

        Self {
            pattern,
            hyphen_prefixed: build(format!("(?i)(-{pattern})({NON_WORD}|$)")),
            hyphen_suffixed: build(format!("(?i)({pattern}-)({NON_WORD}|$)")),
            standalone: build(format!("(?i)(^|{NON_WORD})(-*{pattern})({NON_WORD}|$)")),
        }
    }

    /// The fragment these matchers were built from.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    /// Apply the three removals in order, each on the previous one's output.
    pub fn strip(&self, text: &str) -> String {
        let text = self.hyphen_prefixed.replace_all(text, "${2}");
        let text = self.hyphen_suffixed.replace_all(&text, "${2}");
        self.standalone.replace_all(&text, "${1}${3}").into_owned()
    }
}

static COMPILED: Lazy<Vec<Vec<Matchers>>> = Lazy::new(|| {
    Category::ALL
        .iter()
        .map(|category| {
            patterns(*category)
                .iter()
                .map(|pattern| Matchers::compile(pattern))
                .collect()
        })
        .collect()
});

/// Compiled matchers for a category, built once on first use.
pub fn matchers(category: Category) -> &'static [Matchers] {
    &COMPILED[category as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_with(category: Category, pattern: &str, text: &str) -> String {
        let m = matchers(category)
            .iter()
            .find(|m| m.pattern() == pattern)
            .unwrap();
        m.strip(text)
    }

    #[test]
    fn test_every_pattern_compiles() {
        for category in Category::ALL {
            assert_eq!(matchers(category).len(), patterns(category).len());
        }
    }

    #[test]
    fn test_standalone_removal_keeps_boundaries() {
        assert_eq!(strip_with(Category::Source, "dvdrip", "Movie DVDRip Xvid"), "Movie  Xvid");
    }

    #[test]
    fn test_hyphen_prefixed_removal() {
        assert_eq!(strip_with(Category::Authors, "DiSSOLVE", "Alien XviD-DiSSOLVE"), "Alien XviD");
    }

    #[test]
    fn test_hyphen_suffixed_removal() {
        assert_eq!(strip_with(Category::Encoding, "xvid", "Movie xvid- extra"), "Movie  extra");
    }

    #[test]
    fn test_attached_token_leaves_group_hyphen() {
        assert_eq!(strip_with(Category::Encoding, "X264", "Movie x264-GROUP"), "Movie -GROUP");
    }

    #[test]
    fn test_no_match_inside_words() {
        assert_eq!(strip_with(Category::Subs, "es", "Los Angeles"), "Los Angeles");
        assert_eq!(strip_with(Category::Source, "ts", "Plays Itself"), "Plays Itself");
    }

    #[test]
    fn test_literal_space_pattern() {
        assert_eq!(strip_with(Category::Encoding, "dd5 1", "Movie DD5 1 720p"), "Movie  720p");
        assert_eq!(strip_with(Category::Release, "Directors Cut", "Alien Directors Cut"), "Alien ");
    }

    #[test]
    fn test_year_pattern_strips_year_tokens() {
        assert_eq!(strip_with(Category::Release, YEAR_PATTERN, "Movie 2012 720p"), "Movie  720p");
        assert_eq!(strip_with(Category::Release, YEAR_PATTERN, "Movie 1979 Cut"), "Movie  Cut");
    }

    #[test]
    fn test_year_pattern_ignores_resolutions() {
        assert_eq!(strip_with(Category::Release, YEAR_PATTERN, "Movie 1080 720"), "Movie 1080 720");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(strip_with(Category::Source, "bluray", "Movie BLURAY"), "Movie ");
    }
}
