//! Cache-key style slugs for file names.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::basename;

static UNSAFE_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9._-]").unwrap());

/// Slug of a file's final path segment.
///
/// Every character outside `[A-Za-z0-9._-]` becomes `_` and the result is
/// lowercased, so the output only ever contains `[a-z0-9._-]`.
pub fn fileslug(file: &str) -> String {
    UNSAFE_CHARS
        .replace_all(basename(file), "_")
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_slug(s: &str) -> bool {
        s.chars()
            .all(|c| matches!(c, 'a'..='z' | '0'..='9' | '.' | '_' | '-'))
    }

    #[test]
    fn test_fileslug() {
        assert_eq!(fileslug("/path/to/My Movie (2010).AVI"), "my_movie__2010_.avi");
        assert_eq!(fileslug("The.Movie-GROUP.mkv"), "the.movie-group.mkv");
    }

    #[test]
    fn test_fileslug_non_ascii() {
        assert_eq!(fileslug("Amélie.avi"), "am_lie.avi");
    }

    #[test]
    fn test_fileslug_empty() {
        assert_eq!(fileslug(""), "");
    }

    #[test]
    fn test_fileslug_idempotent_and_safe() {
        let inputs = [
            "/path/to/My Movie (2010).AVI",
            "Ærø & Straße [x264].mkv",
            "a/b/c/",
            "千と千尋の神隠し.mp4",
            "already_a-slug.txt",
            "  spaced  out  ",
        ];
        for input in inputs {
            let once = fileslug(input);
            assert!(is_slug(&once), "{once:?} from {input:?}");
            assert_eq!(fileslug(&once), once);
        }
    }
}
