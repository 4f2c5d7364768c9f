//! Separator replacement and accent folding.

use unicode_normalization::char::decompose_canonical;

use crate::normalize::{Context, Stage};

/// Replaces `_` and `.` with spaces and folds accented letters to ASCII.
///
/// Starts from the file stem, so the extension never reaches later stages.
pub struct PreCleanStage {
    _private: (),
}

impl PreCleanStage {
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl Default for PreCleanStage {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for PreCleanStage {
    fn name(&self) -> &'static str {
        "preclean"
    }

    fn apply(&self, _title: String, ctx: &Context<'_>) -> String {
        let spaced = ctx.name.stem.replace('_', " ").replace('.', " ");
        fold_accents(&spaced)
    }
}

/// Reduce accented Latin letters to their base ASCII letter.
///
/// Characters with no Latin base (CJK, symbols) pass through untouched, and
/// ASCII is never rewritten, so `&` stays `&`.
pub fn fold_accents(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii() {
            out.push(c);
            continue;
        }
        if let Some(folded) = fold_ligature(c) {
            out.push(folded);
            continue;
        }

        let mut base = None;
        decompose_canonical(c, |d| {
            if base.is_none() {
                base = Some(d);
            }
        });
        match base {
            Some(b) if b.is_ascii_alphabetic() => out.push(b),
            _ => out.push(c),
        }
    }
    out
}

// Letters without a canonical decomposition, reduced to the first letter of their name
fn fold_ligature(c: char) -> Option<char> {
    match c {
        'æ' => Some('a'),
        'Æ' => Some('A'),
        'œ' => Some('o'),
        'Œ' => Some('O'),
        'ø' => Some('o'),
        'Ø' => Some('O'),
        'ß' => Some('s'),
        'ð' => Some('e'),
        'Ð' => Some('E'),
        'þ' => Some('t'),
        'Þ' => Some('T'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::NormalizeOptions;

    fn preclean(input: &str) -> String {
        let options = NormalizeOptions::default();
        let ctx = Context::new(input, &options);
        PreCleanStage::new().apply(String::new(), &ctx)
    }

    #[test]
    fn test_separators_become_spaces() {
        assert_eq!(preclean("The.Movie_Name.2012.mkv"), "The Movie Name 2012");
    }

    #[test]
    fn test_separate_passes() {
        assert_eq!(preclean("a_.b.avi"), "a  b");
    }

    #[test]
    fn test_path_and_extension_dropped() {
        assert_eq!(preclean("/media/in/Some_Film.avi"), "Some Film");
    }

    #[test]
    fn test_fold_accents() {
        assert_eq!(fold_accents("Amélie"), "Amelie");
        assert_eq!(fold_accents("Ça Ñandú"), "Ca Nandu");
        assert_eq!(fold_accents("Straße Ærø"), "Strase Aro");
    }

    #[test]
    fn test_fold_keeps_non_latin() {
        assert_eq!(fold_accents("千と千尋"), "千と千尋");
    }

    #[test]
    fn test_fold_keeps_ascii_punctuation() {
        assert_eq!(fold_accents("Fast & Furious <Uncut> \"Q\""), "Fast & Furious <Uncut> \"Q\"");
    }
}
