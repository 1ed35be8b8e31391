//! `jigsaw-segmenter` turns Latin-alphabet text into Jigsaw words and
//! syllables.
//!
//! Each space-delimited token becomes a [Word]. Inside a word, every
//! consonant claims at most one following vowel, a bare vowel gets an
//! implicit glottal onset, and a trailing `!` marks the syllable before it
//! as stressed. A `!` with no syllable before it is read as a consonant
//! code of its own, which the glyph table does not know:
//!
//! ```
//! use jigsaw_segmenter::segment;
//!
//! let words = segment("aloha ke!yiki");
//! let first: Vec<String> = words[0].iter().map(ToString::to_string).collect();
//! assert_eq!(first, ["?a", "lo", "ha"]);
//! assert!(words[1].syllables[0].stressed);
//! ```

use std::sync::LazyLock;

use jigsaw_core::{GLOTTAL, ROLLED_R, STRESS, Syllable, Word};
use log::trace;
use regex::Regex;

/// One syllable unit followed by an optional stress marker.
static UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([aeiou]|R[aeiou]?|\?[aeiou]?|[^aeiou][aeiou]?)(!?)")
        .expect("syllable pattern is valid")
});

/// Drop everything but ASCII letters, `?`, `!` and spaces, and lowercase
/// every letter except the rolled R.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|&c| c.is_ascii_alphabetic() || matches!(c, GLOTTAL | STRESS | ' '))
        .map(|c| match c {
            ROLLED_R => c,
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Split text into words, and words into syllables.
///
/// Every space separates two words, so consecutive spaces (or text that
/// normalizes to nothing) yield empty words. Empty words still occupy a
/// column when rendered.
pub fn segment(text: &str) -> Vec<Word> {
    normalize(text).split(' ').map(segment_word).collect()
}

/// Matched units of a normalized word, each with its stress flag.
///
/// A unit that is only `!` is stress with nothing to attach to and is
/// dropped. A `!` that starts a longer unit stays in it as a consonant code.
fn units(word: &str) -> impl Iterator<Item = (&str, bool)> {
    UNIT.captures_iter(word).filter_map(|caps| {
        let unit = caps.get(1)?.as_str();
        let stressed = caps.get(2).is_some_and(|m| !m.as_str().is_empty());
        (unit.strip_prefix(STRESS) != Some("")).then_some((unit, stressed))
    })
}

/// Split a single normalized word into syllables.
pub fn segment_word(word: &str) -> Word {
    let syllables: Word = units(word)
        .map(|(unit, stressed)| {
            let mut syllable = Syllable::from_unit(unit, stressed);
            if syllable.is_vowel_initial() {
                syllable.consonant.push(GLOTTAL);
            }
            syllable
        })
        .collect();

    trace!("segmented {word:?} into {} syllables", syllables.len());
    syllables
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown(word: &Word) -> Vec<String> {
        word.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn vowel_initial_words_get_a_glottal_onset() {
        let words = segment("aloha");
        assert_eq!(words.len(), 1);
        let first = &words[0].syllables[0];
        assert_eq!(first.consonant, "?");
        assert_eq!(first.vowel, "a");
        assert_eq!(shown(&words[0]), ["?a", "lo", "ha"]);
    }

    #[test]
    fn every_bare_vowel_gets_its_own_onset() {
        assert_eq!(shown(&segment_word("aei")), ["?a", "?e", "?i"]);
    }

    #[test]
    fn stress_marks_previous_syllable_without_taking_a_row() {
        let word = segment_word("ke!yiki");
        assert_eq!(shown(&word), ["ke!", "yi", "ki"]);
        let stress: Vec<bool> = word.iter().map(|s| s.stressed).collect();
        assert_eq!(stress, [true, false, false]);
        assert!(word.iter().all(|s| !s.vowel.contains(STRESS)));
    }

    #[test]
    fn leading_stress_marker_is_kept_as_a_consonant_code() {
        assert_eq!(segment_word("!a").syllables, [Syllable::new("!", "a", false)]);
        assert_eq!(shown(&segment_word("k!!a")), ["k!", "!a"]);
        assert_eq!(shown(&segment_word("a!!e")), ["?a!", "!e"]);
    }

    #[test]
    fn bare_stress_markers_are_dropped() {
        assert!(segment_word("!!").is_empty());
        assert!(segment_word("!").is_empty());
        assert_eq!(shown(&segment_word("k!!")), ["k!"]);
        assert_eq!(shown(&segment_word("k!!!")), ["k!"]);
    }

    #[test]
    fn stressed_bare_vowel_keeps_glottal_onset() {
        let word = segment_word("e!");
        assert_eq!(word.syllables, [Syllable::new("?", "e", true)]);
    }

    #[test]
    fn consonant_clusters_split_into_vowelless_syllables() {
        assert_eq!(shown(&segment_word("world")), ["wo", "r", "l", "d"]);
        assert_eq!(shown(&segment_word("sim")), ["si", "m"]);
    }

    #[test]
    fn rolled_r_keeps_its_case() {
        assert_eq!(normalize("Rar RAR"), "Rar RaR");
        let word = segment_word("Raru");
        assert_eq!(word.syllables[0], Syllable::new("R", "a", false));
        assert_eq!(word.syllables[1], Syllable::new("r", "u", false));
    }

    #[test]
    fn glottal_marker_claims_a_vowel() {
        assert_eq!(shown(&segment_word("?o?")), ["?o", "?"]);
    }

    #[test]
    fn normalize_strips_unsupported_characters() {
        assert_eq!(normalize("Hél-lo, wor1d?!"), "hllo word?!");
        assert_eq!(normalize("\tab\ncd"), "abcd");
    }

    #[test]
    fn spaces_always_delimit_columns() {
        assert_eq!(segment("").len(), 1);
        assert!(segment("")[0].is_empty());

        let words = segment("pa  ta");
        assert_eq!(words.len(), 3);
        assert!(words[1].is_empty());

        let words = segment("123 ka");
        assert_eq!(words.len(), 2);
        assert!(words[0].is_empty());
    }

    /// Rebuilding each word from its syllables gives back the normalized
    /// word, once the onsets inserted before bare-vowel units are removed.
    #[test]
    fn syllables_account_for_every_character() {
        let samples = [
            "aloha",
            "ke!yiki",
            "Hello World",
            "strength",
            "Rakiu!e",
            "zz top!",
            "oiaue",
            "jigsaw writer",
            "mo! ni! ka!",
            "!a k!!a",
            "?a?o! ?",
            "a!!e",
            "?!u",
        ];
        for sample in samples {
            let normalized = normalize(sample);
            for (word, source) in segment(sample).iter().zip(normalized.split(' ')) {
                let units: Vec<(&str, bool)> = units(source).collect();
                assert_eq!(word.len(), units.len(), "while segmenting {sample:?}");

                let rebuilt: String = word
                    .iter()
                    .zip(&units)
                    .map(|(syllable, (unit, _))| {
                        let inserted = unit.starts_with(jigsaw_core::is_vowel);
                        let shown = syllable.to_string();
                        match inserted {
                            true => shown[GLOTTAL.len_utf8()..].to_string(),
                            false => shown,
                        }
                    })
                    .collect();
                assert_eq!(rebuilt, source, "while segmenting {sample:?}");
            }
        }
    }

    #[test]
    fn unknown_letters_pass_through_unchanged() {
        let word = segment_word("xqv");
        assert_eq!(shown(&word), ["x", "q", "v"]);
    }
}
