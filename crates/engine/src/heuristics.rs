//! Surface-level text heuristics that steer the text score.

use std::ops::Range;

use once_cell::sync::Lazy;
use regex::Regex;

static CONTRACTIONS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(can't|won't|isn't|don't|I'm|you're)\b").expect("contraction pattern is valid")
});

static INFORMAL_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(yeah|nah|gonna|kinda|sorta|wanna)\b").expect("informal pattern is valid")
});

/// Sentence terminators. ASCII only.
const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Segments needed (strictly more than) to call the structure "varied".
const VARIED_SENTENCE_MIN_SEGMENTS: usize = 3;

/// The three booleans the text score is derived from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct TextSignals {
    pub varied_sentence_structure: bool,
    pub contractions: bool,
    pub informal_language: bool,
}

impl TextSignals {
    pub fn detect(text: &str) -> Self {
        Self {
            varied_sentence_structure: sentence_segments(text) > VARIED_SENTENCE_MIN_SEGMENTS,
            contractions: CONTRACTIONS.is_match(text),
            informal_language: INFORMAL_WORDS.is_match(text),
        }
    }

    /// Any conversational marker at all.
    pub fn is_casual(&self) -> bool {
        self.contractions || self.informal_language
    }

    /// Range the base score is drawn from.
    ///
    /// | varied | casual | range    |
    /// |--------|--------|----------|
    /// | no     | no     | [65, 95) |
    /// | any    | yes    | [20, 50) |
    /// | yes    | no     | [40, 70) |
    pub fn base_range(&self) -> Range<f64> {
        if self.is_casual() {
            20.0..50.0
        } else if self.varied_sentence_structure {
            40.0..70.0
        } else {
            65.0..95.0
        }
    }
}

/// Non-blank segments between runs of `.`, `!` and `?`.
fn sentence_segments(text: &str) -> usize {
    text.split(SENTENCE_TERMINATORS)
        .filter(|s| !s.trim().is_empty())
        .count()
}

/// Whitespace-delimited tokens. Blank input counts as zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Length of the raw input in Unicode scalar values.
pub fn character_count(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use deepauth_core::samples::{AI_SAMPLE_TEXT, HUMAN_SAMPLE_TEXT};

    use super::*;

    #[test]
    fn ai_sample_is_formal_and_varied() {
        let s = TextSignals::detect(AI_SAMPLE_TEXT);
        assert!(s.varied_sentence_structure, "four sentences should count as varied");
        assert!(!s.contractions);
        assert!(!s.informal_language);
        assert_eq!(s.base_range(), 40.0..70.0);
    }

    #[test]
    fn human_sample_is_casual() {
        let s = TextSignals::detect(HUMAN_SAMPLE_TEXT);
        assert!(s.contractions);
        assert!(s.informal_language);
        assert_eq!(s.base_range(), 20.0..50.0);
    }

    #[test]
    fn contraction_and_slang_pick_the_low_range() {
        let s = TextSignals::detect("I can't believe we're gonna ship this");
        assert!(s.contractions);
        assert!(s.informal_language);
        assert_eq!(s.base_range(), 20.0..50.0);
    }

    #[test]
    fn plain_short_text_picks_the_high_range() {
        let s = TextSignals::detect("The system processes data. It is efficient.");
        assert_eq!(s, TextSignals::default());
        assert_eq!(s.base_range(), 65.0..95.0);
    }

    #[test]
    fn matching_is_case_insensitive_and_whole_word() {
        assert!(TextSignals::detect("YEAH sure").informal_language);
        assert!(TextSignals::detect("DON'T do that").contractions);
        assert!(!TextSignals::detect("the nahuatl language").informal_language);
        assert!(!TextSignals::detect("wannabe").informal_language);
    }

    #[test]
    fn varied_needs_more_than_three_segments() {
        assert!(!TextSignals::detect("One. Two. Three.").varied_sentence_structure);
        assert!(TextSignals::detect("One. Two! Three? Four.").varied_sentence_structure);
        // Runs of terminators and blank segments do not count.
        assert!(!TextSignals::detect("One... Two!!! Three?! .  .").varied_sentence_structure);
    }

    #[test]
    fn empty_text_has_no_signals_and_no_words() {
        assert_eq!(TextSignals::detect(""), TextSignals::default());
        assert_eq!(word_count(""), 0);
        assert_eq!(character_count(""), 0);
    }

    #[test]
    fn whitespace_only_text_has_zero_words() {
        assert_eq!(word_count("   \n\t "), 0);
        assert_eq!(character_count("   \n\t "), 6);
    }

    #[test]
    fn character_count_is_raw_length_including_whitespace() {
        assert_eq!(character_count("\t\n  "), 4);
        assert_eq!(word_count("\t\n  "), 0);
        assert_eq!(character_count(" a "), 3);
    }

    #[test]
    fn counts_words_across_mixed_whitespace() {
        assert_eq!(word_count("  hello   world\nagain\t! "), 4);
        assert_eq!(character_count("héllo"), 5);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: word count equals the number of non-empty tokens after trimming.
            #[test]
            fn word_count_matches_token_count(words in proptest::collection::vec("[a-z]{1,8}", 0..30), sep in "[ \t\n]{1,3}") {
                let text = format!("{sep}{}{sep}", words.join(&sep));
                prop_assert_eq!(word_count(&text), words.len());
                prop_assert_eq!(character_count(&text), text.chars().count());
            }

            /// Property: any string is accepted and yields a range inside [20, 95).
            #[test]
            fn detect_is_total(text in ".{0,200}") {
                let range = TextSignals::detect(&text).base_range();
                prop_assert!(range.start >= 20.0 && range.end <= 95.0);
            }
        }
    }
}
