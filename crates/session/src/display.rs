//! Small display helpers for result and input panels.

use serde::Serialize;

use deepauth_core::{AI_THRESHOLD, HUMAN_THRESHOLD};
use deepauth_engine::{character_count, word_count};

/// Colour family for a score badge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreTone {
    /// Likely AI.
    Alert,
    Caution,
    /// Likely human.
    Safe,
}

impl ScoreTone {
    pub fn for_score(score: f64) -> Self {
        if score >= AI_THRESHOLD {
            ScoreTone::Alert
        } else if score <= HUMAN_THRESHOLD {
            ScoreTone::Safe
        } else {
            ScoreTone::Caution
        }
    }
}

/// Live counter under the text box.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct TextStats {
    pub characters: usize,
    pub words: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            characters: character_count(text),
            words: word_count(text),
        }
    }
}

impl core::fmt::Display for TextStats {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} characters • {} words", self.characters, self.words)
    }
}
