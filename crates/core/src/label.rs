//! Verdict labels and the score thresholds that produce them.

use serde::{Deserialize, Serialize};

use crate::input::Modality;

/// Scores at or above this are labelled AI-generated.
pub const AI_THRESHOLD: f64 = 70.0;

/// Scores at or below this are labelled human.
pub const HUMAN_THRESHOLD: f64 = 30.0;

/// Classification shown to the user.
///
/// The human verdict is worded per modality ("Created" for images, "Written"
/// for text); everything else is shared.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    #[serde(rename = "Likely AI-Generated")]
    LikelyAiGenerated,
    #[serde(rename = "Likely Human-Created")]
    LikelyHumanCreated,
    #[serde(rename = "Likely Human-Written")]
    LikelyHumanWritten,
    #[serde(rename = "Uncertain")]
    Uncertain,
}

impl Label {
    /// Pure function of the score: `>= 70` AI, `<= 30` human, otherwise uncertain.
    pub fn classify(score: f64, modality: Modality) -> Self {
        if score >= AI_THRESHOLD {
            Label::LikelyAiGenerated
        } else if score <= HUMAN_THRESHOLD {
            match modality {
                Modality::Image => Label::LikelyHumanCreated,
                Modality::Text => Label::LikelyHumanWritten,
            }
        } else {
            Label::Uncertain
        }
    }

    /// Decisive verdicts draw their confidence from the higher band.
    pub fn is_decisive(&self) -> bool {
        !matches!(self, Label::Uncertain)
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Label::LikelyAiGenerated)
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Label::LikelyHumanCreated | Label::LikelyHumanWritten)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::LikelyAiGenerated => "Likely AI-Generated",
            Label::LikelyHumanCreated => "Likely Human-Created",
            Label::LikelyHumanWritten => "Likely Human-Written",
            Label::Uncertain => "Uncertain",
        }
    }
}

impl core::fmt::Display for Label {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}
