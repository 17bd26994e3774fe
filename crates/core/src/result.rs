//! Analysis result payloads.
//!
//! Results are created once per analysis and never mutated afterwards. The
//! JSON shape (camelCase keys) is what the UI and the report formatter consume.

use std::collections::HashSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::heatmap::Heatmap;
use crate::input::Modality;
use crate::label::Label;

/// How many explanations an image result carries.
pub const IMAGE_EXPLANATION_COUNT: RangeInclusive<usize> = 3..=5;

/// How many reasons a text result carries.
pub const TEXT_REASON_COUNT: RangeInclusive<usize> = 4..=5;

/// Round to one decimal place (half away from zero).
pub fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One factor behind a text verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextReason {
    pub factor: String,
    pub description: String,
    /// Per-factor confidence in percent, one decimal.
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMetadata {
    /// Wall-clock milliseconds from request start to completion.
    pub processing_time: u64,
    pub model_name: String,
    pub version: String,
    /// `"{width} × {height}px"`.
    pub image_size: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextMetadata {
    pub processing_time: u64,
    pub model_name: String,
    pub version: String,
    pub word_count: usize,
    pub character_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAnalysisResult {
    pub score: f64,
    pub label: Label,
    pub confidence: f64,
    pub explanations: Vec<String>,
    pub metadata: ImageMetadata,
    pub heatmap_data: Heatmap,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextAnalysisResult {
    pub score: f64,
    pub label: Label,
    pub confidence: f64,
    pub reasons: Vec<TextReason>,
    pub metadata: TextMetadata,
}

impl ImageAnalysisResult {
    /// Check the invariants a well-formed image result holds.
    pub fn validate(&self) -> CoreResult<()> {
        check_verdict(self.score, self.label, self.confidence, Modality::Image)?;
        check_entries(
            "explanations",
            self.explanations.iter().map(String::as_str),
            &IMAGE_EXPLANATION_COUNT,
        )?;
        Heatmap::from_rows(self.heatmap_data.rows().to_vec()).map(|_| ())
    }
}

impl TextAnalysisResult {
    /// Check the invariants a well-formed text result holds.
    pub fn validate(&self) -> CoreResult<()> {
        check_verdict(self.score, self.label, self.confidence, Modality::Text)?;
        check_entries(
            "reasons",
            self.reasons.iter().map(|r| r.factor.as_str()),
            &TEXT_REASON_COUNT,
        )?;
        if self.reasons.iter().any(|r| r.description.trim().is_empty()) {
            return Err(CoreError::invariant("reason descriptions must be non-empty"));
        }
        Ok(())
    }
}

fn check_verdict(score: f64, label: Label, confidence: f64, modality: Modality) -> CoreResult<()> {
    if !(0.0..=100.0).contains(&score) {
        return Err(CoreError::invariant(format!("score {score} outside [0, 100]")));
    }
    if !(0.0..=100.0).contains(&confidence) {
        return Err(CoreError::invariant(format!(
            "confidence {confidence} outside [0, 100]"
        )));
    }
    let expected = Label::classify(score, modality);
    if label != expected {
        return Err(CoreError::invariant(format!(
            "label {label} does not match score {score} (expected {expected})"
        )));
    }
    Ok(())
}

fn check_entries<'a>(
    what: &str,
    entries: impl Iterator<Item = &'a str>,
    bounds: &RangeInclusive<usize>,
) -> CoreResult<()> {
    let mut seen = HashSet::new();
    for entry in entries {
        if entry.trim().is_empty() {
            return Err(CoreError::invariant(format!("{what} contain an empty entry")));
        }
        if !seen.insert(entry) {
            return Err(CoreError::invariant(format!(
                "{what} contain duplicate entry {entry:?}"
            )));
        }
    }
    if !bounds.contains(&seen.len()) {
        return Err(CoreError::invariant(format!(
            "{what} has {} entries, expected {}..={}",
            seen.len(),
            bounds.start(),
            bounds.end()
        )));
    }
    Ok(())
}

/// Either kind of result, as held by the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnalysisResult {
    Image(ImageAnalysisResult),
    Text(TextAnalysisResult),
}

impl AnalysisResult {
    pub fn modality(&self) -> Modality {
        match self {
            AnalysisResult::Image(_) => Modality::Image,
            AnalysisResult::Text(_) => Modality::Text,
        }
    }

    pub fn score(&self) -> f64 {
        match self {
            AnalysisResult::Image(r) => r.score,
            AnalysisResult::Text(r) => r.score,
        }
    }

    pub fn label(&self) -> Label {
        match self {
            AnalysisResult::Image(r) => r.label,
            AnalysisResult::Text(r) => r.label,
        }
    }

    pub fn confidence(&self) -> f64 {
        match self {
            AnalysisResult::Image(r) => r.confidence,
            AnalysisResult::Text(r) => r.confidence,
        }
    }

    pub fn processing_time_ms(&self) -> u64 {
        match self {
            AnalysisResult::Image(r) => r.metadata.processing_time,
            AnalysisResult::Text(r) => r.metadata.processing_time,
        }
    }

    pub fn validate(&self) -> CoreResult<()> {
        match self {
            AnalysisResult::Image(r) => r.validate(),
            AnalysisResult::Text(r) => r.validate(),
        }
    }
}

impl From<ImageAnalysisResult> for AnalysisResult {
    fn from(value: ImageAnalysisResult) -> Self {
        Self::Image(value)
    }
}

impl From<TextAnalysisResult> for AnalysisResult {
    fn from(value: TextAnalysisResult) -> Self {
        Self::Text(value)
    }
}
