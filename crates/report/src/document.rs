//! Report documents.
//!
//! A report is the analysis verdict plus enough context to know what was
//! analyzed and when. It is pretty-printed JSON (2-space indentation) so it
//! reads fine in a text editor and parses back losslessly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use deepauth_core::{
    AnalysisResult, ImageAnalysisResult, ImageMetadata, Label, Modality, TextAnalysisResult,
    TextMetadata, TextReason,
};

use crate::error::ReportError;
use crate::naming::{iso_timestamp, report_file_name};

pub const IMAGE_REPORT_TYPE: &str = "AI Content Authenticity Analysis - Image";
pub const TEXT_REPORT_TYPE: &str = "AI Content Authenticity Analysis - Text";
pub const DISCLAIMER: &str =
    "This report provides simulated AI analysis for demonstration purposes only.";

/// File name recorded in image reports when the image's name is unknown.
pub const FALLBACK_IMAGE_NAME: &str = "image.jpg";

/// Characters of the analyzed text kept in a text report.
pub const TEXT_PREVIEW_CHARS: usize = 200;
const TRUNCATION_MARKER: &str = "...";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReportAnalysis {
    pub authenticity_score: f64,
    pub classification: Label,
    pub confidence: f64,
    pub explanations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReport {
    pub report_type: String,
    pub timestamp: String,
    pub file_name: String,
    pub analysis: ImageReportAnalysis,
    pub metadata: ImageMetadata,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReportAnalysis {
    pub authenticity_score: f64,
    pub classification: Label,
    pub confidence: f64,
    pub reasons: Vec<TextReason>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextReport {
    pub report_type: String,
    pub timestamp: String,
    pub text_preview: String,
    pub analysis: TextReportAnalysis,
    pub metadata: TextMetadata,
    pub disclaimer: String,
}

impl ImageReport {
    pub fn new(result: &ImageAnalysisResult, file_name: &str, at: DateTime<Utc>) -> Self {
        Self {
            report_type: IMAGE_REPORT_TYPE.to_string(),
            timestamp: iso_timestamp(at),
            file_name: file_name.to_string(),
            analysis: ImageReportAnalysis {
                authenticity_score: result.score,
                classification: result.label,
                confidence: result.confidence,
                explanations: result.explanations.clone(),
            },
            metadata: result.metadata.clone(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

impl TextReport {
    pub fn new(result: &TextAnalysisResult, original_text: &str, at: DateTime<Utc>) -> Self {
        Self {
            report_type: TEXT_REPORT_TYPE.to_string(),
            timestamp: iso_timestamp(at),
            text_preview: text_preview(original_text),
            analysis: TextReportAnalysis {
                authenticity_score: result.score,
                classification: result.label,
                confidence: result.confidence,
                reasons: result.reasons.clone(),
            },
            metadata: result.metadata.clone(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }
}

/// First 200 characters of `text`, with `...` appended when anything was cut.
pub fn text_preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut preview: String = chars.by_ref().take(TEXT_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        preview.push_str(TRUNCATION_MARKER);
    }
    preview
}

pub fn generate_image_report(
    result: &ImageAnalysisResult,
    file_name: &str,
) -> Result<String, ReportError> {
    generate_image_report_at(result, file_name, Utc::now())
}

pub fn generate_image_report_at(
    result: &ImageAnalysisResult,
    file_name: &str,
    at: DateTime<Utc>,
) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&ImageReport::new(
        result, file_name, at,
    ))?)
}

pub fn generate_text_report(
    result: &TextAnalysisResult,
    original_text: &str,
) -> Result<String, ReportError> {
    generate_text_report_at(result, original_text, Utc::now())
}

pub fn generate_text_report_at(
    result: &TextAnalysisResult,
    original_text: &str,
    at: DateTime<Utc>,
) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(&TextReport::new(
        result,
        original_text,
        at,
    ))?)
}

/// A serialized report together with the name it should be saved under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifact {
    pub file_name: String,
    pub content: String,
}

/// Build the downloadable artifact for either kind of result.
///
/// `descriptor` is the image's file name or the analyzed text. The document
/// timestamp and the file name share the same instant.
pub fn build_report(
    result: &AnalysisResult,
    descriptor: &str,
    at: DateTime<Utc>,
) -> Result<ReportArtifact, ReportError> {
    let content = match result {
        AnalysisResult::Image(r) => generate_image_report_at(r, descriptor, at)?,
        AnalysisResult::Text(r) => generate_text_report_at(r, descriptor, at)?,
    };
    Ok(ReportArtifact {
        file_name: report_file_name(result.modality(), at),
        content,
    })
}

/// A report read back from its JSON form.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedReport {
    Image(ImageReport),
    Text(TextReport),
}

impl ParsedReport {
    pub fn modality(&self) -> Modality {
        match self {
            ParsedReport::Image(_) => Modality::Image,
            ParsedReport::Text(_) => Modality::Text,
        }
    }
}

/// Parse a report produced by [`generate_image_report`] or [`generate_text_report`].
pub fn parse_report(content: &str) -> Result<ParsedReport, ReportError> {
    let value: JsonValue = serde_json::from_str(content)?;
    let report_type = value
        .get("reportType")
        .and_then(JsonValue::as_str)
        .unwrap_or_default()
        .to_string();

    match report_type.as_str() {
        IMAGE_REPORT_TYPE => Ok(ParsedReport::Image(serde_json::from_value(value)?)),
        TEXT_REPORT_TYPE => Ok(ParsedReport::Text(serde_json::from_value(value)?)),
        _ => Err(ReportError::UnknownReportType(report_type)),
    }
}
