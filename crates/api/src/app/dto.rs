use serde::{Deserialize, Serialize};

use deepauth_core::{ImageAnalysisResult, Modality, SampleKind, TextAnalysisResult};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct AnalyzeTextRequest {
    pub text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageUploadQuery {
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TextReportRequest {
    pub text: String,
    pub result: TextAnalysisResult,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageReportRequest {
    pub file_name: Option<String>,
    pub result: ImageAnalysisResult,
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleDto {
    pub kind: SampleKind,
    pub text: &'static str,
    pub text_caption: &'static str,
    pub image_url: &'static str,
    pub image_file_name: String,
    pub image_caption: &'static str,
}

impl From<SampleKind> for SampleDto {
    fn from(kind: SampleKind) -> Self {
        Self {
            kind,
            text: kind.text(),
            text_caption: kind.caption(Modality::Text),
            image_url: kind.image_url(),
            image_file_name: kind.image_file_name(),
            image_caption: kind.caption(Modality::Image),
        }
    }
}
