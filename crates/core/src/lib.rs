//! `deepauth-core` — data model shared by the engine, reports and the session.
//!
//! This crate is **pure data**: inputs, verdicts, result payloads and the demo
//! sample catalog. No randomness, no I/O.

pub mod error;
pub mod heatmap;
pub mod id;
pub mod input;
pub mod label;
pub mod result;
pub mod samples;

pub use error::{CoreError, CoreResult};
pub use heatmap::{HEATMAP_GRID_SIZE, Heatmap};
pub use id::AnalysisId;
pub use input::{AnalysisInput, ImageInput, Modality};
pub use label::{AI_THRESHOLD, HUMAN_THRESHOLD, Label};
pub use result::{
    AnalysisResult, IMAGE_EXPLANATION_COUNT, ImageAnalysisResult, ImageMetadata,
    TEXT_REASON_COUNT, TextAnalysisResult, TextMetadata, TextReason, round_to_tenth,
};
pub use samples::{
    AI_SAMPLE_IMAGE_URL, AI_SAMPLE_TEXT, HUMAN_SAMPLE_IMAGE_URL, HUMAN_SAMPLE_TEXT, SAMPLE_IMAGE_MIME,
    SampleKind,
};
