//! `deepauth-report`
//!
//! **Responsibility:** turn a finished analysis into a downloadable JSON
//! document and hand it to whatever "save file" mechanism the host has.

pub mod document;
pub mod error;
pub mod naming;
pub mod sink;

pub use document::{
    DISCLAIMER, FALLBACK_IMAGE_NAME, IMAGE_REPORT_TYPE, ImageReport, ImageReportAnalysis, ParsedReport,
    ReportArtifact, TEXT_PREVIEW_CHARS, TEXT_REPORT_TYPE, TextReport, TextReportAnalysis,
    build_report, generate_image_report, generate_image_report_at, generate_text_report,
    generate_text_report_at, parse_report, text_preview,
};
pub use error::ReportError;
pub use naming::{iso_timestamp, report_file_name};
pub use sink::{DirectorySink, InMemoryReportSink, ReportSink, download_report};
