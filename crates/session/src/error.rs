use thiserror::Error;

use deepauth_core::CoreError;
use deepauth_report::ReportError;

#[derive(Debug, Error)]
pub enum SessionError {
    /// Inputs are locked while an analysis is running.
    #[error("an analysis is already running")]
    Busy,

    #[error("failed to fetch sample image from {url}: {message}")]
    SampleFetch { url: String, message: String },

    #[error(transparent)]
    InvalidInput(#[from] CoreError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("no analysis result to report")]
    NothingToReport,
}
