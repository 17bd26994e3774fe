use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("report json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid report file name: {0:?}")]
    InvalidFileName(String),

    #[error("unrecognized report type: {0:?}")]
    UnknownReportType(String),
}
