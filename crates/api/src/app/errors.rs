use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use deepauth_core::CoreError;
use deepauth_engine::EngineError;
use deepauth_report::ReportError;

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

pub fn core_error_to_response(err: CoreError) -> axum::response::Response {
    match err {
        CoreError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        CoreError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
        CoreError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
    }
}

pub fn engine_error_to_response(err: EngineError) -> axum::response::Response {
    match err {
        EngineError::InvalidInput(msg) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", msg)
        }
        EngineError::Decode(msg) => json_error(StatusCode::UNPROCESSABLE_ENTITY, "decode_error", msg),
        EngineError::Internal(msg) => {
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
        }
    }
}

pub fn report_error_to_response(err: ReportError) -> axum::response::Response {
    match err {
        ReportError::UnknownReportType(t) => json_error(
            StatusCode::BAD_REQUEST,
            "unknown_report_type",
            format!("unknown report type {t:?}"),
        ),
        ReportError::InvalidFileName(name) => json_error(
            StatusCode::BAD_REQUEST,
            "invalid_file_name",
            format!("invalid file name {name:?}"),
        ),
        other => json_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "report_error",
            other.to_string(),
        ),
    }
}
