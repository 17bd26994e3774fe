use axum::{
    Json, Router,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;

use deepauth_core::AnalysisResult;
use deepauth_report::{FALLBACK_IMAGE_NAME, ReportArtifact, build_report};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/text", post(text_report))
        .route("/image", post(image_report))
}

pub async fn text_report(Json(body): Json<dto::TextReportRequest>) -> axum::response::Response {
    render(AnalysisResult::Text(body.result), &body.text)
}

pub async fn image_report(Json(body): Json<dto::ImageReportRequest>) -> axum::response::Response {
    let file_name = body
        .file_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_IMAGE_NAME.to_string());
    render(AnalysisResult::Image(body.result), &file_name)
}

fn render(result: AnalysisResult, descriptor: &str) -> axum::response::Response {
    if let Err(e) = result.validate() {
        return errors::core_error_to_response(e);
    }

    match build_report(&result, descriptor, Utc::now()) {
        Ok(artifact) => attachment(artifact),
        Err(e) => errors::report_error_to_response(e),
    }
}

fn attachment(artifact: ReportArtifact) -> axum::response::Response {
    tracing::info!(file_name = %artifact.file_name, "report generated");
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", artifact.file_name),
            ),
        ],
        artifact.content,
    )
        .into_response()
}
