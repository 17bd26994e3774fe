use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Extension, Query},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::post,
};

use deepauth_core::ImageInput;

use crate::app::{AppState, dto, errors};

/// Name given to uploads that arrive without `?fileName=`.
pub const DEFAULT_UPLOAD_NAME: &str = "upload";

pub fn router() -> Router {
    Router::new()
        .route("/text", post(analyze_text))
        .route("/image", post(analyze_image))
}

pub async fn analyze_text(
    Extension(state): Extension<Arc<AppState>>,
    Json(body): Json<dto::AnalyzeTextRequest>,
) -> axum::response::Response {
    if body.text.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "text must not be blank",
        );
    }

    let result = state.engine.analyze_text(&body.text).await;
    (StatusCode::OK, Json(result)).into_response()
}

/// Raw image bytes in the body; the `Content-Type` header is the MIME type.
pub async fn analyze_image(
    Extension(state): Extension<Arc<AppState>>,
    Query(query): Query<dto::ImageUploadQuery>,
    headers: HeaderMap,
    body: Bytes,
) -> axum::response::Response {
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    let file_name = query
        .file_name
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_UPLOAD_NAME.to_string());

    let image = match ImageInput::new(file_name, mime_type, body.to_vec()) {
        Ok(image) => image,
        Err(e) => return errors::core_error_to_response(e),
    };

    match state.engine.analyze_image(&image).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::warn!(file_name = image.file_name(), error = %e, "image analysis failed");
            errors::engine_error_to_response(e)
        }
    }
}
