use axum::Json;

use deepauth_core::SampleKind;

use crate::app::dto::SampleDto;

/// The bundled samples: texts inline, images by URL.
pub async fn list_samples() -> Json<Vec<SampleDto>> {
    Json(SampleKind::ALL.into_iter().map(SampleDto::from).collect())
}
