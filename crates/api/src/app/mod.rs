//! HTTP API application wiring (Axum router + shared state).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, extract::DefaultBodyLimit, routing::get};
use tower::ServiceBuilder;

use deepauth_engine::AnalysisEngine;

pub mod dto;
pub mod errors;
pub mod routes;

/// Largest accepted image upload.
pub const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// State shared by every handler.
#[derive(Debug)]
pub struct AppState {
    pub engine: AnalysisEngine,
}

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app(engine: AnalysisEngine) -> Router {
    let state = Arc::new(AppState { engine });

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router())
        .layer(
            ServiceBuilder::new()
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
                .layer(Extension(state)),
        )
}
