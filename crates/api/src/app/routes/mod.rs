use axum::{Router, routing::get};

pub mod analyze;
pub mod reports;
pub mod samples;
pub mod system;

/// Router for all API endpoints except `/health`.
pub fn router() -> Router {
    Router::new()
        .route("/samples", get(samples::list_samples))
        .nest("/analyze", analyze::router())
        .nest("/reports", reports::router())
}
