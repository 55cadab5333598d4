pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::assessment::handlers;
use crate::assessment::intake::MAX_DOCUMENT_BYTES;
use crate::errors::AppError;
use crate::state::AppState;

/// Request bodies may be larger than the document ceiling so that oversized
/// resumes reach intake validation and get a 400 instead of a bare 413.
pub const MAX_REQUEST_BYTES: usize = 2 * MAX_DOCUMENT_BYTES;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("no route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Assessment API
        .route("/api/v1/assessments", post(handlers::handle_assess))
        // Path the legacy Next.js frontend posts to
        .route("/api/llmbuddy", post(handlers::handle_assess))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .with_state(state)
}
