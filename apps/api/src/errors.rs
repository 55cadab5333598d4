use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::assessment::pipeline::{AssessmentError, Stage};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as `{"message": ..., "data": null}`. Only validation
/// messages reach the client verbatim; everything else is logged and replaced
/// with a short fixed message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Assessment failed: {0}")]
    Assessment(#[from] AssessmentError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Assessment(e) => {
                tracing::error!(stage = %e.stage(), "Assessment error: {e}");
                let message = match e {
                    AssessmentError::Parse { .. } => "failed to generate response",
                    AssessmentError::ProviderTransport { stage, .. } => match stage {
                        Stage::Upload => "failed to upload file",
                        Stage::Extraction => "resume parsing failed",
                        Stage::Judgment => "analysis generation failed",
                    },
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
            "data": null
        }));

        (status, body).into_response()
    }
}
