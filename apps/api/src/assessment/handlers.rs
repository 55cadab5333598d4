//! Axum route handlers for the Assessment API.

use anyhow::Context;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use crate::assessment::intake::read_submission;
use crate::assessment::models::JudgmentResult;
use crate::assessment::pipeline::assess;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    pub message: &'static str,
    pub data: JudgmentResult,
}

/// POST /api/v1/assessments (also mounted at POST /api/llmbuddy)
///
/// Multipart body with a `resume` file and a `skills` text part.
/// Validates everything up front, then runs upload → extraction → judgment.
/// Only the judgment is returned; the extraction stays internal.
pub async fn handle_assess(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AssessmentResponse>, AppError> {
    let submission = read_submission(multipart).await?;

    // The pipeline runs detached so a client disconnect does not abort
    // provider calls halfway through.
    let llm = state.llm.clone();
    let judgment = tokio::spawn(async move { assess(llm.as_ref(), submission).await })
        .await
        .context("assessment task did not complete")??;

    Ok(Json(AssessmentResponse {
        message: "success",
        data: judgment,
    }))
}
