//! Assessment pipeline: stage the resume, extract the role, judge it.
//!
//! Every stage runs exactly once. A failure at any stage ends the request;
//! Stage 2 is only reached with a structurally valid `ExtractionResult`.

use std::fmt;

use thiserror::Error;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::assessment::intake::{SubmissionInput, UploadedDocument};
use crate::assessment::models::{ExtractionResult, JudgmentResult, ResumeDetailsEnvelope};
use crate::assessment::prompts::{
    build_judgment_prompt, judgment_schema, resume_details_schema, JUDGMENT_SYSTEM,
    RESUME_PARSE_SYSTEM,
};
use crate::llm_client::{
    strip_json_fences, FileRef, GenerationRequest, InferenceProvider, LlmError, Part,
};

/// The outbound step a failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Upload,
    Extraction,
    Judgment,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Upload => "upload",
            Stage::Extraction => "extraction",
            Stage::Judgment => "judgment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Error)]
pub enum AssessmentError {
    /// The provider call did not complete or came back without any text.
    #[error("{stage} call to provider failed: {source}")]
    ProviderTransport {
        stage: Stage,
        #[source]
        source: LlmError,
    },

    /// The provider answered, but not with the JSON shape that was asked for.
    #[error("{stage} response did not match the expected shape: {source}")]
    Parse {
        stage: Stage,
        #[source]
        source: serde_json::Error,
    },
}

impl AssessmentError {
    pub fn stage(&self) -> Stage {
        match self {
            AssessmentError::ProviderTransport { stage, .. }
            | AssessmentError::Parse { stage, .. } => *stage,
        }
    }
}

/// Runs the full pipeline for one validated submission.
#[instrument(skip_all, fields(file_name = %submission.document.file_name))]
pub async fn assess(
    llm: &dyn InferenceProvider,
    submission: SubmissionInput,
) -> Result<JudgmentResult, AssessmentError> {
    let SubmissionInput { document, skills } = submission;

    let file = stage_document(llm, document).await?;
    let extraction = extract_profile(llm, &file).await?;
    info!(current_role = %extraction.current_role, field = %extraction.field, "resume parsed");

    let judgment = judge(llm, &extraction, &skills).await?;
    info!(
        score = judgment.replaceability_score,
        confidence = judgment.confidence,
        "judgment produced"
    );
    Ok(judgment)
}

/// Hands the in-memory bytes to the provider's file storage.
pub async fn stage_document(
    llm: &dyn InferenceProvider,
    document: UploadedDocument,
) -> Result<FileRef, AssessmentError> {
    let display_name = format!("resume-{}", Uuid::new_v4());
    info!(
        bytes = document.bytes.len(),
        mime_type = document.kind.mime_type(),
        %display_name,
        "staging resume with provider"
    );

    llm.upload_file(document.bytes, document.kind.mime_type(), &display_name)
        .await
        .map_err(|source| AssessmentError::ProviderTransport {
            stage: Stage::Upload,
            source,
        })
}

/// Stage 1: asks the parser persona to describe the person's role from the staged file.
pub async fn extract_profile(
    llm: &dyn InferenceProvider,
    file: &FileRef,
) -> Result<ExtractionResult, AssessmentError> {
    let request = GenerationRequest {
        system_instruction: RESUME_PARSE_SYSTEM.to_string(),
        parts: vec![Part::File(file.clone())],
        response_schema: resume_details_schema(),
    };

    let text = generate(llm, Stage::Extraction, request).await?;
    let envelope: ResumeDetailsEnvelope = parse_json(Stage::Extraction, &text)?;
    Ok(envelope.resume_details)
}

/// Stage 2: a fresh, stateless call that scores the extracted role.
pub async fn judge(
    llm: &dyn InferenceProvider,
    extraction: &ExtractionResult,
    skills: &str,
) -> Result<JudgmentResult, AssessmentError> {
    let request = GenerationRequest {
        system_instruction: JUDGMENT_SYSTEM.to_string(),
        parts: vec![Part::Text(build_judgment_prompt(extraction, skills))],
        response_schema: judgment_schema(),
    };

    let text = generate(llm, Stage::Judgment, request).await?;
    let judgment: JudgmentResult = parse_json(Stage::Judgment, &text)?;
    Ok(judgment.clamped())
}

async fn generate(
    llm: &dyn InferenceProvider,
    stage: Stage,
    request: GenerationRequest,
) -> Result<String, AssessmentError> {
    llm.generate(request)
        .await
        .map_err(|source| AssessmentError::ProviderTransport { stage, source })
}

fn parse_json<T: serde::de::DeserializeOwned>(
    stage: Stage,
    text: &str,
) -> Result<T, AssessmentError> {
    serde_json::from_str(strip_json_fences(text))
        .map_err(|source| AssessmentError::Parse { stage, source })
}
