//! LLM Client: the single point of entry for all Gemini API calls in Replacify.
//!
//! No other module talks to the provider directly. Callers depend on the
//! `InferenceProvider` trait so the pipeline can run against a fake in tests.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::config::Config;

const API_VERSION: &str = "v1beta";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("upload session started without an x-goog-upload-url header")]
    MissingUploadUrl,

    #[error("provider returned no candidate text")]
    EmptyResponse,
}

/// Opaque handle to a document staged in the provider's file storage.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRef {
    pub name: String,
    pub uri: String,
    pub mime_type: String,
}

/// One piece of user content in a generation request.
#[derive(Debug, Clone)]
pub enum Part {
    Text(String),
    File(FileRef),
}

/// A single-turn, schema-constrained generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub system_instruction: String,
    pub parts: Vec<Part>,
    pub response_schema: Value,
}

/// The provider operations the assessment pipeline needs.
///
/// Carried in `AppState` as `Arc<dyn InferenceProvider>`.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Stages raw document bytes and returns a reference usable in later prompts.
    async fn upload_file(
        &self,
        bytes: Bytes,
        mime_type: &str,
        display_name: &str,
    ) -> Result<FileRef, LlmError>;

    /// Runs one generation call and returns the raw candidate text.
    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: WireContent<'a>,
    contents: Vec<WireContent<'a>>,
    generation_config: WireGenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct WireContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<WirePart<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
enum WirePart<'a> {
    Text(&'a str),
    FileData(WireFileData<'a>),
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireFileData<'a> {
    file_uri: &'a str,
    mime_type: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WireGenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

impl<'a> From<&'a Part> for WirePart<'a> {
    fn from(part: &'a Part) -> Self {
        match part {
            Part::Text(text) => WirePart::Text(text),
            Part::File(file) => WirePart::FileData(WireFileData {
                file_uri: &file.uri,
                mime_type: &file.mime_type,
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    /// Returns `None` when there is no candidate or it carries no text.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    file: FileRef,
}

#[derive(Debug, Deserialize)]
struct GoogleError {
    error: GoogleErrorBody,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiClient
// ────────────────────────────────────────────────────────────────────────────

/// The Gemini REST client used by the server. Built once at startup.
/// Every request is single-attempt and bounded by the configured timeout.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: &Config) -> Result<Self, LlmError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.provider_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_key: config.gemini_api_key.clone(),
            base_url: config.gemini_base_url.clone(),
            model: config.gemini_model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InferenceProvider for GeminiClient {
    async fn upload_file(
        &self,
        bytes: Bytes,
        mime_type: &str,
        display_name: &str,
    ) -> Result<FileRef, LlmError> {
        // Resumable protocol: open a session, then send the bytes and finalize.
        let start = self
            .client
            .post(format!("{}/upload/{API_VERSION}/files", self.base_url))
            .header("x-goog-api-key", &self.api_key)
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header(
                "X-Goog-Upload-Header-Content-Length",
                bytes.len().to_string(),
            )
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&json!({ "file": { "display_name": display_name } }))
            .send()
            .await?;
        let start = ensure_success(start).await?;

        let upload_url = start
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .ok_or(LlmError::MissingUploadUrl)?
            .to_string();

        let finalize = self
            .client
            .post(&upload_url)
            .header("x-goog-api-key", &self.api_key)
            .header("X-Goog-Upload-Offset", "0")
            .header("X-Goog-Upload-Command", "upload, finalize")
            .body(bytes)
            .send()
            .await?;
        let uploaded: UploadResponse = ensure_success(finalize).await?.json().await?;

        debug!(file = %uploaded.file.name, "file staged with provider");
        Ok(uploaded.file)
    }

    async fn generate(&self, request: GenerationRequest) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            system_instruction: WireContent {
                role: None,
                parts: vec![WirePart::Text(&request.system_instruction)],
            },
            contents: vec![WireContent {
                role: Some("user"),
                parts: request.parts.iter().map(WirePart::from).collect(),
            }],
            generation_config: WireGenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &request.response_schema,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/{API_VERSION}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;
        let generated: GenerateContentResponse = ensure_success(response).await?.json().await?;

        if let Some(usage) = &generated.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        generated.text().ok_or(LlmError::EmptyResponse)
    }
}

/// Maps a non-2xx response to `LlmError::Api`, preferring Google's error message.
async fn ensure_success(response: Response) -> Result<Response, LlmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!("Gemini API returned {}: {}", status, body);
    let message = serde_json::from_str::<GoogleError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body);
    Err(LlmError::Api {
        status: status.as_u16(),
        message,
    })
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
pub fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text
        .strip_prefix("```json")
        .or_else(|| text.strip_prefix("```"))
    else {
        return text;
    };
    let inner = inner.trim_start();
    inner.strip_suffix("```").map(str::trim).unwrap_or(inner)
}
