//! Intake: reads and validates the multipart submission before anything
//! leaves the process.

use std::path::Path;

use axum::extract::multipart::{Field, Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

/// Largest accepted resume, in bytes (5 MiB).
pub const MAX_DOCUMENT_BYTES: usize = 5 * 1024 * 1024;

pub const RESUME_FIELD: &str = "resume";
pub const SKILLS_FIELD: &str = "skills";

pub const MSG_RESUME_REQUIRED: &str = "resume required";
pub const MSG_SKILLS_REQUIRED: &str = "skills required";
pub const MSG_UNSUPPORTED_TYPE: &str = "unsupported file type";
pub const MSG_TOO_LARGE: &str = "file too large";

/// Document formats the provider is asked to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Doc,
    Docx,
}

impl DocumentKind {
    pub fn from_mime(mime: &str) -> Option<Self> {
        // Drop parameters such as "; charset=binary".
        let essence = mime.split(';').next().unwrap_or("").trim();
        match essence.to_ascii_lowercase().as_str() {
            "application/pdf" => Some(Self::Pdf),
            "application/msword" => Some(Self::Doc),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Some(Self::Docx)
            }
            _ => None,
        }
    }

    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let extension = Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())?
            .to_ascii_lowercase();
        match extension.as_str() {
            "pdf" => Some(Self::Pdf),
            "doc" => Some(Self::Doc),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Resolves the kind from the part's declared content type. Browsers send
    /// `application/octet-stream` (or nothing) for unknown files; only then
    /// does the file extension decide.
    pub fn detect(content_type: Option<&str>, file_name: Option<&str>) -> Option<Self> {
        match content_type.map(str::trim) {
            Some(ct) if !ct.is_empty() && !ct.starts_with("application/octet-stream") => {
                Self::from_mime(ct)
            }
            _ => file_name.and_then(Self::from_file_name),
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Doc => "application/msword",
            Self::Docx => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        }
    }
}

/// The file part exactly as received, before validation.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// A resume that passed validation.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: String,
    pub kind: DocumentKind,
    pub bytes: Bytes,
}

/// A validated submission. Skills are stored trimmed.
#[derive(Debug, Clone)]
pub struct SubmissionInput {
    pub document: UploadedDocument,
    pub skills: String,
}

impl SubmissionInput {
    /// Applies the intake rules in order: presence of the resume, presence of
    /// skills, media type, then size.
    pub fn validate(
        document: Option<RawDocument>,
        skills: Option<String>,
    ) -> Result<Self, AppError> {
        let document = document
            .filter(|d| !d.bytes.is_empty())
            .ok_or_else(|| AppError::Validation(MSG_RESUME_REQUIRED.to_string()))?;

        let skills = skills
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::Validation(MSG_SKILLS_REQUIRED.to_string()))?;

        let kind = DocumentKind::detect(
            document.content_type.as_deref(),
            document.file_name.as_deref(),
        )
        .ok_or_else(|| AppError::Validation(MSG_UNSUPPORTED_TYPE.to_string()))?;

        if document.bytes.len() > MAX_DOCUMENT_BYTES {
            return Err(AppError::Validation(MSG_TOO_LARGE.to_string()));
        }

        Ok(SubmissionInput {
            document: UploadedDocument {
                file_name: document.file_name.unwrap_or_else(|| "resume".to_string()),
                kind,
                bytes: document.bytes,
            },
            skills,
        })
    }
}

/// Drains the multipart stream and validates the result.
/// Parts other than `resume` and `skills` are skipped.
pub async fn read_submission(mut multipart: Multipart) -> Result<SubmissionInput, AppError> {
    let mut document = None;
    let mut skills = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(RESUME_FIELD) => document = Some(read_document(field).await?),
            Some(SKILLS_FIELD) => skills = Some(field.text().await.map_err(multipart_error)?),
            _ => continue,
        }
    }

    SubmissionInput::validate(document, skills)
}

async fn read_document(field: Field<'_>) -> Result<RawDocument, AppError> {
    let file_name = field.file_name().map(str::to_string);
    let content_type = field.content_type().map(str::to_string);
    let bytes = field.bytes().await.map_err(multipart_error)?;
    Ok(RawDocument {
        file_name,
        content_type,
        bytes,
    })
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::Validation(MSG_TOO_LARGE.to_string())
    } else {
        AppError::Validation(err.body_text())
    }
}
