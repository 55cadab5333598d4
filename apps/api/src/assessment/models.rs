//! Typed records flowing through one assessment request.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Stage 1 output: what the person does, in the parser's own words.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExtractionResult {
    pub current_role: String,
    /// An elaborated narrative of the role's duties, not resume text verbatim.
    pub job_description: String,
    pub field: String,
}

/// Envelope the parser is asked to wrap its answer in.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResumeDetailsEnvelope {
    pub resume_details: ExtractionResult,
}

/// Stage 2 output and the only thing returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JudgmentResult {
    pub replaceability_score: f64, // 0 – 100
    pub confidence: f64,           // 0 – 100
    pub commentary: String,
}

pub const SCORE_MIN: f64 = 0.0;
pub const SCORE_MAX: f64 = 100.0;

impl JudgmentResult {
    /// Pulls both numeric fields into [0, 100]. The model is asked for that
    /// range but nothing forces it to comply.
    pub fn clamped(mut self) -> Self {
        let score = self.replaceability_score.clamp(SCORE_MIN, SCORE_MAX);
        let confidence = self.confidence.clamp(SCORE_MIN, SCORE_MAX);
        if score != self.replaceability_score || confidence != self.confidence {
            warn!(
                raw_score = self.replaceability_score,
                raw_confidence = self.confidence,
                "judgment values outside 0-100, clamping"
            );
        }
        self.replaceability_score = score;
        self.confidence = confidence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_deserializes_resume_details() {
        let json = r#"{
            "resume_details": {
                "current_role": "Data Analyst",
                "field": "Analytics",
                "job_description": "Builds weekly dashboards and cleans sales data."
            }
        }"#;
        let envelope: ResumeDetailsEnvelope = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.resume_details.current_role, "Data Analyst");
        assert_eq!(envelope.resume_details.field, "Analytics");
    }

    #[test]
    fn test_extraction_missing_field_is_rejected() {
        let json = r#"{"resume_details": {"current_role": "Data Analyst", "field": "Analytics"}}"#;
        assert!(serde_json::from_str::<ResumeDetailsEnvelope>(json).is_err());
    }

    #[test]
    fn test_extraction_non_string_field_is_rejected() {
        let json = r#"{"resume_details": {"current_role": 7, "field": "x", "job_description": "y"}}"#;
        assert!(serde_json::from_str::<ResumeDetailsEnvelope>(json).is_err());
    }

    #[test]
    fn test_extraction_without_envelope_is_rejected() {
        let json = r#"{"current_role": "Data Analyst", "field": "Analytics", "job_description": "..."}"#;
        assert!(serde_json::from_str::<ResumeDetailsEnvelope>(json).is_err());
    }

    #[test]
    fn test_judgment_accepts_integers_and_floats() {
        let json = r#"{"replaceability_score": 72, "confidence": 80.5, "commentary": "bro..."}"#;
        let judgment: JudgmentResult = serde_json::from_str(json).unwrap();
        assert_eq!(judgment.replaceability_score, 72.0);
        assert_eq!(judgment.confidence, 80.5);
    }

    #[test]
    fn test_judgment_string_score_is_rejected() {
        let json = r#"{"replaceability_score": "72", "confidence": 80, "commentary": "bro..."}"#;
        assert!(serde_json::from_str::<JudgmentResult>(json).is_err());
    }

    #[test]
    fn test_judgment_extra_field_is_rejected() {
        let json = r#"{"replaceability_score": 72, "confidence": 80, "commentary": "c", "mood": "grim"}"#;
        assert!(serde_json::from_str::<JudgmentResult>(json).is_err());
    }

    #[test]
    fn test_clamped_pulls_values_into_range() {
        let judgment = JudgmentResult {
            replaceability_score: 140.0,
            confidence: -3.0,
            commentary: "my guy".to_string(),
        }
        .clamped();
        assert_eq!(judgment.replaceability_score, 100.0);
        assert_eq!(judgment.confidence, 0.0);
    }

    #[test]
    fn test_clamped_leaves_in_range_values_alone() {
        let judgment = JudgmentResult {
            replaceability_score: 72.0,
            confidence: 80.0,
            commentary: "bro".to_string(),
        };
        assert_eq!(judgment.clone().clamped(), judgment);
    }

    #[test]
    fn test_judgment_serializes_with_snake_case_keys() {
        let judgment = JudgmentResult {
            replaceability_score: 72.0,
            confidence: 80.0,
            commentary: "bro".to_string(),
        };
        let value = serde_json::to_value(&judgment).unwrap();
        assert_eq!(value["replaceability_score"], 72.0);
        assert_eq!(value["confidence"], 80.0);
        assert_eq!(value["commentary"], "bro");
    }
}
