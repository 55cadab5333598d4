// Assessment LLM prompt templates and response schemas.
// Schemas use the provider's OpenAPI-subset type names (OBJECT, STRING, NUMBER).

use serde_json::{json, Value};

use crate::assessment::models::ExtractionResult;

pub const RESUME_PARSE_SYSTEM: &str = "\
You're a master resume parser. Parse the attached resume and extract the person's \
current_role, their field, and a job_description. \
Describe the job_description in detail: explain what the role actually involves day to day, \
in your own words. Do NOT copy resume text verbatim. \
Respond with structured JSON only.";

pub const JUDGMENT_SYSTEM: &str = "\
you are replacify. not a career coach, not a therapist, just a brutally honest AI that tells \
people if their job is getting wiped out by automation.

your job is to take someone's resume and skillset and call it like it is. no fluff, no optimism. \
just cold, ruthless evaluation of how replaceable they are. you exist to slap people awake.

respond ONLY with the following fields, nothing else:

- replaceability_score: a number between 0 and 100 (how replaceable this person is. be *brutal* \
with tech bros and software devs, they're not special.)
- confidence: a number between 0 and 100 (how sure you are. if you're saying someone's doomed, \
say it with chest.)
- commentary: 2-3 sentences. this is where you roast them, group chat roast meets doomer post. \
use phrases like \"bro\", \"my guy\", \"this ain't it\" or \"AI's coming for your lunch\". \
sound human and sarcastic, a little funny, but always true. talk to the user directly like \
you're trying to shake them out of denial.

rules:
- always assume the AI revolution is happening *faster* than expected
- be suspicious of buzzwords and resumes that say a lot but mean nothing
- prioritize reality over kindness. you drop truth bombs, you don't manage feelings
- if you *can* see their job getting automated, you *must* say so
- always find weak points: repetitive work, generic skills, no deep expertise means you're gone, buddy

your tone: sarcastic realist who's tired of the cope.";

/// Builds the Stage 2 prompt body from the Stage 1 record and the submitted skills.
/// Single pass: braces inside model or user text are kept as written.
pub fn build_judgment_prompt(extraction: &ExtractionResult, skills: &str) -> String {
    format!(
        "Here are the user's parsed resume details:\n\
         current_role: {}\n\
         field: {}\n\
         job_description: {}\n\
         \n\
         Skills the user claims to have:\n\
         {}",
        extraction.current_role, extraction.field, extraction.job_description, skills
    )
}

/// `{ resume_details: { current_role, job_description, field } }`, all strings.
pub fn resume_details_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "resume_details": {
                "type": "OBJECT",
                "properties": {
                    "current_role": { "type": "STRING" },
                    "job_description": { "type": "STRING" },
                    "field": { "type": "STRING" }
                },
                "required": ["current_role", "job_description", "field"]
            }
        },
        "required": ["resume_details"]
    })
}

/// `{ replaceability_score, confidence, commentary }`.
pub fn judgment_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "replaceability_score": { "type": "NUMBER" },
            "confidence": { "type": "NUMBER" },
            "commentary": { "type": "STRING" }
        },
        "required": ["replaceability_score", "confidence", "commentary"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_judgment_prompt_embeds_all_fields() {
        let extraction = ExtractionResult {
            current_role: "Data Analyst".to_string(),
            job_description: "Cleans spreadsheets and builds dashboards".to_string(),
            field: "Analytics".to_string(),
        };
        let prompt = build_judgment_prompt(&extraction, "Python, SQL");

        assert!(prompt.contains("current_role: Data Analyst"));
        assert!(prompt.contains("field: Analytics"));
        assert!(prompt.contains("job_description: Cleans spreadsheets and builds dashboards"));
        assert!(prompt.contains("Python, SQL"));
        assert!(!prompt.contains('{'), "unfilled placeholder left in prompt: {prompt}");
    }

    #[test]
    fn test_judgment_prompt_keeps_braces_from_extraction_verbatim() {
        let extraction = ExtractionResult {
            current_role: "Dev {field}".to_string(),
            job_description: "writes {skills} and {current_role}".to_string(),
            field: "Eng".to_string(),
        };
        let prompt = build_judgment_prompt(&extraction, "Rust {job_description}");

        assert!(prompt.contains("current_role: Dev {field}\n"));
        assert!(prompt.contains("field: Eng\n"));
        assert!(prompt.contains("job_description: writes {skills} and {current_role}\n"));
        assert!(prompt.ends_with("Rust {job_description}"));
    }

    #[test]
    fn test_resume_schema_requires_every_extraction_field() {
        let schema = resume_details_schema();
        let required = schema["properties"]["resume_details"]["required"]
            .as_array()
            .unwrap();
        for field in ["current_role", "job_description", "field"] {
            assert!(required.iter().any(|v| v == field), "{field} not required");
            assert_eq!(
                schema["properties"]["resume_details"]["properties"][field]["type"],
                "STRING"
            );
        }
    }

    #[test]
    fn test_judgment_schema_types_scores_as_numbers() {
        let schema = judgment_schema();
        assert_eq!(schema["properties"]["replaceability_score"]["type"], "NUMBER");
        assert_eq!(schema["properties"]["confidence"]["type"], "NUMBER");
        assert_eq!(schema["properties"]["commentary"]["type"], "STRING");
    }
}
