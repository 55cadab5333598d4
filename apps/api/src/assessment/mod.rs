// Replaceability assessment: intake validation, then a two-stage LLM pipeline
// (resume extraction, then judgment). All LLM calls go through llm_client.

pub mod handlers;
pub mod intake;
pub mod models;
pub mod pipeline;
pub mod prompts;
