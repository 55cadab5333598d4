use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::InferenceProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The one provider client for the whole process. `GeminiClient` in
    /// production; tests swap in a scripted fake.
    pub llm: Arc<dyn InferenceProvider>,
    pub config: Config,
}
