use std::sync::Arc;

use crate::llm_client::LanguageModel;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only for the life of the process.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model adapter. Default: `GeminiClient`.
    pub llm: Arc<dyn LanguageModel>,
}
