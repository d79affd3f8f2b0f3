use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::warn;

use crate::llm_client::prompts::HEALTH_PROBE_PROMPT;
use crate::llm_client::{LanguageModel, LlmError};
use crate::state::AppState;

/// Reachability of the model provider as seen by the probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Connected,
    Disconnected,
    Error,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub model: String,
    pub api_status: ApiStatus,
}

/// GET /
/// Static service metadata.
pub async fn root_handler() -> Json<Value> {
    Json(json!({
        "message": "Career Recommendation API",
        "version": "1.0",
        "endpoints": {
            "/health": "Health check",
            "/analyze-cv": "POST - Analyze CV file",
            "/analyze-cv-base64": "POST - Analyze CV from base64",
            "/recommendations": "POST - Structured recommendations (JSON)"
        }
    }))
}

/// GET /health
/// Always 200; probe failures show up in `api_status`, never as an HTTP error.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let api_status = probe(state.llm.as_ref()).await;

    Json(HealthResponse {
        status: "healthy",
        model: state.llm.model().to_string(),
        api_status,
    })
}

async fn probe(llm: &dyn LanguageModel) -> ApiStatus {
    match llm.generate(HEALTH_PROBE_PROMPT, None).await {
        Ok(_) => ApiStatus::Connected,
        Err(LlmError::EmptyContent) => ApiStatus::Disconnected,
        Err(e) => {
            warn!("Health probe failed: {e}");
            ApiStatus::Error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::{StubModel, StubReply};

    #[tokio::test]
    async fn test_probe_classifies_outcomes() {
        assert_eq!(probe(&StubModel::text("Hi")).await, ApiStatus::Connected);
        assert_eq!(
            probe(&StubModel::new(StubReply::Empty)).await,
            ApiStatus::Disconnected
        );
        assert_eq!(
            probe(&StubModel::new(StubReply::Fail)).await,
            ApiStatus::Error
        );
    }

    #[tokio::test]
    async fn test_probe_sends_hello() {
        let llm = StubModel::text("Hi");
        probe(&llm).await;
        assert_eq!(llm.last_prompt().as_deref(), Some("Hello"));
    }
}
