//! Structured career recommendations.
//!
//! Accepts a Gemini-style `contents` body (free-text interests plus an
//! optional inline file), and returns the model's answer parsed into a
//! summary and a list of recommendations.

pub mod prompts;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::document::decode_base64_data;
use crate::errors::{AppError, AppJson};
use crate::extraction::{extract_text, DocumentFormat};
use crate::llm_client::{generate_json, GenerationSettings};
use crate::recommendations::prompts::build_recommendations_prompt;
use crate::state::AppState;

/// Sampling used for JSON answers: low temperature keeps the shape stable.
pub const RECOMMENDATION_SETTINGS: GenerationSettings = GenerationSettings {
    temperature: 0.4,
    top_k: 40,
    top_p: 0.9,
    max_output_tokens: 2048,
};

#[derive(Debug, Deserialize)]
pub struct RecommendationsRequest {
    #[serde(default)]
    pub contents: Vec<RequestContent>,
}

#[derive(Debug, Deserialize)]
pub struct RequestContent {
    #[serde(default)]
    pub parts: Vec<RequestPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPart {
    pub text: Option<String>,
    pub inline_data: Option<InlineData>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    #[serde(default)]
    pub mime_type: String,
    pub data: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    pub summary: String,
    pub recommendations: Vec<Recommendation>,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub page_content: String,
}

/// POST /recommendations (also served at /prod)
pub async fn handle_recommendations(
    State(state): State<AppState>,
    AppJson(request): AppJson<RecommendationsRequest>,
) -> Result<Json<Recommendations>, AppError> {
    let parts = request
        .contents
        .into_iter()
        .next()
        .map(|c| c.parts)
        .ok_or_else(|| AppError::Validation("Invalid payload: contents required".to_string()))?;

    let interests = parts
        .iter()
        .filter_map(|p| p.text.as_deref())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n");

    let cv_text = match parts.into_iter().find_map(|p| p.inline_data) {
        Some(inline) => read_inline_file(inline).await?,
        None => String::new(),
    };

    info!(
        "Generating recommendations (cv_chars={}, interests_chars={})",
        cv_text.chars().count(),
        interests.chars().count()
    );

    let prompt = build_recommendations_prompt(&cv_text, &interests);
    let recommendations: Recommendations =
        generate_json(state.llm.as_ref(), &prompt, Some(&RECOMMENDATION_SETTINGS)).await?;

    Ok(Json(recommendations))
}

async fn read_inline_file(inline: InlineData) -> Result<String, AppError> {
    let data = match inline.data.as_deref() {
        Some(data) if !data.is_empty() => data,
        _ => return Err(AppError::Validation("inlineData.data missing".to_string())),
    };

    let bytes = decode_base64_data(data)?;
    extract_text(bytes, DocumentFormat::from_mime_type(&inline.mime_type)).await
}
