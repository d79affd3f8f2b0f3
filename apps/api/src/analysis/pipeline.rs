//! CV analysis pipeline.
//!
//! Flow: document source → format check → text extraction → length check →
//!       prompt → single LLM call → response.

use serde::Serialize;
use tracing::info;

use crate::analysis::document::DocumentSource;
use crate::analysis::prompts::build_analysis_prompt;
use crate::analysis::validation::{detect_format, validate_cv_text};
use crate::errors::AppError;
use crate::extraction::extract_text;
use crate::llm_client::LanguageModel;

/// Successful analysis returned by both analyze endpoints.
#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub success: bool,
    pub filename: String,
    /// The model's free-text answer, passed through untouched.
    pub analysis: String,
    pub model: String,
}

pub async fn analyze<S: DocumentSource>(
    llm: &dyn LanguageModel,
    source: S,
) -> Result<AnalysisResponse, AppError> {
    let document = source.into_document().await?;
    let format = detect_format(&document.filename)?;

    info!(
        "Analyzing {} ({format}, {} bytes)",
        document.filename,
        document.bytes.len()
    );

    let cv_text = extract_text(document.bytes, format).await?;
    validate_cv_text(&cv_text)?;

    let prompt = build_analysis_prompt(&cv_text);
    let analysis = llm.generate(&prompt, None).await?;

    Ok(AnalysisResponse {
        success: true,
        filename: document.filename,
        analysis,
        model: llm.model().to_string(),
    })
}
