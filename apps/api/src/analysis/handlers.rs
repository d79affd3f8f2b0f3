//! Axum route handlers for the CV analysis API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};

use crate::analysis::document::AppsmithFilePayload;
use crate::analysis::pipeline::{analyze, AnalysisResponse};
use crate::errors::{AppError, AppJson};
use crate::state::AppState;

/// POST /analyze-cv
///
/// Multipart upload with the CV in the `file` field.
pub async fn handle_analyze_cv(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let response = analyze(state.llm.as_ref(), multipart?).await?;
    Ok(Json(response))
}

/// POST /analyze-cv-base64
///
/// JSON body `{"file": {"name", "data"}}` as sent by the Appsmith file picker.
pub async fn handle_analyze_cv_base64(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AppsmithFilePayload>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let response = analyze(state.llm.as_ref(), payload).await?;
    Ok(Json(response))
}
