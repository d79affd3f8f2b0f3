use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Everything that is the caller's fault maps to 400 and passes through
/// unchanged; everything else is a 5xx with the cause embedded in the message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    MissingFile(String),

    #[error("{0}")]
    Validation(String),

    #[error("Unsupported file format. Please upload PDF, DOCX, or TXT")]
    UnsupportedFormat,

    #[error("{0}")]
    InvalidDocument(String),

    #[error(
        "Could not extract enough text from the CV. Please ensure the file contains readable text."
    )]
    InsufficientText,

    #[error("Gemini API error: {0}")]
    Llm(#[from] LlmError),

    #[error("{0}")]
    Internal(#[from] anyhow::Error),
}

/// `Json` extractor whose rejections come back in the `AppError` body shape.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl From<MultipartRejection> for AppError {
    fn from(rejection: MultipartRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile(_)
            | AppError::Validation(_)
            | AppError::UnsupportedFormat
            | AppError::InvalidDocument(_)
            | AppError::InsufficientText => StatusCode::BAD_REQUEST,
            AppError::Llm(LlmError::Parse { .. }) => StatusCode::BAD_GATEWAY,
            AppError::Llm(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            AppError::MissingFile(_) => "NO_FILE",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::UnsupportedFormat => "UNSUPPORTED_FORMAT",
            AppError::InvalidDocument(_) => "INVALID_DOCUMENT",
            AppError::InsufficientText => "INSUFFICIENT_TEXT",
            AppError::Llm(LlmError::Parse { .. }) => "UNPARSABLE_MODEL_OUTPUT",
            AppError::Llm(_) => "LLM_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let message = if status.is_server_error() {
            tracing::error!("Error during analysis: {self}");
            match &self {
                AppError::Llm(LlmError::Parse { .. }) => {
                    "LLM returned non-JSON or unparsable JSON.".to_string()
                }
                _ => format!("An error occurred: {self}"),
            }
        } else {
            tracing::warn!("Rejected request: {self}");
            self.to_string()
        };

        let mut body = json!({
            "error": {
                "code": code,
                "message": message
            }
        });
        if let AppError::Llm(LlmError::Parse { raw_text, .. }) = &self {
            body["llm_text"] = json!(raw_text);
        }

        (status, Json(body)).into_response()
    }
}
