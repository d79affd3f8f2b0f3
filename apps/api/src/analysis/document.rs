//! Document sources: the two ways a CV reaches the analysis pipeline.
//!
//! Both end as an `UploadedDocument`; nothing downstream knows which one
//! produced it.

use async_trait::async_trait;
use axum::extract::Multipart;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;
use bytes::Bytes;
use serde::Deserialize;

use crate::errors::AppError;

/// Multipart field carrying the upload.
pub const UPLOAD_FIELD: &str = "file";
/// Name used when a base64 payload omits one.
const DEFAULT_FILENAME: &str = "document";

/// Accepts padded and unpadded standard base64.
const LENIENT_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A CV as received, before any format detection.
#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub filename: String,
    pub bytes: Bytes,
}

/// Anything that can yield a filename and raw bytes for analysis.
#[async_trait]
pub trait DocumentSource: Send {
    async fn into_document(self) -> Result<UploadedDocument, AppError>;
}

#[async_trait]
impl DocumentSource for Multipart {
    async fn into_document(mut self) -> Result<UploadedDocument, AppError> {
        while let Some(field) = self
            .next_field()
            .await
            .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
        {
            if field.name() != Some(UPLOAD_FIELD) {
                continue;
            }

            let filename = match field.file_name() {
                Some(name) if !name.is_empty() => name.to_string(),
                _ => return Err(AppError::MissingFile("No file provided".to_string())),
            };
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

            return Ok(UploadedDocument { filename, bytes });
        }

        Err(AppError::MissingFile("No file provided".to_string()))
    }
}

/// JSON body sent by the Appsmith file picker.
#[derive(Debug, Deserialize)]
pub struct AppsmithFilePayload {
    pub file: Option<AppsmithFile>,
}

#[derive(Debug, Deserialize)]
pub struct AppsmithFile {
    pub name: Option<String>,
    /// Base64 content, optionally prefixed `data:<mime>;base64,`.
    pub data: Option<String>,
}

#[async_trait]
impl DocumentSource for AppsmithFilePayload {
    async fn into_document(self) -> Result<UploadedDocument, AppError> {
        let file = match self.file {
            Some(AppsmithFile {
                name: None,
                data: None,
            })
            | None => return Err(AppError::MissingFile("No file data provided".to_string())),
            Some(file) => file,
        };

        let filename = file.name.unwrap_or_else(|| DEFAULT_FILENAME.to_string());
        let bytes = decode_base64_data(file.data.as_deref().unwrap_or_default())?;

        Ok(UploadedDocument { filename, bytes })
    }
}

/// Decodes base64 file data, dropping a data-URL prefix if present.
pub fn decode_base64_data(data: &str) -> Result<Bytes, AppError> {
    let payload = strip_data_url_prefix(data);
    let cleaned: String = payload
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    LENIENT_BASE64
        .decode(cleaned)
        .map(Bytes::from)
        .map_err(|e| AppError::InvalidDocument(format!("Invalid base64 file data: {e}")))
}

/// `data:[mime];base64,AAAA...` → `AAAA...`
fn strip_data_url_prefix(data: &str) -> &str {
    data.split_once(',').map_or(data, |(_, rest)| rest)
}
