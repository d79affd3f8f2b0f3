//! Text extraction: turns raw document bytes into plain text.
//!
//! PDF and DOCX parsing are CPU-bound and run on the blocking pool.

pub mod docx;
pub mod pdf;

use std::fmt;

use bytes::Bytes;

use crate::errors::AppError;

/// Document formats the service can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Txt,
}

const DOCX_MIME: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

impl DocumentFormat {
    /// Maps a lower-cased file extension to a format.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::Txt),
            _ => None,
        }
    }

    /// Maps a MIME type to a format, falling back to plain text.
    pub fn from_mime_type(mime: &str) -> Self {
        let mime = mime.trim().to_ascii_lowercase();
        if mime.starts_with("text/") || mime == "application/json" {
            Self::Txt
        } else if mime == "application/pdf" {
            Self::Pdf
        } else if mime == DOCX_MIME || mime == "application/msword" || mime.ends_with(".docx") {
            Self::Docx
        } else {
            Self::Txt
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
            Self::Txt => "TXT",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Extracts plain text from `bytes` according to `format`.
///
/// Any parse failure is the caller's problem (bad upload), so it comes back
/// as `AppError::InvalidDocument` naming the format.
pub async fn extract_text(bytes: Bytes, format: DocumentFormat) -> Result<String, AppError> {
    let result = match format {
        DocumentFormat::Pdf => run_blocking(move || pdf::extract(&bytes)).await,
        DocumentFormat::Docx => run_blocking(move || docx::extract(&bytes)).await,
        DocumentFormat::Txt => {
            std::str::from_utf8(&bytes)
                .map(str::to_owned)
                .map_err(|_| "file is not valid UTF-8 text".to_string())
        }
    };

    result.map_err(|cause| AppError::InvalidDocument(format!("Error reading {format}: {cause}")))
}

async fn run_blocking<F>(f: F) -> Result<String, String>
where
    F: FnOnce() -> Result<String, String> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| format!("parser aborted: {e}"))?
}
