use crate::errors::AppError;
use crate::extraction::DocumentFormat;

/// Minimum number of characters (after trimming) a CV must yield.
pub const MIN_CV_TEXT_CHARS: usize = 50;

/// Resolves the document format from the filename's last extension.
///
/// `"Resume.Final.PDF"` → `Pdf`; a name with no dot is treated as its own
/// extension and therefore rejected.
pub fn detect_format(filename: &str) -> Result<DocumentFormat, AppError> {
    let ext = filename
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase();

    DocumentFormat::from_extension(&ext).ok_or(AppError::UnsupportedFormat)
}

/// Rejects extracted text that is too short to be worth analysing.
pub fn validate_cv_text(text: &str) -> Result<(), AppError> {
    if text.trim().chars().count() < MIN_CV_TEXT_CHARS {
        return Err(AppError::InsufficientText);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_format_is_case_insensitive() {
        assert_eq!(detect_format("cv.PDF").unwrap(), DocumentFormat::Pdf);
        assert_eq!(detect_format("My.Resume.Docx").unwrap(), DocumentFormat::Docx);
        assert_eq!(detect_format("notes.txt").unwrap(), DocumentFormat::Txt);
    }

    #[test]
    fn test_detect_format_rejects_unsupported() {
        assert!(matches!(detect_format("photo.jpg"), Err(AppError::UnsupportedFormat)));
        assert!(matches!(detect_format("legacy.doc"), Err(AppError::UnsupportedFormat)));
        assert!(matches!(detect_format("document"), Err(AppError::UnsupportedFormat)));
        assert!(matches!(detect_format("resume.pdf.exe"), Err(AppError::UnsupportedFormat)));
    }

    #[test]
    fn test_validate_cv_text_threshold() {
        let exactly = "a".repeat(MIN_CV_TEXT_CHARS);
        assert!(validate_cv_text(&exactly).is_ok());

        let short = "a".repeat(MIN_CV_TEXT_CHARS - 1);
        assert!(matches!(validate_cv_text(&short), Err(AppError::InsufficientText)));
    }

    #[test]
    fn test_validate_cv_text_ignores_surrounding_whitespace() {
        let padded = format!("{}{}{}", " ".repeat(500), "short cv", "\n".repeat(500));
        assert!(matches!(validate_cv_text(&padded), Err(AppError::InsufficientText)));
    }

    #[test]
    fn test_validate_cv_text_counts_characters_not_bytes() {
        // 49 two-byte characters: 98 bytes but still too short.
        let text = "é".repeat(MIN_CV_TEXT_CHARS - 1);
        assert!(matches!(validate_cv_text(&text), Err(AppError::InsufficientText)));
    }
}
