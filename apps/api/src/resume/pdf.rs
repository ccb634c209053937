use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

const PDF_MAGIC: &[u8] = b"%PDF";

#[derive(Debug, Error)]
pub enum ResumeError {
    #[error("file is not a PDF")]
    NotPdf,

    #[error("PDF text extraction failed: {0}")]
    Extraction(String),

    #[error("PDF contains no extractable text")]
    NoText,
}

impl ResumeError {
    /// Message safe to show the student.
    pub fn user_message(&self) -> &'static str {
        match self {
            ResumeError::NotPdf => "Only PDF resumes are supported.",
            ResumeError::Extraction(_) | ResumeError::NoText => {
                "Could not read any text from this PDF. Please upload a digital (text-based) PDF, not a scanned image."
            }
        }
    }
}

/// Extracts raw text from a PDF. No OCR: scanned documents come back as `NoText`.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ResumeError> {
    if !bytes.starts_with(PDF_MAGIC) {
        return Err(ResumeError::NotPdf);
    }
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ResumeError::Extraction(e.to_string()))?;
    if text.trim().is_empty() {
        return Err(ResumeError::NoText);
    }
    Ok(text)
}

/// Runs extraction on the blocking pool; a panic inside the PDF parser is
/// reported as an extraction failure.
pub async fn extract_pdf_text_blocking(bytes: Bytes) -> Result<String, ResumeError> {
    tokio::task::spawn_blocking(move || extract_pdf_text(&bytes))
        .await
        .unwrap_or_else(|e| {
            warn!("PDF extraction task aborted: {e}");
            Err(ResumeError::Extraction(e.to_string()))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_pdf_rejected_before_parsing() {
        let err = extract_pdf_text(b"hello world").unwrap_err();
        assert!(matches!(err, ResumeError::NotPdf));
    }

    #[tokio::test]
    async fn test_truncated_pdf_is_an_extraction_error() {
        let err = extract_pdf_text_blocking(Bytes::from_static(b"%PDF-1.4\n%garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeError::Extraction(_) | ResumeError::NoText));
        assert!(err.user_message().contains("digital"));
    }

    #[tokio::test]
    async fn test_blocking_wrapper_propagates_errors() {
        let err = extract_pdf_text_blocking(Bytes::from_static(b"not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResumeError::NotPdf));
    }
}
