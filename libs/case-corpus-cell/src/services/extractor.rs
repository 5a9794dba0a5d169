use crate::error::CorpusError;

/// The only document format accepted for past-case uploads.
pub const ACCEPTED_MEDIA_TYPE: &str = "application/pdf";

/// Turns an uploaded document into plain text.
pub trait DocumentTextExtractor: Send + Sync {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, CorpusError>;
}

/// Extracts the embedded text layer of digital PDFs using the pdf-extract crate.
pub struct PdfTextExtractor;

impl DocumentTextExtractor for PdfTextExtractor {
    fn extract_text(&self, bytes: &[u8]) -> Result<String, CorpusError> {
        pdf_extract::extract_text_from_mem(bytes)
            .map_err(|e| CorpusError::Extraction(e.to_string()))
    }
}

/// Compares the essence of a declared media type against `ACCEPTED_MEDIA_TYPE`,
/// ignoring parameters and case.
pub fn is_accepted_media_type(declared: &str) -> bool {
    declared
        .split(';')
        .next()
        .map(|essence| essence.trim().eq_ignore_ascii_case(ACCEPTED_MEDIA_TYPE))
        .unwrap_or(false)
}
