use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};

use super::text_sanitizer::sanitize_extracted_text;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Text extraction for `.pdf` files. Every other extension is reported as
/// unsupported; the process endpoint turns that into a 400.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_from_bytes(data: &[u8]) -> Result<String, TextExtractorError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}")))
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract_text(
        &self,
        data: &[u8],
        source_name: &str,
    ) -> Result<String, TextExtractorError> {
        if !source_name.to_ascii_lowercase().ends_with(".pdf") {
            return Err(TextExtractorError::UnsupportedFileType(
                source_name.to_string(),
            ));
        }

        let owned = data.to_vec();
        let raw = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_from_bytes(&owned)),
        )
        .await
        .map_err(|_| TextExtractorError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| TextExtractorError::ExtractionFailed(format!("task join error: {e}")))??;

        let text = sanitize_extracted_text(&raw);
        if text.is_empty() {
            return Err(TextExtractorError::NoTextFound(source_name.to_string()));
        }

        tracing::info!(chars = text.len(), "PDF text extraction complete");

        Ok(text)
    }
}
