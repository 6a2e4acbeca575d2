use async_trait::async_trait;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Extract plain text from the raw bytes of `source_name`.
    async fn extract_text(
        &self,
        data: &[u8],
        source_name: &str,
    ) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported file type: {0}")]
    UnsupportedFileType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no extractable text in {0}")]
    NoTextFound(String),
}
