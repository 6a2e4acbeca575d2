use taxdoc::application::ports::{TextExtractor, TextExtractorError};
use taxdoc::infrastructure::text_processing::PdfAdapter;

#[tokio::test]
async fn given_non_pdf_extension_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(b"some data", "scan.png").await;

    assert!(matches!(
        result,
        Err(TextExtractorError::UnsupportedFileType(_))
    ));
}

#[tokio::test]
async fn given_name_without_extension_when_extracting_then_returns_unsupported() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(b"some data", "README").await;

    assert!(matches!(
        result,
        Err(TextExtractorError::UnsupportedFileType(_))
    ));
}

#[tokio::test]
async fn given_corrupt_bytes_when_extracting_then_returns_extraction_failed() {
    let adapter = PdfAdapter::new();

    let result = adapter.extract_text(b"not a pdf at all", "corrupt.pdf").await;

    assert!(matches!(
        result,
        Err(TextExtractorError::ExtractionFailed(_))
    ));
}

#[tokio::test]
async fn given_uppercase_extension_when_extracting_then_passes_the_extension_gate() {
    let adapter = PdfAdapter::new();

    // Garbage bytes under an upper-case name: the failure must come from the
    // parser, not from the extension check.
    let result = adapter.extract_text(b"garbage", "SCAN.PDF").await;

    assert!(matches!(
        result,
        Err(TextExtractorError::ExtractionFailed(_))
    ));
}
