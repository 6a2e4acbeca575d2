use std::sync::Arc;

use crate::application::ports::{
    DocumentStore, DocumentStoreError, LlmClient, LlmClientError, TextExtractor,
    TextExtractorError,
};
use crate::domain::{StoredName, TaxExtraction};

/// Orchestrates a single document analysis: fetch the stored file, extract
/// its text, prompt the model, and parse the response into the fixed
/// extraction shape. One model call per request, no retry.
pub struct AnalysisService<D, X, L>
where
    D: DocumentStore,
    X: TextExtractor,
    L: LlmClient,
{
    store: Arc<D>,
    extractor: Arc<X>,
    llm: Arc<L>,
}

impl<D, X, L> AnalysisService<D, X, L>
where
    D: DocumentStore,
    X: TextExtractor,
    L: LlmClient,
{
    pub fn new(store: Arc<D>, extractor: Arc<X>, llm: Arc<L>) -> Self {
        Self {
            store,
            extractor,
            llm,
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn analyze(&self, filename: &str) -> Result<TaxExtraction, AnalysisError> {
        let stored_name = StoredName::parse(filename).map_err(AnalysisError::InvalidFilename)?;

        let data = self.store.fetch(&stored_name).await.map_err(|e| match e {
            DocumentStoreError::NotFound(name) => AnalysisError::DocumentNotFound(name),
            other => AnalysisError::Store(other),
        })?;

        let text = self
            .extractor
            .extract_text(&data, stored_name.as_str())
            .await?;
        tracing::debug!(chars = text.len(), "Document text extracted");

        let prompt = build_extraction_prompt(&text);
        let response = self.llm.generate(&prompt).await?;

        let extraction = parse_extraction_response(&response)?;
        tracing::info!(regime = ?extraction.tax_regime, "Document analysis complete");

        Ok(extraction)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("invalid filename: {0}")]
    InvalidFilename(String),
    #[error("document not found: {0}")]
    DocumentNotFound(String),
    #[error("storage: {0}")]
    Store(DocumentStoreError),
    #[error("text extraction: {0}")]
    Extraction(#[from] TextExtractorError),
    #[error("model call: {0}")]
    Llm(#[from] LlmClientError),
    #[error("model response: {0}")]
    ResponseParse(#[from] ResponseParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ResponseParseError {
    #[error("no JSON object in model response")]
    NoJsonObject,
    #[error("malformed JSON in model response: {0}")]
    InvalidJson(String),
}

const EXTRACTION_INSTRUCTIONS: &str = r#"You are a tax document analyzer for Indian tax documents for FY 2024-2025.
Analyze the following text extracted from a tax document and extract the following information:

1. Income details:
   - Salary income
   - Business/Professional income
   - Capital gains
   - Income from house property
   - Income from other sources

2. Deduction details:
   - Section 80C investments (PPF, ELSS, etc.)
   - Section 80D (medical insurance)
   - HRA exemption
   - LTA exemption
   - NPS contribution
   - Home loan interest
   - Other deductions

3. Recommended tax regime (old or new) based on the extracted information

Format your response as a JSON object with the following structure:
{
  "incomeDetails": {
    "salaryIncome": number,
    "businessIncome": number,
    "capitalGains": number,
    "housePropertyIncome": number,
    "otherIncome": number
  },
  "deductionDetails": {
    "section80C": number,
    "section80D": number,
    "hra": number,
    "lta": number,
    "nps": number,
    "homeLoanInterest": number,
    "otherDeductions": number
  },
  "taxRegime": "old" or "new"
}

If you cannot determine a value, use 0. If you cannot determine the tax regime, use "old"."#;

pub fn build_extraction_prompt(document_text: &str) -> String {
    format!("{EXTRACTION_INSTRUCTIONS}\n\nDocument text:\n{document_text}")
}

/// Pull the structured result out of free-form model output.
///
/// Models routinely wrap the JSON in prose or a markdown fence, so the
/// outermost `{...}` span is located first (first `{` to last `}`). The
/// located span is then strictly deserialized; an ill-typed or truncated
/// object is rejected rather than patched up.
pub fn parse_extraction_response(raw: &str) -> Result<TaxExtraction, ResponseParseError> {
    let start = raw.find('{').ok_or(ResponseParseError::NoJsonObject)?;
    let end = raw.rfind('}').ok_or(ResponseParseError::NoJsonObject)?;
    if end < start {
        return Err(ResponseParseError::NoJsonObject);
    }

    serde_json::from_str(&raw[start..=end]).map_err(|e| ResponseParseError::InvalidJson(e.to_string()))
}
