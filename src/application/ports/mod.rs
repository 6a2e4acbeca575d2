mod document_store;
mod llm_client;
mod text_extractor;

pub use document_store::{DocumentStore, DocumentStoreError};
pub use llm_client::{LlmClient, LlmClientError};
pub use text_extractor::{TextExtractor, TextExtractorError};
