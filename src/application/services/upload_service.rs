use std::io;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream;

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::{ContentType, Document, StoredName};

/// Multipart field name accepted by the upload endpoint. Generated stored
/// names are prefixed with it.
pub const UPLOAD_FIELD: &str = "documents";

pub struct UploadService<D>
where
    D: DocumentStore,
{
    store: Arc<D>,
    max_file_size_bytes: u64,
    max_files_per_request: usize,
}

impl<D> UploadService<D>
where
    D: DocumentStore,
{
    pub fn new(store: Arc<D>, max_file_size_bytes: u64, max_files_per_request: usize) -> Self {
        Self {
            store,
            max_file_size_bytes,
            max_files_per_request,
        }
    }

    pub fn max_files_per_request(&self) -> usize {
        self.max_files_per_request
    }

    /// Check a declared MIME type against the allow-list. The type is not
    /// verified against the file contents.
    pub fn validate_content_type(&self, mime: &str) -> Result<ContentType, UploadError> {
        ContentType::from_mime(mime).ok_or_else(|| UploadError::InvalidFileType(mime.to_string()))
    }

    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    pub async fn store_document(
        &self,
        original_name: &str,
        content_type: ContentType,
        data: Bytes,
    ) -> Result<Document, UploadError> {
        if data.len() as u64 > self.max_file_size_bytes {
            return Err(UploadError::FileTooLarge {
                size_bytes: data.len() as u64,
                limit_bytes: self.max_file_size_bytes,
            });
        }

        let stored_name = StoredName::generate(UPLOAD_FIELD, original_name);
        let byte_stream = Box::pin(stream::iter(vec![Ok::<_, io::Error>(data)]));
        let size_bytes = self.store.store(&stored_name, byte_stream).await?;

        tracing::info!(stored_name = %stored_name, size_bytes, "Document stored");

        Ok(Document::new(
            stored_name,
            original_name.to_string(),
            content_type,
            size_bytes,
        ))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("disallowed content type: {0}")]
    InvalidFileType(String),
    #[error("file of {size_bytes} bytes exceeds the {limit_bytes} byte limit")]
    FileTooLarge { size_bytes: u64, limit_bytes: u64 },
    #[error("storage: {0}")]
    Store(#[from] DocumentStoreError),
}
