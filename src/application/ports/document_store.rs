use std::io;

use bytes::Bytes;
use futures::stream::BoxStream;

use crate::domain::StoredName;

/// Persistence for uploaded documents. Files live under a single uploads
/// directory until externally cleaned up; there is no deletion operation.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    /// Write the byte stream under `name`, returning the number of bytes
    /// persisted.
    async fn store(
        &self,
        name: &StoredName,
        stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, DocumentStoreError>;

    /// Read back a previously stored document in full.
    async fn fetch(&self, name: &StoredName) -> Result<Vec<u8>, DocumentStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("document not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}
