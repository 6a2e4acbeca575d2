use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use futures::stream::BoxStream;
use futures::StreamExt;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{DocumentStore, DocumentStoreError};
use crate::domain::StoredName;

/// Filesystem-backed document store rooted at the uploads directory.
pub struct LocalDocumentStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalDocumentStore {
    /// Open the store, creating the uploads directory recursively if absent.
    pub fn new(base_path: PathBuf) -> Result<Self, DocumentStoreError> {
        std::fs::create_dir_all(&base_path).map_err(DocumentStoreError::Io)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl DocumentStore for LocalDocumentStore {
    async fn store(
        &self,
        name: &StoredName,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
    ) -> Result<u64, DocumentStoreError> {
        let store_path = StorePath::from(name.as_str());
        let mut upload = self
            .inner
            .put_multipart(&store_path)
            .await
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;

        let mut total_bytes: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let bytes = match chunk {
                Ok(b) => b,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(DocumentStoreError::Io(e));
                }
            };
            total_bytes += bytes.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(bytes)).await {
                let _ = upload.abort().await;
                return Err(DocumentStoreError::UploadFailed(e.to_string()));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| DocumentStoreError::UploadFailed(e.to_string()))?;

        Ok(total_bytes)
    }

    async fn fetch(&self, name: &StoredName) -> Result<Vec<u8>, DocumentStoreError> {
        let store_path = StorePath::from(name.as_str());
        let result = match self.inner.get(&store_path).await {
            Ok(r) => r,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(DocumentStoreError::NotFound(name.as_str().to_string()));
            }
            Err(e) => return Err(DocumentStoreError::DownloadFailed(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| DocumentStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}
