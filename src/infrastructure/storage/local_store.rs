use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use bytes::Bytes;
use futures::StreamExt;
use futures::stream::BoxStream;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{MultipartUpload, ObjectStore, PutPayload};

use crate::application::ports::{StagingStore, StagingStoreError};
use crate::domain::StoragePath;

/// Upload directory on the local filesystem.
pub struct LocalStagingStore {
    inner: Arc<LocalFileSystem>,
    upload_dir: PathBuf,
}

impl LocalStagingStore {
    pub fn new(upload_dir: PathBuf) -> Result<Self, StagingStoreError> {
        std::fs::create_dir_all(&upload_dir)?;
        // LocalFileSystem canonicalizes its prefix; resolve() must agree with it.
        let upload_dir = std::fs::canonicalize(&upload_dir)?;
        let fs = LocalFileSystem::new_with_prefix(&upload_dir)
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        tracing::debug!(upload_dir = %upload_dir.display(), "Local staging store ready");

        Ok(Self {
            inner: Arc::new(fs),
            upload_dir,
        })
    }

    pub fn upload_dir(&self) -> &Path {
        &self.upload_dir
    }

    fn key(path: &StoragePath) -> StorePath {
        StorePath::from(path.as_str())
    }
}

#[async_trait::async_trait]
impl StagingStore for LocalStagingStore {
    async fn store(
        &self,
        path: &StoragePath,
        mut stream: BoxStream<'_, Result<Bytes, io::Error>>,
        content_length: Option<u64>,
    ) -> Result<u64, StagingStoreError> {
        let mut upload = self
            .inner
            .put_multipart(&Self::key(path))
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        let mut written: u64 = 0;

        while let Some(chunk) = stream.next().await {
            let part = match chunk {
                Ok(part) => part,
                Err(e) => {
                    let _ = upload.abort().await;
                    return Err(StagingStoreError::Io(e));
                }
            };
            written += part.len() as u64;
            if let Err(e) = upload.put_part(PutPayload::from(part)).await {
                let _ = upload.abort().await;
                return Err(StagingStoreError::UploadFailed(e.to_string()));
            }
        }

        if let Some(expected) = content_length {
            if expected != written {
                let _ = upload.abort().await;
                return Err(StagingStoreError::UploadFailed(format!(
                    "expected {expected} bytes for {path}, received {written}"
                )));
            }
        }

        upload
            .complete()
            .await
            .map_err(|e| StagingStoreError::UploadFailed(e.to_string()))?;

        Ok(written)
    }

    async fn delete(&self, path: &StoragePath) -> Result<(), StagingStoreError> {
        self.inner
            .delete(&Self::key(path))
            .await
            .map_err(|e| StagingStoreError::DeleteFailed(e.to_string()))
    }

    fn resolve(&self, path: &StoragePath) -> PathBuf {
        self.upload_dir.join(path.as_str())
    }
}
