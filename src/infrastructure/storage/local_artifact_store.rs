use std::path::PathBuf;
use std::sync::Arc;

use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{ArtifactStore, ArtifactStoreError};

/// Filesystem-backed artifact store rooted at a single directory.
pub struct LocalArtifactStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalArtifactStore {
    pub fn new(base_path: PathBuf) -> Result<Self, ArtifactStoreError> {
        std::fs::create_dir_all(&base_path)
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl ArtifactStore for LocalArtifactStore {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), ArtifactStoreError> {
        let path = StorePath::from(key);
        self.inner
            .put(&path, PutPayload::from(data))
            .await
            .map_err(|e| ArtifactStoreError::UploadFailed(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Vec<u8>, ArtifactStoreError> {
        let path = StorePath::from(key);
        let result = match self.inner.get(&path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => {
                return Err(ArtifactStoreError::NotFound(key.to_string()));
            }
            Err(e) => return Err(ArtifactStoreError::DownloadFailed(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| ArtifactStoreError::DownloadFailed(e.to_string()))?;

        Ok(bytes.to_vec())
    }

    async fn delete(&self, key: &str) -> Result<(), ArtifactStoreError> {
        let path = StorePath::from(key);
        self.inner
            .delete(&path)
            .await
            .map_err(|e| ArtifactStoreError::DeleteFailed(e.to_string()))
    }
}
