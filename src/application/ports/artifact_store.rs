use async_trait::async_trait;

/// Transient handoff store for encoded result files, keyed by a generated
/// token. Artifacts live only long enough for the caller to fetch them;
/// expiry scheduling is a storage-lifecycle concern outside this port.
#[async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn put(&self, key: &str, data: Vec<u8>) -> Result<(), ArtifactStoreError>;

    async fn get(&self, key: &str) -> Result<Vec<u8>, ArtifactStoreError>;

    async fn delete(&self, key: &str) -> Result<(), ArtifactStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ArtifactStoreError {
    #[error("upload failed: {0}")]
    UploadFailed(String),
    #[error("artifact not found: {0}")]
    NotFound(String),
    #[error("download failed: {0}")]
    DownloadFailed(String),
    #[error("delete failed: {0}")]
    DeleteFailed(String),
}
