use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ImageStoreError {
    #[error("image upload failed: {0}")]
    UploadFailed(String),
    #[error("image deletion failed: {0}")]
    DeleteFailed(String),
}

/// A hosted image as the external store reports it back.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredImage {
    pub url: String,
    pub public_id: String,
}

/// External image-hosting collaborator. The backend never stores image
/// bytes itself, only URLs plus the host-side ids needed for deletion.
#[async_trait]
pub trait ImageStore: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, folder: &str) -> Result<StoredImage, ImageStoreError>;
    async fn delete(&self, public_id: &str) -> Result<(), ImageStoreError>;
}
