use async_trait::async_trait;
use chrono::Utc;
use tracing::warn;

use crate::media::application::ports::outgoing::ImageStore;
use crate::profile::application::ports::outgoing::ProfileRepository;
use crate::profile::domain::Photo;

const MAX_PHOTOS: usize = 6;

#[derive(Debug, Clone)]
pub enum UploadPhotoError {
    ProfileNotFound,
    PhotoLimitReached,
    StoreError(String),
}

#[async_trait]
pub trait IUploadPhotoUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, bytes: Vec<u8>) -> Result<Photo, UploadPhotoError>;
}

/// Pushes an image to the external store and appends it to the caller's
/// profile. The photo cap is re-checked after the upload; when it trips,
/// the freshly uploaded image is deleted again so the host holds no
/// orphan.
pub struct UploadPhotoUseCase<S, P>
where
    S: ImageStore,
    P: ProfileRepository,
{
    image_store: S,
    profile_repository: P,
}

impl<S, P> UploadPhotoUseCase<S, P>
where
    S: ImageStore,
    P: ProfileRepository,
{
    pub fn new(image_store: S, profile_repository: P) -> Self {
        Self {
            image_store,
            profile_repository,
        }
    }
}

#[async_trait]
impl<S, P> IUploadPhotoUseCase for UploadPhotoUseCase<S, P>
where
    S: ImageStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str, bytes: Vec<u8>) -> Result<Photo, UploadPhotoError> {
        let profile = self
            .profile_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| UploadPhotoError::StoreError(e.to_string()))?
            .ok_or(UploadPhotoError::ProfileNotFound)?;

        let folder = format!("amora/users/{}", user_id);
        let stored = self
            .image_store
            .upload(bytes, &folder)
            .await
            .map_err(|e| UploadPhotoError::StoreError(e.to_string()))?;

        if profile.photos.len() >= MAX_PHOTOS {
            // Compensating delete keeps the host free of orphans.
            if let Err(e) = self.image_store.delete(&stored.public_id).await {
                warn!(public_id = %stored.public_id, error = %e, "orphaned image after limit rejection");
            }
            return Err(UploadPhotoError::PhotoLimitReached);
        }

        let photo = Photo {
            url: stored.url,
            storage_id: stored.public_id,
            uploaded_at: Utc::now(),
        };

        self.profile_repository
            .push_photo(user_id, photo.clone())
            .await
            .map_err(|e| UploadPhotoError::StoreError(e.to_string()))?;

        Ok(photo)
    }
}
