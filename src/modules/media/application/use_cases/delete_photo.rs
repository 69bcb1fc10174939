use async_trait::async_trait;

use crate::media::application::ports::outgoing::ImageStore;
use crate::profile::application::ports::outgoing::ProfileRepository;

#[derive(Debug, Clone)]
pub enum DeletePhotoError {
    ProfileNotFound,
    PhotoNotFound,
    StoreError(String),
}

#[async_trait]
pub trait IDeletePhotoUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, storage_id: &str) -> Result<(), DeletePhotoError>;
}

/// Removes a photo from the external host first, then from the profile,
/// so a host failure never leaves the profile pointing at a deleted image.
pub struct DeletePhotoUseCase<S, P>
where
    S: ImageStore,
    P: ProfileRepository,
{
    image_store: S,
    profile_repository: P,
}

impl<S, P> DeletePhotoUseCase<S, P>
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
impl<S, P> IDeletePhotoUseCase for DeletePhotoUseCase<S, P>
where
    S: ImageStore + Send + Sync,
    P: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str, storage_id: &str) -> Result<(), DeletePhotoError> {
        let profile = self
            .profile_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| DeletePhotoError::StoreError(e.to_string()))?
            .ok_or(DeletePhotoError::ProfileNotFound)?;

        let owned = profile
            .photos
            .iter()
            .any(|photo| photo.storage_id == storage_id);
        if !owned {
            return Err(DeletePhotoError::PhotoNotFound);
        }

        self.image_store
            .delete(storage_id)
            .await
            .map_err(|e| DeletePhotoError::StoreError(e.to_string()))?;

        self.profile_repository
            .pull_photo(user_id, storage_id)
            .await
            .map_err(|e| DeletePhotoError::StoreError(e.to_string()))?;

        Ok(())
    }
}
