use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::profile::domain::{Photo, Profile};

#[derive(Debug, Clone, Error)]
pub enum ProfileRepositoryError {
    #[error("profile not found")]
    NotFound,
    #[error("store failure: {0}")]
    StoreError(String),
}

/// Partial profile write. Only supplied fields are applied; everything
/// else on the stored document is left untouched. Photos are managed
/// exclusively through the media module.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileDraft {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub phone_number: Option<String>,
    pub height: Option<i32>,
    pub education: Option<String>,
    pub smoking_habit: Option<String>,
    pub drinking_habit: Option<String>,
    pub fitness_level: Option<String>,
    pub diet: Option<String>,
    pub pet_preference: Option<String>,
    pub introvert_extrovert: Option<String>,
    pub spontaneous_planned: Option<String>,
    pub creative_analytical: Option<String>,
    pub relationship_type: Option<String>,
    pub wants_children: Option<String>,
    pub religion_importance: Option<String>,
    pub political_alignment: Option<String>,
    pub interests: Option<Vec<String>>,
    pub partner_age_min: Option<i32>,
    pub partner_age_max: Option<i32>,
    pub partner_gender: Option<String>,
    pub deal_breakers: Option<Vec<String>>,
    pub bio: Option<String>,
}

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: &str) -> Result<Option<Profile>, ProfileRepositoryError>;

    /// Merge-upsert keyed by the owning user: supplied draft fields are
    /// `$set`, the rest survive; the document is created on first write.
    /// Returns the post-merge state.
    async fn upsert(
        &self,
        user_id: &str,
        draft: ProfileDraft,
    ) -> Result<Profile, ProfileRepositoryError>;

    async fn set_profile_complete(
        &self,
        user_id: &str,
        complete: bool,
    ) -> Result<(), ProfileRepositoryError>;

    async fn delete_by_user(&self, user_id: &str) -> Result<bool, ProfileRepositoryError>;

    async fn push_photo(&self, user_id: &str, photo: Photo) -> Result<(), ProfileRepositoryError>;

    async fn pull_photo(
        &self,
        user_id: &str,
        storage_id: &str,
    ) -> Result<(), ProfileRepositoryError>;
}
