use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::ads::domain::Ad;
use crate::profile::domain::Photo;

#[derive(Debug, Clone, Error)]
pub enum AdRepositoryError {
    #[error("ad not found")]
    NotFound,
    #[error("store failure: {0}")]
    StoreError(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAdData {
    pub title: String,
    pub bio: String,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub country: String,
    pub city: Option<String>,
    pub phone_number: String,
    pub relationship_type: String,
    #[serde(default)]
    pub interests: Vec<String>,
    pub has_children: Option<String>,
    pub wants_children: Option<String>,
    pub education: Option<String>,
    pub height: Option<i32>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub religion: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub body_type: Option<String>,
    pub relationship_status: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

/// Partial ad update; only supplied fields are applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAdData {
    pub title: Option<String>,
    pub bio: Option<String>,
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub phone_number: Option<String>,
    pub relationship_type: Option<String>,
    pub interests: Option<Vec<String>>,
    pub has_children: Option<String>,
    pub wants_children: Option<String>,
    pub education: Option<String>,
    pub height: Option<i32>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub religion: Option<String>,
    pub languages: Option<Vec<String>>,
    pub body_type: Option<String>,
    pub relationship_status: Option<String>,
    pub photos: Option<Vec<Photo>>,
}

#[async_trait]
pub trait AdRepository: Send + Sync {
    /// Creates the ad active with a zeroed view counter.
    async fn insert(&self, user_id: &str, data: CreateAdData) -> Result<Ad, AdRepositoryError>;

    /// Owner-scoped merge update; `NotFound` covers both a missing ad and
    /// an ad belonging to someone else.
    async fn update(
        &self,
        ad_id: &str,
        owner_id: &str,
        data: UpdateAdData,
    ) -> Result<Ad, AdRepositoryError>;

    /// Soft delete: flips `active` to false, never removes the document.
    async fn deactivate(&self, ad_id: &str, owner_id: &str) -> Result<(), AdRepositoryError>;

    /// Atomically bumps the view counter of an active ad and returns the
    /// updated document. Best-effort: concurrent fetches may interleave.
    async fn increment_views(&self, ad_id: &str) -> Result<Option<Ad>, AdRepositoryError>;
}
