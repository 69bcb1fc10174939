use async_trait::async_trait;
use thiserror::Error;

use crate::favorites::domain::FavoriteAd;

#[derive(Debug, Clone, Error)]
pub enum FavoriteRepositoryError {
    /// The unique (user, ad) index rejected the insert: the pair already
    /// exists, whether the pre-check saw it or a concurrent add won.
    #[error("favorite already exists")]
    Duplicate,
    #[error("store failure: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn insert(&self, user_id: &str, ad_id: &str) -> Result<(), FavoriteRepositoryError>;

    /// Removes the pair; false when there was nothing to remove.
    async fn delete(&self, user_id: &str, ad_id: &str) -> Result<bool, FavoriteRepositoryError>;

    /// The user's favorites, most recently saved first.
    async fn find_by_user(&self, user_id: &str)
        -> Result<Vec<FavoriteAd>, FavoriteRepositoryError>;

    async fn exists(&self, user_id: &str, ad_id: &str) -> Result<bool, FavoriteRepositoryError>;
}
