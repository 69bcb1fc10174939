use async_trait::async_trait;

use crate::favorites::application::ports::outgoing::FavoriteRepository;

#[derive(Debug, Clone)]
pub enum RemoveFavoriteError {
    NotFavorited,
    RepositoryError(String),
}

#[async_trait]
pub trait IRemoveFavoriteUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<(), RemoveFavoriteError>;
}

/// Deletion is not idempotent: removing a pair that is not saved
/// (including a second remove of the same pair) reports failure.
pub struct RemoveFavoriteUseCase<R>
where
    R: FavoriteRepository,
{
    favorite_repository: R,
}

impl<R> RemoveFavoriteUseCase<R>
where
    R: FavoriteRepository,
{
    pub fn new(favorite_repository: R) -> Self {
        Self { favorite_repository }
    }
}

#[async_trait]
impl<R> IRemoveFavoriteUseCase for RemoveFavoriteUseCase<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<(), RemoveFavoriteError> {
        let removed = self
            .favorite_repository
            .delete(user_id, ad_id)
            .await
            .map_err(|e| RemoveFavoriteError::RepositoryError(e.to_string()))?;

        if !removed {
            return Err(RemoveFavoriteError::NotFavorited);
        }

        Ok(())
    }
}
