use async_trait::async_trait;

use crate::favorites::application::ports::outgoing::FavoriteRepository;

#[derive(Debug, Clone)]
pub enum CheckFavoriteError {
    RepositoryError(String),
}

#[async_trait]
pub trait ICheckFavoriteUseCase: Send + Sync {
    /// Plain existence flag; "not favorited" is a false, never an error.
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<bool, CheckFavoriteError>;
}

pub struct CheckFavoriteUseCase<R>
where
    R: FavoriteRepository,
{
    favorite_repository: R,
}

impl<R> CheckFavoriteUseCase<R>
where
    R: FavoriteRepository,
{
    pub fn new(favorite_repository: R) -> Self {
        Self { favorite_repository }
    }
}

#[async_trait]
impl<R> ICheckFavoriteUseCase for CheckFavoriteUseCase<R>
where
    R: FavoriteRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<bool, CheckFavoriteError> {
        self.favorite_repository
            .exists(user_id, ad_id)
            .await
            .map_err(|e| CheckFavoriteError::RepositoryError(e.to_string()))
    }
}
