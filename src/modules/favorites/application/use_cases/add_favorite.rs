use async_trait::async_trait;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::favorites::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};

#[derive(Debug, Clone)]
pub enum AddFavoriteError {
    AdNotFound,
    OwnAd,
    AlreadyFavorited,
    RepositoryError(String),
}

#[async_trait]
pub trait IAddFavoriteUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<(), AddFavoriteError>;
}

/// Saves a listing. Rejects inactive/missing ads, the caller's own ads,
/// and duplicates. The exists pre-check is advisory: when two adds race,
/// the store's unique (user, ad) index decides, and its duplicate-key
/// rejection is reported exactly like the pre-check hit.
pub struct AddFavoriteUseCase<R, A>
where
    R: FavoriteRepository,
    A: AdQuery,
{
    favorite_repository: R,
    ad_query: A,
}

impl<R, A> AddFavoriteUseCase<R, A>
where
    R: FavoriteRepository,
    A: AdQuery,
{
    pub fn new(favorite_repository: R, ad_query: A) -> Self {
        Self {
            favorite_repository,
            ad_query,
        }
    }
}

#[async_trait]
impl<R, A> IAddFavoriteUseCase for AddFavoriteUseCase<R, A>
where
    R: FavoriteRepository + Send + Sync,
    A: AdQuery + Send + Sync,
{
    async fn execute(&self, user_id: &str, ad_id: &str) -> Result<(), AddFavoriteError> {
        let ad = self
            .ad_query
            .find_active_by_id(ad_id)
            .await
            .map_err(|e| AddFavoriteError::RepositoryError(e.to_string()))?
            .ok_or(AddFavoriteError::AdNotFound)?;

        if ad.user_id == user_id {
            return Err(AddFavoriteError::OwnAd);
        }

        let already = self
            .favorite_repository
            .exists(user_id, ad_id)
            .await
            .map_err(|e| AddFavoriteError::RepositoryError(e.to_string()))?;
        if already {
            return Err(AddFavoriteError::AlreadyFavorited);
        }

        self.favorite_repository
            .insert(user_id, ad_id)
            .await
            .map_err(|e| match e {
                FavoriteRepositoryError::Duplicate => AddFavoriteError::AlreadyFavorited,
                other => AddFavoriteError::RepositoryError(other.to_string()),
            })
    }
}
