use async_trait::async_trait;

use crate::ads::application::ports::outgoing::{AdRepository, AdRepositoryError};

#[derive(Debug, Clone)]
pub enum DeleteAdError {
    AdNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAdUseCase: Send + Sync {
    async fn execute(&self, ad_id: &str, owner_id: &str) -> Result<(), DeleteAdError>;
}

/// Soft delete: the listing is deactivated, never removed, so existing
/// messages and favorites keep a referent (which list views then filter).
pub struct DeleteAdUseCase<R>
where
    R: AdRepository,
{
    ad_repository: R,
}

impl<R> DeleteAdUseCase<R>
where
    R: AdRepository,
{
    pub fn new(ad_repository: R) -> Self {
        Self { ad_repository }
    }
}

#[async_trait]
impl<R> IDeleteAdUseCase for DeleteAdUseCase<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, ad_id: &str, owner_id: &str) -> Result<(), DeleteAdError> {
        self.ad_repository
            .deactivate(ad_id, owner_id)
            .await
            .map_err(|e| match e {
                AdRepositoryError::NotFound => DeleteAdError::AdNotFound,
                other => DeleteAdError::RepositoryError(other.to_string()),
            })
    }
}
