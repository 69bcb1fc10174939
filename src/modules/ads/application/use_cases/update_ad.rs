use async_trait::async_trait;

use crate::ads::application::ports::outgoing::{AdRepository, AdRepositoryError, UpdateAdData};
use crate::ads::domain::Ad;

#[derive(Debug, Clone)]
pub enum UpdateAdError {
    AdNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IUpdateAdUseCase: Send + Sync {
    async fn execute(
        &self,
        ad_id: &str,
        owner_id: &str,
        data: UpdateAdData,
    ) -> Result<Ad, UpdateAdError>;
}

pub struct UpdateAdUseCase<R>
where
    R: AdRepository,
{
    ad_repository: R,
}

impl<R> UpdateAdUseCase<R>
where
    R: AdRepository,
{
    pub fn new(ad_repository: R) -> Self {
        Self { ad_repository }
    }
}

#[async_trait]
impl<R> IUpdateAdUseCase for UpdateAdUseCase<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(
        &self,
        ad_id: &str,
        owner_id: &str,
        data: UpdateAdData,
    ) -> Result<Ad, UpdateAdError> {
        // An ad owned by someone else is indistinguishable from a missing
        // one: the caller only learns "not found".
        self.ad_repository
            .update(ad_id, owner_id, data)
            .await
            .map_err(|e| match e {
                AdRepositoryError::NotFound => UpdateAdError::AdNotFound,
                other => UpdateAdError::RepositoryError(other.to_string()),
            })
    }
}
