use async_trait::async_trait;

use crate::ads::application::ports::outgoing::AdRepository;
use crate::ads::domain::Ad;

#[derive(Debug, Clone)]
pub enum FetchAdError {
    AdNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchAdUseCase: Send + Sync {
    async fn execute(&self, ad_id: &str) -> Result<Ad, FetchAdError>;
}

/// Public detail fetch. Every hit bumps the ad's view counter in the same
/// store round trip; the count is best-effort under concurrency.
pub struct FetchAdUseCase<R>
where
    R: AdRepository,
{
    ad_repository: R,
}

impl<R> FetchAdUseCase<R>
where
    R: AdRepository,
{
    pub fn new(ad_repository: R) -> Self {
        Self { ad_repository }
    }
}

#[async_trait]
impl<R> IFetchAdUseCase for FetchAdUseCase<R>
where
    R: AdRepository + Send + Sync,
{
    async fn execute(&self, ad_id: &str) -> Result<Ad, FetchAdError> {
        self.ad_repository
            .increment_views(ad_id)
            .await
            .map_err(|e| FetchAdError::RepositoryError(e.to_string()))?
            .ok_or(FetchAdError::AdNotFound)
    }
}
