use async_trait::async_trait;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::ads::domain::Ad;

#[derive(Debug, Clone)]
pub enum ListMyAdsError {
    QueryError(String),
}

#[async_trait]
pub trait IListMyAdsUseCase: Send + Sync {
    async fn execute(&self, owner_id: &str) -> Result<Vec<Ad>, ListMyAdsError>;
}

pub struct ListMyAdsUseCase<Q>
where
    Q: AdQuery,
{
    ad_query: Q,
}

impl<Q> ListMyAdsUseCase<Q>
where
    Q: AdQuery,
{
    pub fn new(ad_query: Q) -> Self {
        Self { ad_query }
    }
}

#[async_trait]
impl<Q> IListMyAdsUseCase for ListMyAdsUseCase<Q>
where
    Q: AdQuery + Send + Sync,
{
    async fn execute(&self, owner_id: &str) -> Result<Vec<Ad>, ListMyAdsError> {
        self.ad_query
            .find_active_by_owner(owner_id)
            .await
            .map_err(|e| ListMyAdsError::QueryError(e.to_string()))
    }
}
