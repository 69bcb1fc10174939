use async_trait::async_trait;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::ads::domain::Ad;
use crate::shared::search::{AdSearchCriteria, AdSearchRequest, CriteriaError};

#[derive(Debug, Clone)]
pub enum AdSearchError {
    Validation(CriteriaError),
    QueryError(String),
}

#[async_trait]
pub trait ISearchAdsUseCase: Send + Sync {
    async fn execute(&self, request: AdSearchRequest) -> Result<Vec<Ad>, AdSearchError>;
}

pub struct SearchAdsUseCase<Q>
where
    Q: AdQuery,
{
    ad_query: Q,
}

impl<Q> SearchAdsUseCase<Q>
where
    Q: AdQuery,
{
    pub fn new(ad_query: Q) -> Self {
        Self { ad_query }
    }
}

#[async_trait]
impl<Q> ISearchAdsUseCase for SearchAdsUseCase<Q>
where
    Q: AdQuery + Send + Sync,
{
    async fn execute(&self, request: AdSearchRequest) -> Result<Vec<Ad>, AdSearchError> {
        // Validation happens before any store round trip.
        let criteria =
            AdSearchCriteria::from_request(request).map_err(AdSearchError::Validation)?;

        self.ad_query
            .search(&criteria)
            .await
            .map_err(|e| AdSearchError::QueryError(e.to_string()))
    }
}
