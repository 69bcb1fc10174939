use async_trait::async_trait;
use thiserror::Error;

use crate::ads::domain::Ad;
use crate::shared::search::AdSearchCriteria;

#[derive(Debug, Clone, Error)]
pub enum AdQueryError {
    #[error("store failure: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait AdQuery: Send + Sync {
    /// Active ads only; inactive ads are invisible here.
    async fn find_active_by_id(&self, ad_id: &str) -> Result<Option<Ad>, AdQueryError>;

    /// The owner's active ads, newest first.
    async fn find_active_by_owner(&self, owner_id: &str) -> Result<Vec<Ad>, AdQueryError>;

    /// Batch lookup for denormalized contexts (conversation summaries,
    /// favorites). Returns ads regardless of `active`; unknown ids are
    /// silently absent.
    async fn find_by_ids(&self, ad_ids: &[String]) -> Result<Vec<Ad>, AdQueryError>;

    /// Criteria search over active ads, newest first, capped at 50.
    async fn search(&self, criteria: &AdSearchCriteria) -> Result<Vec<Ad>, AdQueryError>;
}
