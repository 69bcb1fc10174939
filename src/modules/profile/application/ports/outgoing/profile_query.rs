use async_trait::async_trait;
use thiserror::Error;

use crate::profile::domain::Profile;
use crate::shared::search::ProfileSearchCriteria;

/// Results are silently truncated at this many profiles; there is no
/// pagination cursor.
pub const MATCH_RESULT_LIMIT: i64 = 20;

#[derive(Debug, Clone, Error)]
pub enum ProfileQueryError {
    #[error("store failure: {0}")]
    StoreError(String),
}

/// Filter derived from the requester's own partner criteria, used by the
/// basic profile-to-profile suggestion. Distinct from the general search:
/// gender is matched by plain equality and no caller criteria exist.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchPreferences {
    pub exclude_user_id: String,
    pub gender: Option<String>,
    pub min_age: i32,
    pub max_age: i32,
}

#[async_trait]
pub trait ProfileQuery: Send + Sync {
    /// Criteria search over complete profiles, capped at 50, store order.
    async fn search(
        &self,
        criteria: &ProfileSearchCriteria,
    ) -> Result<Vec<Profile>, ProfileQueryError>;

    /// Partner-preference suggestion, capped at `MATCH_RESULT_LIMIT`.
    async fn find_matches(
        &self,
        preferences: &MatchPreferences,
    ) -> Result<Vec<Profile>, ProfileQueryError>;
}
