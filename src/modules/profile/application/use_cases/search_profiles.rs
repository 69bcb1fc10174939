use async_trait::async_trait;

use crate::profile::application::ports::outgoing::ProfileQuery;
use crate::profile::domain::Profile;
use crate::shared::search::{CriteriaError, ProfileSearchCriteria, ProfileSearchRequest};

#[derive(Debug, Clone)]
pub enum ProfileSearchError {
    Validation(CriteriaError),
    QueryError(String),
}

#[async_trait]
pub trait ISearchProfilesUseCase: Send + Sync {
    async fn execute(&self, request: ProfileSearchRequest)
        -> Result<Vec<Profile>, ProfileSearchError>;
}

pub struct SearchProfilesUseCase<Q>
where
    Q: ProfileQuery,
{
    profile_query: Q,
}

impl<Q> SearchProfilesUseCase<Q>
where
    Q: ProfileQuery,
{
    pub fn new(profile_query: Q) -> Self {
        Self { profile_query }
    }
}

#[async_trait]
impl<Q> ISearchProfilesUseCase for SearchProfilesUseCase<Q>
where
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(
        &self,
        request: ProfileSearchRequest,
    ) -> Result<Vec<Profile>, ProfileSearchError> {
        // Validation happens before any store round trip.
        let criteria = ProfileSearchCriteria::from_request(request)
            .map_err(ProfileSearchError::Validation)?;

        self.profile_query
            .search(&criteria)
            .await
            .map_err(|e| ProfileSearchError::QueryError(e.to_string()))
    }
}
