use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{
    MatchPreferences, ProfileQuery, ProfileRepository,
};
use crate::profile::domain::Profile;

// Fallback partner-age window when the requester never set one.
const DEFAULT_PARTNER_AGE_MIN: i32 = 18;
const DEFAULT_PARTNER_AGE_MAX: i32 = 100;

#[derive(Debug, Clone)]
pub enum SuggestMatchesError {
    ProfileNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ISuggestMatchesUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<Vec<Profile>, SuggestMatchesError>;
}

/// Convenience suggestion driven purely by the requester's own partner
/// criteria; takes no caller-supplied filters.
pub struct SuggestMatchesUseCase<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    profile_repository: R,
    profile_query: Q,
}

impl<R, Q> SuggestMatchesUseCase<R, Q>
where
    R: ProfileRepository,
    Q: ProfileQuery,
{
    pub fn new(profile_repository: R, profile_query: Q) -> Self {
        Self {
            profile_repository,
            profile_query,
        }
    }
}

#[async_trait]
impl<R, Q> ISuggestMatchesUseCase for SuggestMatchesUseCase<R, Q>
where
    R: ProfileRepository + Send + Sync,
    Q: ProfileQuery + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<Vec<Profile>, SuggestMatchesError> {
        let own_profile = self
            .profile_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| SuggestMatchesError::RepositoryError(e.to_string()))?
            .ok_or(SuggestMatchesError::ProfileNotFound)?;

        let preferences = MatchPreferences {
            exclude_user_id: user_id.to_string(),
            gender: own_profile.partner_gender.clone(),
            min_age: own_profile.partner_age_min.unwrap_or(DEFAULT_PARTNER_AGE_MIN),
            max_age: own_profile.partner_age_max.unwrap_or(DEFAULT_PARTNER_AGE_MAX),
        };

        self.profile_query
            .find_matches(&preferences)
            .await
            .map_err(|e| SuggestMatchesError::RepositoryError(e.to_string()))
    }
}
