use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{ProfileDraft, ProfileRepository};
use crate::profile::domain::Profile;

#[derive(Debug, Clone)]
pub enum SaveProfileError {
    RepositoryError(String),
}

#[async_trait]
pub trait ISaveProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: &str, draft: ProfileDraft)
        -> Result<Profile, SaveProfileError>;
}

/// Merge-upserts the profile, then re-derives `profile_complete` from the
/// post-merge document: the flag is true exactly when name, age, gender
/// and country are all present after the write.
pub struct SaveProfileUseCase<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> SaveProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> ISaveProfileUseCase for SaveProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
        draft: ProfileDraft,
    ) -> Result<Profile, SaveProfileError> {
        let mut profile = self
            .profile_repository
            .upsert(user_id, draft)
            .await
            .map_err(|e| SaveProfileError::RepositoryError(e.to_string()))?;

        let complete = profile.meets_completion_requirements();
        if complete != profile.profile_complete {
            self.profile_repository
                .set_profile_complete(user_id, complete)
                .await
                .map_err(|e| SaveProfileError::RepositoryError(e.to_string()))?;
            profile.profile_complete = complete;
        }

        Ok(profile)
    }
}
