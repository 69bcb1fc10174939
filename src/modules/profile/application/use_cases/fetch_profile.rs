use async_trait::async_trait;

use crate::profile::application::ports::outgoing::{ProfileRepository, ProfileRepositoryError};
use crate::profile::domain::Profile;

#[derive(Debug, Clone)]
pub enum FetchProfileError {
    ProfileNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait IFetchProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<Profile, FetchProfileError>;
}

pub struct FetchProfileUseCase<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> FetchProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> IFetchProfileUseCase for FetchProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<Profile, FetchProfileError> {
        self.profile_repository
            .find_by_user(user_id)
            .await
            .map_err(|e| match e {
                ProfileRepositoryError::NotFound => FetchProfileError::ProfileNotFound,
                other => FetchProfileError::RepositoryError(other.to_string()),
            })?
            .ok_or(FetchProfileError::ProfileNotFound)
    }
}
