use async_trait::async_trait;

use crate::profile::application::ports::outgoing::ProfileRepository;

#[derive(Debug, Clone)]
pub enum DeleteProfileError {
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteProfileUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<(), DeleteProfileError>;
}

/// Removes the Profile document and nothing else; the account survives,
/// and ads, messages or favorites referencing the user are untouched.
pub struct DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    profile_repository: R,
}

impl<R> DeleteProfileUseCase<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repository: R) -> Self {
        Self { profile_repository }
    }
}

#[async_trait]
impl<R> IDeleteProfileUseCase for DeleteProfileUseCase<R>
where
    R: ProfileRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<(), DeleteProfileError> {
        // Deleting a profile that does not exist is reported as success.
        self.profile_repository
            .delete_by_user(user_id)
            .await
            .map_err(|e| DeleteProfileError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
