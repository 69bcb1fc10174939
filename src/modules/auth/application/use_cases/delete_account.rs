use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserRepository;

#[derive(Debug, Clone)]
pub enum DeleteAccountError {
    RepositoryError(String),
}

#[async_trait]
pub trait IDeleteAccountUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<(), DeleteAccountError>;
}

/// Hard-deletes the User document and nothing else. Profiles, ads,
/// messages and favorites owned by the account stay in the store;
/// the consumers of those records filter dangling references themselves.
pub struct DeleteAccountUseCase<R>
where
    R: UserRepository,
{
    user_repository: R,
}

impl<R> DeleteAccountUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repository: R) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl<R> IDeleteAccountUseCase for DeleteAccountUseCase<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<(), DeleteAccountError> {
        // Deleting an already-deleted account reports success, matching
        // the delete-by-id semantics of the store.
        self.user_repository
            .delete(user_id)
            .await
            .map_err(|e| DeleteAccountError::RepositoryError(e.to_string()))?;

        Ok(())
    }
}
