use crate::auth::domain::User;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    #[error("email already registered")]
    DuplicateEmail,
    #[error("user not found")]
    NotFound,
    #[error("store failure: {0}")]
    StoreError(String),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Inserts a new account. The store's unique index on the email is the
    /// actual safety net against concurrent registrations; a duplicate-key
    /// failure surfaces as `DuplicateEmail`.
    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, UserRepositoryError>;

    async fn set_last_login(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError>;

    /// Hard-deletes the User document only; owned records are left behind.
    async fn delete(&self, user_id: &str) -> Result<bool, UserRepositoryError>;
}
