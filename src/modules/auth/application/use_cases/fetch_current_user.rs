use async_trait::async_trait;

use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::domain::AuthUserInfo;

#[derive(Debug, Clone)]
pub enum FetchCurrentUserError {
    UserNotFound,
    QueryError(String),
}

#[async_trait]
pub trait IFetchCurrentUserUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<AuthUserInfo, FetchCurrentUserError>;
}

pub struct FetchCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    user_query: Q,
}

impl<Q> FetchCurrentUserUseCase<Q>
where
    Q: UserQuery,
{
    pub fn new(user_query: Q) -> Self {
        Self { user_query }
    }
}

#[async_trait]
impl<Q> IFetchCurrentUserUseCase for FetchCurrentUserUseCase<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<AuthUserInfo, FetchCurrentUserError> {
        let user = self
            .user_query
            .find_by_id(user_id)
            .await
            .map_err(FetchCurrentUserError::QueryError)?
            .ok_or(FetchCurrentUserError::UserNotFound)?;

        Ok(AuthUserInfo::from(&user))
    }
}
