use async_trait::async_trait;

use crate::messaging::application::ports::outgoing::MessageQuery;

#[derive(Debug, Clone)]
pub enum UnreadCountError {
    QueryError(String),
}

#[async_trait]
pub trait IUnreadCountUseCase: Send + Sync {
    async fn execute(&self, user_id: &str) -> Result<u64, UnreadCountError>;
}

/// Badge counter: total unread messages addressed to the user.
pub struct UnreadCountUseCase<Q>
where
    Q: MessageQuery,
{
    message_query: Q,
}

impl<Q> UnreadCountUseCase<Q>
where
    Q: MessageQuery,
{
    pub fn new(message_query: Q) -> Self {
        Self { message_query }
    }
}

#[async_trait]
impl<Q> IUnreadCountUseCase for UnreadCountUseCase<Q>
where
    Q: MessageQuery + Send + Sync,
{
    async fn execute(&self, user_id: &str) -> Result<u64, UnreadCountError> {
        self.message_query
            .count_unread(user_id)
            .await
            .map_err(UnreadCountError::QueryError)
    }
}
