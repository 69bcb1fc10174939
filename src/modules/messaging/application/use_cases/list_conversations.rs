use async_trait::async_trait;
use std::collections::HashMap;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::messaging::application::ports::outgoing::MessageQuery;
use crate::messaging::application::services::{derive_conversations, AdContext};
use crate::messaging::domain::ConversationSummary;

#[derive(Debug, Clone)]
pub enum ListConversationsError {
    QueryError(String),
}

#[async_trait]
pub trait IListConversationsUseCase: Send + Sync {
    async fn execute(&self, user_id: &str)
        -> Result<Vec<ConversationSummary>, ListConversationsError>;
}

/// Loads the user's full message set plus the referenced listings and
/// counterpart accounts, then hands everything to the pure deriver.
/// Read-only: the per-call grouping state lives and dies inside the
/// derivation.
pub struct ListConversationsUseCase<M, A, U>
where
    M: MessageQuery,
    A: AdQuery,
    U: UserQuery,
{
    message_query: M,
    ad_query: A,
    user_query: U,
}

impl<M, A, U> ListConversationsUseCase<M, A, U>
where
    M: MessageQuery,
    A: AdQuery,
    U: UserQuery,
{
    pub fn new(message_query: M, ad_query: A, user_query: U) -> Self {
        Self {
            message_query,
            ad_query,
            user_query,
        }
    }
}

fn distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    values.filter(|v| seen.insert(v.clone())).collect()
}

#[async_trait]
impl<M, A, U> IListConversationsUseCase for ListConversationsUseCase<M, A, U>
where
    M: MessageQuery + Send + Sync,
    A: AdQuery + Send + Sync,
    U: UserQuery + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
        let messages = self
            .message_query
            .find_for_user(user_id)
            .await
            .map_err(ListConversationsError::QueryError)?;

        let ad_ids = distinct(messages.iter().map(|m| m.ad_id.clone()));
        let counterpart_ids = distinct(
            messages
                .iter()
                .map(|m| m.counterpart_of(user_id).to_string()),
        );

        let ads: HashMap<String, AdContext> = self
            .ad_query
            .find_by_ids(&ad_ids)
            .await
            .map_err(|e| ListConversationsError::QueryError(e.to_string()))?
            .iter()
            .map(|ad| (ad.id.clone(), AdContext::from(ad)))
            .collect();

        let emails: HashMap<String, String> = self
            .user_query
            .find_by_ids(&counterpart_ids)
            .await
            .map_err(ListConversationsError::QueryError)?
            .into_iter()
            .map(|user| (user.id, user.email))
            .collect();

        Ok(derive_conversations(user_id, &messages, &ads, &emails))
    }
}
