use crate::auth::domain::User;
use async_trait::async_trait;

#[async_trait]
pub trait UserQuery: Send + Sync {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, String>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String>;
    /// Batch lookup used by the conversation deriver to resolve
    /// counterpart emails. Unknown ids are silently absent from the result.
    async fn find_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, String>;
}
