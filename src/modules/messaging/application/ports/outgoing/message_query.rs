use async_trait::async_trait;

use crate::messaging::domain::Message;

#[async_trait]
pub trait MessageQuery: Send + Sync {
    /// Every message the user sent or received, newest first.
    async fn find_for_user(&self, user_id: &str) -> Result<Vec<Message>, String>;

    /// All messages between the two users about one listing, in
    /// chronological (display) order.
    async fn find_thread(
        &self,
        user_id: &str,
        counterpart_id: &str,
        ad_id: &str,
    ) -> Result<Vec<Message>, String>;

    /// Total unread messages addressed to the user, across all threads.
    async fn count_unread(&self, receiver_id: &str) -> Result<u64, String>;
}
