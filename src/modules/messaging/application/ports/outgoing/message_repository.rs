use async_trait::async_trait;
use thiserror::Error;

use crate::messaging::domain::Message;

#[derive(Debug, Clone, Error)]
pub enum MessageRepositoryError {
    #[error("store failure: {0}")]
    StoreError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMessage {
    pub sender_id: String,
    pub receiver_id: String,
    pub ad_id: String,
    pub text: String,
}

#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Appends to the log; messages are created unread.
    async fn insert(&self, message: NewMessage) -> Result<Message, MessageRepositoryError>;

    /// Flips `read` on every unread message `sender_id` sent to
    /// `receiver_id` about `ad_id`, as ONE bulk conditional update.
    /// Idempotent: re-marking already-read messages changes nothing, so
    /// racing fetches resolve as last-write-wins. Returns the number of
    /// messages actually flipped.
    async fn mark_thread_read(
        &self,
        receiver_id: &str,
        sender_id: &str,
        ad_id: &str,
    ) -> Result<u64, MessageRepositoryError>;
}
