use async_trait::async_trait;

use crate::messaging::application::ports::outgoing::{MessageQuery, MessageRepository};
use crate::messaging::domain::Message;

#[derive(Debug, Clone)]
pub enum FetchThreadError {
    QueryError(String),
}

#[async_trait]
pub trait IFetchThreadUseCase: Send + Sync {
    async fn execute(
        &self,
        user_id: &str,
        counterpart_id: &str,
        ad_id: &str,
    ) -> Result<Vec<Message>, FetchThreadError>;
}

/// Returns one (counterpart, listing) thread in chronological order and
/// marks the requester's unread received messages in it as read. The mark
/// is a single bulk conditional update scoped to this thread; messages the
/// requester sent, and the counterpart's threads about other listings,
/// are never touched.
pub struct FetchThreadUseCase<Q, R>
where
    Q: MessageQuery,
    R: MessageRepository,
{
    message_query: Q,
    message_repository: R,
}

impl<Q, R> FetchThreadUseCase<Q, R>
where
    Q: MessageQuery,
    R: MessageRepository,
{
    pub fn new(message_query: Q, message_repository: R) -> Self {
        Self {
            message_query,
            message_repository,
        }
    }
}

#[async_trait]
impl<Q, R> IFetchThreadUseCase for FetchThreadUseCase<Q, R>
where
    Q: MessageQuery + Send + Sync,
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        user_id: &str,
        counterpart_id: &str,
        ad_id: &str,
    ) -> Result<Vec<Message>, FetchThreadError> {
        let messages = self
            .message_query
            .find_thread(user_id, counterpart_id, ad_id)
            .await
            .map_err(FetchThreadError::QueryError)?;

        self.message_repository
            .mark_thread_read(user_id, counterpart_id, ad_id)
            .await
            .map_err(|e| FetchThreadError::QueryError(e.to_string()))?;

        Ok(messages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messaging::application::ports::outgoing::{MessageRepositoryError, NewMessage};
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    const U1: &str = "64b0c0c0c0c0c0c0c0c0c001";
    const U2: &str = "64b0c0c0c0c0c0c0c0c0c002";
    const AD_A: &str = "64b0c0c0c0c0c0c0c0c0c0a1";

    struct MockMessageQuery {
        pub thread: Vec<Message>,
    }

    #[async_trait]
    impl MessageQuery for MockMessageQuery {
        async fn find_for_user(&self, _user_id: &str) -> Result<Vec<Message>, String> {
            Ok(vec![])
        }

        async fn find_thread(
            &self,
            _user_id: &str,
            _counterpart_id: &str,
            _ad_id: &str,
        ) -> Result<Vec<Message>, String> {
            Ok(self.thread.clone())
        }

        async fn count_unread(&self, _receiver_id: &str) -> Result<u64, String> {
            Ok(0)
        }
    }

    #[derive(Default)]
    struct RecordingMessageRepository {
        pub marks: Mutex<Vec<(String, String, String)>>,
    }

    #[async_trait]
    impl MessageRepository for RecordingMessageRepository {
        async fn insert(&self, _message: NewMessage) -> Result<Message, MessageRepositoryError> {
            unimplemented!()
        }

        async fn mark_thread_read(
            &self,
            receiver_id: &str,
            sender_id: &str,
            ad_id: &str,
        ) -> Result<u64, MessageRepositoryError> {
            self.marks.lock().unwrap().push((
                receiver_id.to_string(),
                sender_id.to_string(),
                ad_id.to_string(),
            ));
            Ok(1)
        }
    }

    fn thread_message(minute: u32, from: &str, to: &str) -> Message {
        Message {
            id: format!("m{}", minute),
            sender_id: from.to_string(),
            receiver_id: to.to_string(),
            ad_id: AD_A.to_string(),
            text: "text".to_string(),
            read: false,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_fetch_returns_thread_and_marks_received_side_read() {
        let uc = FetchThreadUseCase::new(
            MockMessageQuery {
                thread: vec![thread_message(0, U1, U2), thread_message(1, U2, U1)],
            },
            RecordingMessageRepository::default(),
        );

        let messages = uc.execute(U1, U2, AD_A).await.unwrap();
        assert_eq!(messages.len(), 2);

        // Exactly one bulk mark, with the requester as receiver: the
        // counterpart's unread flags are left alone.
        let marks = uc.message_repository.marks.lock().unwrap();
        assert_eq!(
            *marks,
            vec![(U1.to_string(), U2.to_string(), AD_A.to_string())]
        );
    }
}
