use async_trait::async_trait;
use serde::Deserialize;

use crate::ads::application::ports::outgoing::AdQuery;
use crate::messaging::application::ports::outgoing::{MessageRepository, NewMessage};
use crate::messaging::domain::Message;

// Mirrors the bound enforced by the store schema.
const MAX_TEXT_LEN: usize = 1000;

#[derive(Debug, Clone, Deserialize)]
pub struct SendMessageRequest {
    pub receiver_id: String,
    pub ad_id: String,
    pub text: String,
}

#[derive(Debug, Clone)]
pub enum SendMessageError {
    Validation(String),
    SelfMessage,
    AdNotFound,
    RepositoryError(String),
}

#[async_trait]
pub trait ISendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        sender_id: &str,
        request: SendMessageRequest,
    ) -> Result<Message, SendMessageError>;
}

pub struct SendMessageUseCase<R, A>
where
    R: MessageRepository,
    A: AdQuery,
{
    message_repository: R,
    ad_query: A,
}

impl<R, A> SendMessageUseCase<R, A>
where
    R: MessageRepository,
    A: AdQuery,
{
    pub fn new(message_repository: R, ad_query: A) -> Self {
        Self {
            message_repository,
            ad_query,
        }
    }
}

#[async_trait]
impl<R, A> ISendMessageUseCase for SendMessageUseCase<R, A>
where
    R: MessageRepository + Send + Sync,
    A: AdQuery + Send + Sync,
{
    async fn execute(
        &self,
        sender_id: &str,
        request: SendMessageRequest,
    ) -> Result<Message, SendMessageError> {
        let text = request.text.trim();
        if request.receiver_id.trim().is_empty() || request.ad_id.trim().is_empty() {
            return Err(SendMessageError::Validation(
                "Receiver and ad are required".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(SendMessageError::Validation(
                "Message text cannot be empty".to_string(),
            ));
        }
        if text.chars().count() > MAX_TEXT_LEN {
            return Err(SendMessageError::Validation(format!(
                "Message text exceeds {} characters",
                MAX_TEXT_LEN
            )));
        }
        if request.receiver_id == sender_id {
            return Err(SendMessageError::SelfMessage);
        }

        // The listing must still be live to start or continue a thread;
        // history referencing later-deactivated ads stays readable though.
        let ad = self
            .ad_query
            .find_active_by_id(&request.ad_id)
            .await
            .map_err(|e| SendMessageError::RepositoryError(e.to_string()))?;
        if ad.is_none() {
            return Err(SendMessageError::AdNotFound);
        }

        self.message_repository
            .insert(NewMessage {
                sender_id: sender_id.to_string(),
                receiver_id: request.receiver_id,
                ad_id: request.ad_id,
                text: text.to_string(),
            })
            .await
            .map_err(|e| SendMessageError::RepositoryError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ads::application::ports::outgoing::AdQueryError;
    use crate::ads::domain::Ad;
    use crate::messaging::application::ports::outgoing::MessageRepositoryError;
    use crate::shared::search::AdSearchCriteria;
    use chrono::{TimeZone, Utc};
    use std::sync::Mutex;

    const U1: &str = "64b0c0c0c0c0c0c0c0c0c001";
    const U2: &str = "64b0c0c0c0c0c0c0c0c0c002";
    const AD_A: &str = "64b0c0c0c0c0c0c0c0c0c0a1";

    #[derive(Default)]
    struct RecordingMessageRepository {
        pub inserted: Mutex<Vec<NewMessage>>,
    }

    #[async_trait]
    impl MessageRepository for RecordingMessageRepository {
        async fn insert(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
            self.inserted.lock().unwrap().push(message.clone());
            Ok(Message {
                id: "m1".to_string(),
                sender_id: message.sender_id,
                receiver_id: message.receiver_id,
                ad_id: message.ad_id,
                text: message.text,
                read: false,
                created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            })
        }

        async fn mark_thread_read(
            &self,
            _receiver_id: &str,
            _sender_id: &str,
            _ad_id: &str,
        ) -> Result<u64, MessageRepositoryError> {
            Ok(0)
        }
    }

    struct MockAdQuery {
        pub active_ad: Option<Ad>,
    }

    #[async_trait]
    impl AdQuery for MockAdQuery {
        async fn find_active_by_id(&self, _ad_id: &str) -> Result<Option<Ad>, AdQueryError> {
            Ok(self.active_ad.clone())
        }

        async fn find_active_by_owner(&self, _owner_id: &str) -> Result<Vec<Ad>, AdQueryError> {
            Ok(vec![])
        }

        async fn find_by_ids(&self, _ad_ids: &[String]) -> Result<Vec<Ad>, AdQueryError> {
            Ok(vec![])
        }

        async fn search(&self, _criteria: &AdSearchCriteria) -> Result<Vec<Ad>, AdQueryError> {
            Ok(vec![])
        }
    }

    fn active_ad() -> Ad {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
        Ad {
            id: AD_A.to_string(),
            user_id: U2.to_string(),
            title: "Hiking partner".to_string(),
            bio: "bio".to_string(),
            name: "Jane".to_string(),
            age: 29,
            gender: "Female".to_string(),
            country: "Romania".to_string(),
            city: None,
            phone_number: "+40712345678".to_string(),
            relationship_type: "Casual".to_string(),
            interests: vec![],
            has_children: None,
            wants_children: None,
            education: None,
            height: None,
            smoking: None,
            drinking: None,
            religion: None,
            languages: vec![],
            body_type: None,
            relationship_status: None,
            photos: vec![],
            active: true,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    fn request(text: &str) -> SendMessageRequest {
        SendMessageRequest {
            receiver_id: U2.to_string(),
            ad_id: AD_A.to_string(),
            text: text.to_string(),
        }
    }

    #[tokio::test]
    async fn test_send_trims_and_stores_message() {
        let uc = SendMessageUseCase::new(
            RecordingMessageRepository::default(),
            MockAdQuery {
                active_ad: Some(active_ad()),
            },
        );

        let message = uc.execute(U1, request("  hello there  ")).await.unwrap();
        assert_eq!(message.text, "hello there");
        assert!(!message.read);

        let inserted = uc.message_repository.inserted.lock().unwrap();
        assert_eq!(inserted.len(), 1);
        assert_eq!(inserted[0].text, "hello there");
    }

    #[tokio::test]
    async fn test_send_to_self_is_rejected() {
        let uc = SendMessageUseCase::new(
            RecordingMessageRepository::default(),
            MockAdQuery {
                active_ad: Some(active_ad()),
            },
        );

        let mut req = request("hi");
        req.receiver_id = U1.to_string();

        match uc.execute(U1, req).await {
            Err(SendMessageError::SelfMessage) => {}
            other => panic!("Expected SelfMessage, got {:?}", other),
        }
        assert!(uc.message_repository.inserted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_requires_live_listing() {
        let uc = SendMessageUseCase::new(
            RecordingMessageRepository::default(),
            MockAdQuery { active_ad: None },
        );

        match uc.execute(U1, request("hi")).await {
            Err(SendMessageError::AdNotFound) => {}
            other => panic!("Expected AdNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_blank_text_is_rejected() {
        let uc = SendMessageUseCase::new(
            RecordingMessageRepository::default(),
            MockAdQuery {
                active_ad: Some(active_ad()),
            },
        );

        match uc.execute(U1, request("   ")).await {
            Err(SendMessageError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_overlong_text_is_rejected() {
        let uc = SendMessageUseCase::new(
            RecordingMessageRepository::default(),
            MockAdQuery {
                active_ad: Some(active_ad()),
            },
        );

        let long_text = "x".repeat(MAX_TEXT_LEN + 1);
        match uc.execute(U1, request(&long_text)).await {
            Err(SendMessageError::Validation(_)) => {}
            other => panic!("Expected Validation, got {:?}", other),
        }
    }
}
