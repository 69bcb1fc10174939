use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{Collection, Database};

use super::documents::MessageDocument;
use crate::messaging::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, NewMessage,
};
use crate::messaging::domain::Message;

#[derive(Clone)]
pub struct MessageRepositoryMongo {
    collection: Collection<MessageDocument>,
}

impl MessageRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("messages"),
        }
    }

    fn parse_id(id: &str, what: &str) -> Result<ObjectId, MessageRepositoryError> {
        ObjectId::parse_str(id)
            .map_err(|e| MessageRepositoryError::StoreError(format!("Invalid {} ID: {}", what, e)))
    }
}

#[async_trait]
impl MessageRepository for MessageRepositoryMongo {
    async fn insert(&self, message: NewMessage) -> Result<Message, MessageRepositoryError> {
        let mut document = MessageDocument {
            id: None,
            sender_id: Self::parse_id(&message.sender_id, "user")?,
            receiver_id: Self::parse_id(&message.receiver_id, "user")?,
            ad_id: Self::parse_id(&message.ad_id, "ad")?,
            text: message.text,
            read: false,
            created_at: BsonDateTime::now(),
        };

        let result = self
            .collection
            .insert_one(&document)
            .await
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?;

        document.id = result.inserted_id.as_object_id();
        Ok(document.to_domain())
    }

    async fn mark_thread_read(
        &self,
        receiver_id: &str,
        sender_id: &str,
        ad_id: &str,
    ) -> Result<u64, MessageRepositoryError> {
        let receiver = Self::parse_id(receiver_id, "user")?;
        let sender = Self::parse_id(sender_id, "user")?;
        let ad = Self::parse_id(ad_id, "ad")?;

        // One conditional bulk update; no read-then-write loop, so racing
        // fetches cannot lose each other's marks.
        let result = self
            .collection
            .update_many(
                doc! {
                    "ad_id": ad,
                    "sender_id": sender,
                    "receiver_id": receiver,
                    "read": false,
                },
                doc! { "$set": { "read": true } },
            )
            .await
            .map_err(|e| MessageRepositoryError::StoreError(e.to_string()))?;

        Ok(result.modified_count)
    }
}
