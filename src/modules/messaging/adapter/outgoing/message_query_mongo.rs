use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::MessageDocument;
use crate::messaging::application::ports::outgoing::MessageQuery;
use crate::messaging::domain::Message;

#[derive(Clone)]
pub struct MessageQueryMongo {
    collection: Collection<MessageDocument>,
}

impl MessageQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("messages"),
        }
    }
}

fn parse_id(id: &str, what: &str) -> Result<ObjectId, String> {
    ObjectId::parse_str(id).map_err(|e| format!("Invalid {} ID: {}", what, e))
}

#[async_trait]
impl MessageQuery for MessageQueryMongo {
    async fn find_for_user(&self, user_id: &str) -> Result<Vec<Message>, String> {
        let oid = parse_id(user_id, "user")?;

        let documents: Vec<MessageDocument> = self
            .collection
            .find(doc! {
                "$or": [
                    { "sender_id": oid },
                    { "receiver_id": oid },
                ],
            })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| e.to_string())?
            .try_collect()
            .await
            .map_err(|e| e.to_string())?;

        Ok(documents
            .into_iter()
            .map(MessageDocument::to_domain)
            .collect())
    }

    async fn find_thread(
        &self,
        user_id: &str,
        counterpart_id: &str,
        ad_id: &str,
    ) -> Result<Vec<Message>, String> {
        let user = parse_id(user_id, "user")?;
        let counterpart = parse_id(counterpart_id, "user")?;
        let ad = parse_id(ad_id, "ad")?;

        // Chronological display order, the opposite of the conversation
        // list ordering.
        let documents: Vec<MessageDocument> = self
            .collection
            .find(doc! {
                "ad_id": ad,
                "$or": [
                    { "sender_id": user, "receiver_id": counterpart },
                    { "sender_id": counterpart, "receiver_id": user },
                ],
            })
            .sort(doc! { "created_at": 1 })
            .await
            .map_err(|e| e.to_string())?
            .try_collect()
            .await
            .map_err(|e| e.to_string())?;

        Ok(documents
            .into_iter()
            .map(MessageDocument::to_domain)
            .collect())
    }

    async fn count_unread(&self, receiver_id: &str) -> Result<u64, String> {
        let oid = parse_id(receiver_id, "user")?;

        self.collection
            .count_documents(doc! { "receiver_id": oid, "read": false })
            .await
            .map_err(|e| e.to_string())
    }
}
