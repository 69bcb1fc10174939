use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::messaging::domain::Message;

/// Persisted shape of a message in the `messages` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub sender_id: ObjectId,
    pub receiver_id: ObjectId,
    pub ad_id: ObjectId,
    pub text: String,
    #[serde(default)]
    pub read: bool,
    pub created_at: DateTime,
}

impl MessageDocument {
    pub fn to_domain(self) -> Message {
        Message {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            sender_id: self.sender_id.to_hex(),
            receiver_id: self.receiver_id.to_hex(),
            ad_id: self.ad_id.to_hex(),
            text: self.text,
            read: self.read,
            created_at: self.created_at.to_chrono(),
        }
    }
}
