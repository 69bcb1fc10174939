use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::auth::domain::User;

/// Persisted shape of a user account in the `users` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub email: String,
    pub password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime>,
    pub created_at: DateTime,
}

impl UserDocument {
    pub fn to_domain(self) -> User {
        User {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            email: self.email,
            password_hash: self.password_hash,
            last_login: self.last_login.map(|at| at.to_chrono()),
            created_at: self.created_at.to_chrono(),
        }
    }
}
