use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{Collection, Database};

use super::documents::UserDocument;
use crate::auth::application::ports::outgoing::{UserRepository, UserRepositoryError};
use crate::auth::domain::User;
use crate::shared::store::is_duplicate_key_error;

#[derive(Clone)]
pub struct UserRepositoryMongo {
    collection: Collection<UserDocument>,
}

impl UserRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }

    fn parse_id(user_id: &str) -> Result<ObjectId, UserRepositoryError> {
        ObjectId::parse_str(user_id)
            .map_err(|e| UserRepositoryError::StoreError(format!("Invalid user ID: {}", e)))
    }
}

#[async_trait]
impl UserRepository for UserRepositoryMongo {
    async fn insert(&self, email: &str, password_hash: &str) -> Result<User, UserRepositoryError> {
        let document = UserDocument {
            id: None,
            email: email.to_string(),
            password_hash: password_hash.to_string(),
            last_login: None,
            created_at: BsonDateTime::now(),
        };

        let result = self.collection.insert_one(&document).await.map_err(|e| {
            if is_duplicate_key_error(&e) {
                UserRepositoryError::DuplicateEmail
            } else {
                UserRepositoryError::StoreError(e.to_string())
            }
        })?;

        let id = result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_default();

        Ok(User {
            id,
            email: document.email,
            password_hash: document.password_hash,
            last_login: None,
            created_at: document.created_at.to_chrono(),
        })
    }

    async fn set_last_login(
        &self,
        user_id: &str,
        at: DateTime<Utc>,
    ) -> Result<(), UserRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        self.collection
            .update_one(
                doc! { "_id": oid },
                doc! { "$set": { "last_login": BsonDateTime::from_chrono(at) } },
            )
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(())
    }

    async fn delete(&self, user_id: &str) -> Result<bool, UserRepositoryError> {
        let oid = Self::parse_id(user_id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| UserRepositoryError::StoreError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
