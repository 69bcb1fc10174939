use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::UserDocument;
use crate::auth::application::ports::outgoing::UserQuery;
use crate::auth::domain::User;

#[derive(Clone)]
pub struct UserQueryMongo {
    collection: Collection<UserDocument>,
}

impl UserQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("users"),
        }
    }
}

#[async_trait]
impl UserQuery for UserQueryMongo {
    async fn find_by_id(&self, user_id: &str) -> Result<Option<User>, String> {
        let oid = ObjectId::parse_str(user_id).map_err(|e| format!("Invalid user ID: {}", e))?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| e.to_string())?;

        Ok(document.map(UserDocument::to_domain))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, String> {
        let document = self
            .collection
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| e.to_string())?;

        Ok(document.map(UserDocument::to_domain))
    }

    async fn find_by_ids(&self, user_ids: &[String]) -> Result<Vec<User>, String> {
        let oids: Vec<ObjectId> = user_ids
            .iter()
            .filter_map(|id| ObjectId::parse_str(id).ok())
            .collect();
        if oids.is_empty() {
            return Ok(vec![]);
        }

        let documents: Vec<UserDocument> = self
            .collection
            .find(doc! { "_id": { "$in": oids } })
            .await
            .map_err(|e| e.to_string())?
            .try_collect()
            .await
            .map_err(|e| e.to_string())?;

        Ok(documents
            .into_iter()
            .map(UserDocument::to_domain)
            .collect())
    }
}
