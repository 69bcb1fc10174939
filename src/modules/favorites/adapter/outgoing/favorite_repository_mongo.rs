use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{Collection, Database};

use super::documents::FavoriteAdDocument;
use crate::favorites::application::ports::outgoing::{
    FavoriteRepository, FavoriteRepositoryError,
};
use crate::favorites::domain::FavoriteAd;
use crate::shared::store::is_duplicate_key_error;

#[derive(Clone)]
pub struct FavoriteRepositoryMongo {
    collection: Collection<FavoriteAdDocument>,
}

impl FavoriteRepositoryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("favorite_ads"),
        }
    }

    fn parse_pair(
        user_id: &str,
        ad_id: &str,
    ) -> Result<(ObjectId, ObjectId), FavoriteRepositoryError> {
        let user = ObjectId::parse_str(user_id)
            .map_err(|e| FavoriteRepositoryError::StoreError(format!("Invalid user ID: {}", e)))?;
        let ad = ObjectId::parse_str(ad_id)
            .map_err(|e| FavoriteRepositoryError::StoreError(format!("Invalid ad ID: {}", e)))?;
        Ok((user, ad))
    }
}

#[async_trait]
impl FavoriteRepository for FavoriteRepositoryMongo {
    async fn insert(&self, user_id: &str, ad_id: &str) -> Result<(), FavoriteRepositoryError> {
        let (user, ad) = Self::parse_pair(user_id, ad_id)?;

        let document = FavoriteAdDocument {
            id: None,
            user_id: user,
            ad_id: ad,
            created_at: BsonDateTime::now(),
        };

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| {
                if is_duplicate_key_error(&e) {
                    FavoriteRepositoryError::Duplicate
                } else {
                    FavoriteRepositoryError::StoreError(e.to_string())
                }
            })?;

        Ok(())
    }

    async fn delete(&self, user_id: &str, ad_id: &str) -> Result<bool, FavoriteRepositoryError> {
        let (user, ad) = Self::parse_pair(user_id, ad_id)?;

        let result = self
            .collection
            .delete_one(doc! { "user_id": user, "ad_id": ad })
            .await
            .map_err(|e| FavoriteRepositoryError::StoreError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn find_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<FavoriteAd>, FavoriteRepositoryError> {
        let user = ObjectId::parse_str(user_id)
            .map_err(|e| FavoriteRepositoryError::StoreError(format!("Invalid user ID: {}", e)))?;

        let documents: Vec<FavoriteAdDocument> = self
            .collection
            .find(doc! { "user_id": user })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| FavoriteRepositoryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| FavoriteRepositoryError::StoreError(e.to_string()))?;

        Ok(documents
            .into_iter()
            .map(FavoriteAdDocument::to_domain)
            .collect())
    }

    async fn exists(&self, user_id: &str, ad_id: &str) -> Result<bool, FavoriteRepositoryError> {
        let (user, ad) = Self::parse_pair(user_id, ad_id)?;

        let found = self
            .collection
            .find_one(doc! { "user_id": user, "ad_id": ad })
            .await
            .map_err(|e| FavoriteRepositoryError::StoreError(e.to_string()))?;

        Ok(found.is_some())
    }
}
