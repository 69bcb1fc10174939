use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::AdDocument;
use crate::ads::application::ports::outgoing::{AdQuery, AdQueryError};
use crate::ads::domain::Ad;
use crate::shared::search::{AdSearchCriteria, SEARCH_RESULT_LIMIT};
use crate::shared::store::filters::ad_search_filter;

#[derive(Clone)]
pub struct AdQueryMongo {
    collection: Collection<AdDocument>,
}

impl AdQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("ads"),
        }
    }
}

#[async_trait]
impl AdQuery for AdQueryMongo {
    async fn find_active_by_id(&self, ad_id: &str) -> Result<Option<Ad>, AdQueryError> {
        let oid = ObjectId::parse_str(ad_id)
            .map_err(|e| AdQueryError::StoreError(format!("Invalid ad ID: {}", e)))?;

        let document = self
            .collection
            .find_one(doc! { "_id": oid, "active": true })
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?;

        Ok(document.map(AdDocument::to_domain))
    }

    async fn find_active_by_owner(&self, owner_id: &str) -> Result<Vec<Ad>, AdQueryError> {
        let owner = ObjectId::parse_str(owner_id)
            .map_err(|e| AdQueryError::StoreError(format!("Invalid user ID: {}", e)))?;

        let documents: Vec<AdDocument> = self
            .collection
            .find(doc! { "user_id": owner, "active": true })
            .sort(doc! { "created_at": -1 })
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?;

        Ok(documents.into_iter().map(AdDocument::to_domain).collect())
    }

    async fn find_by_ids(&self, ad_ids: &[String]) -> Result<Vec<Ad>, AdQueryError> {
        let oids: Vec<ObjectId> = ad_ids
            .iter()
            .filter_map(|id| ObjectId::parse_str(id).ok())
            .collect();
        if oids.is_empty() {
            return Ok(vec![]);
        }

        // Deliberately no `active` filter: denormalized contexts keep
        // rendering for deactivated listings.
        let documents: Vec<AdDocument> = self
            .collection
            .find(doc! { "_id": { "$in": oids } })
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?;

        Ok(documents.into_iter().map(AdDocument::to_domain).collect())
    }

    async fn search(&self, criteria: &AdSearchCriteria) -> Result<Vec<Ad>, AdQueryError> {
        let documents: Vec<AdDocument> = self
            .collection
            .find(ad_search_filter(criteria))
            .sort(doc! { "created_at": -1 })
            .limit(SEARCH_RESULT_LIMIT)
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| AdQueryError::StoreError(e.to_string()))?;

        Ok(documents.into_iter().map(AdDocument::to_domain).collect())
    }
}
