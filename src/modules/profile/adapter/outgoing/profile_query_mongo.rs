use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Collection, Database};

use super::documents::ProfileDocument;
use crate::profile::application::ports::outgoing::{
    MatchPreferences, ProfileQuery, ProfileQueryError, MATCH_RESULT_LIMIT,
};
use crate::profile::domain::Profile;
use crate::shared::search::{ProfileSearchCriteria, SEARCH_RESULT_LIMIT};
use crate::shared::store::filters::profile_search_filter;

#[derive(Clone)]
pub struct ProfileQueryMongo {
    collection: Collection<ProfileDocument>,
}

impl ProfileQueryMongo {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection("profiles"),
        }
    }
}

#[async_trait]
impl ProfileQuery for ProfileQueryMongo {
    async fn search(
        &self,
        criteria: &ProfileSearchCriteria,
    ) -> Result<Vec<Profile>, ProfileQueryError> {
        // No explicit sort: profiles come back in store order.
        let documents: Vec<ProfileDocument> = self
            .collection
            .find(profile_search_filter(criteria))
            .limit(SEARCH_RESULT_LIMIT)
            .await
            .map_err(|e| ProfileQueryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| ProfileQueryError::StoreError(e.to_string()))?;

        Ok(documents
            .into_iter()
            .map(ProfileDocument::to_domain)
            .collect())
    }

    async fn find_matches(
        &self,
        preferences: &MatchPreferences,
    ) -> Result<Vec<Profile>, ProfileQueryError> {
        let exclude = ObjectId::parse_str(&preferences.exclude_user_id)
            .map_err(|e| ProfileQueryError::StoreError(format!("Invalid user ID: {}", e)))?;

        let mut filter = doc! {
            "user_id": { "$ne": exclude },
            "profile_complete": true,
            "age": { "$gte": preferences.min_age, "$lte": preferences.max_age },
        };
        if let Some(gender) = &preferences.gender {
            filter.insert("gender", gender.clone());
        }

        let documents: Vec<ProfileDocument> = self
            .collection
            .find(filter)
            .limit(MATCH_RESULT_LIMIT)
            .await
            .map_err(|e| ProfileQueryError::StoreError(e.to_string()))?
            .try_collect()
            .await
            .map_err(|e| ProfileQueryError::StoreError(e.to_string()))?;

        Ok(documents
            .into_iter()
            .map(ProfileDocument::to_domain)
            .collect())
    }
}
