use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::favorites::domain::FavoriteAd;

/// Persisted shape of a saved listing in the `favorite_ads` collection.
/// A unique compound index on (user_id, ad_id) backs the uniqueness
/// invariant.
#[derive(Debug, Serialize, Deserialize)]
pub struct FavoriteAdDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,
    pub ad_id: ObjectId,
    pub created_at: DateTime,
}

impl FavoriteAdDocument {
    pub fn to_domain(self) -> FavoriteAd {
        FavoriteAd {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: self.user_id.to_hex(),
            ad_id: self.ad_id.to_hex(),
            created_at: self.created_at.to_chrono(),
        }
    }
}
