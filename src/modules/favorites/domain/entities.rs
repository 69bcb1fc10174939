use chrono::{DateTime, Utc};
use serde::Serialize;

/// Join record marking a saved listing. At most one exists per
/// (user, ad) pair; the store's unique compound index enforces it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FavoriteAd {
    pub id: String,
    pub user_id: String,
    pub ad_id: String,
    pub created_at: DateTime<Utc>,
}
