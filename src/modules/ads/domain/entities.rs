use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::profile::domain::Photo;

/// A standalone public listing. Personal fields are duplicated from the
/// poster's profile on purpose: an ad is a self-contained posting that
/// stays intact even when the profile changes afterwards.
///
/// Deletion is always soft (`active = false`); queries filter on the flag.
#[derive(Debug, Clone, Serialize)]
pub struct Ad {
    pub id: String,
    pub user_id: String,

    pub title: String,
    pub bio: String,

    pub name: String,
    pub age: i32,
    pub gender: String,
    pub country: String,
    pub city: Option<String>,
    pub phone_number: String,

    pub relationship_type: String,
    pub interests: Vec<String>,

    pub has_children: Option<String>,
    pub wants_children: Option<String>,
    pub education: Option<String>,
    pub height: Option<i32>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub religion: Option<String>,
    pub languages: Vec<String>,
    pub body_type: Option<String>,
    pub relationship_status: Option<String>,

    pub photos: Vec<Photo>,

    pub active: bool,
    /// Best-effort counter bumped on every detail fetch.
    pub views: i64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
