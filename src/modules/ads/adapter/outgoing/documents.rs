use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::ads::application::ports::outgoing::CreateAdData;
use crate::ads::domain::Ad;
use crate::profile::adapter::outgoing::documents::PhotoDocument;

/// Persisted shape of a listing in the `ads` collection.
#[derive(Debug, Serialize, Deserialize)]
pub struct AdDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,

    pub title: String,
    pub bio: String,

    pub name: String,
    pub age: i32,
    pub gender: String,
    pub country: String,
    pub city: Option<String>,
    pub phone_number: String,

    pub relationship_type: String,
    #[serde(default)]
    pub interests: Vec<String>,

    pub has_children: Option<String>,
    pub wants_children: Option<String>,
    pub education: Option<String>,
    pub height: Option<i32>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub religion: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub body_type: Option<String>,
    pub relationship_status: Option<String>,

    #[serde(default)]
    pub photos: Vec<PhotoDocument>,

    pub active: bool,
    #[serde(default)]
    pub views: i64,

    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl AdDocument {
    pub fn from_create_data(user_id: ObjectId, data: CreateAdData) -> Self {
        let now = DateTime::now();
        Self {
            id: None,
            user_id,
            title: data.title,
            bio: data.bio,
            name: data.name,
            age: data.age,
            gender: data.gender,
            country: data.country,
            city: data.city,
            phone_number: data.phone_number,
            relationship_type: data.relationship_type,
            interests: data.interests,
            has_children: data.has_children,
            wants_children: data.wants_children,
            education: data.education,
            height: data.height,
            smoking: data.smoking,
            drinking: data.drinking,
            religion: data.religion,
            languages: data.languages,
            body_type: data.body_type,
            relationship_status: data.relationship_status,
            photos: data.photos.iter().map(PhotoDocument::from_domain).collect(),
            active: true,
            views: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_domain(self) -> Ad {
        Ad {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: self.user_id.to_hex(),
            title: self.title,
            bio: self.bio,
            name: self.name,
            age: self.age,
            gender: self.gender,
            country: self.country,
            city: self.city,
            phone_number: self.phone_number,
            relationship_type: self.relationship_type,
            interests: self.interests,
            has_children: self.has_children,
            wants_children: self.wants_children,
            education: self.education,
            height: self.height,
            smoking: self.smoking,
            drinking: self.drinking,
            religion: self.religion,
            languages: self.languages,
            body_type: self.body_type,
            relationship_status: self.relationship_status,
            photos: self.photos.into_iter().map(PhotoDocument::to_domain).collect(),
            active: self.active,
            views: self.views,
            created_at: self.created_at.to_chrono(),
            updated_at: self.updated_at.to_chrono(),
        }
    }
}
