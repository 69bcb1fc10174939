use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

use crate::profile::domain::{Photo, Profile};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhotoDocument {
    pub url: String,
    pub storage_id: String,
    pub uploaded_at: DateTime,
}

impl PhotoDocument {
    pub fn from_domain(photo: &Photo) -> Self {
        Self {
            url: photo.url.clone(),
            storage_id: photo.storage_id.clone(),
            uploaded_at: DateTime::from_chrono(photo.uploaded_at),
        }
    }

    pub fn to_domain(self) -> Photo {
        Photo {
            url: self.url,
            storage_id: self.storage_id,
            uploaded_at: self.uploaded_at.to_chrono(),
        }
    }
}

/// Persisted shape of a profile in the `profiles` collection. A unique
/// index on `user_id` enforces the one-profile-per-user invariant.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub user_id: ObjectId,

    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub phone_number: Option<String>,
    pub height: Option<i32>,
    pub education: Option<String>,

    pub smoking_habit: Option<String>,
    pub drinking_habit: Option<String>,
    pub fitness_level: Option<String>,
    pub diet: Option<String>,
    pub pet_preference: Option<String>,

    pub introvert_extrovert: Option<String>,
    pub spontaneous_planned: Option<String>,
    pub creative_analytical: Option<String>,

    pub relationship_type: Option<String>,
    pub wants_children: Option<String>,
    pub religion_importance: Option<String>,
    pub political_alignment: Option<String>,

    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub photos: Vec<PhotoDocument>,

    pub partner_age_min: Option<i32>,
    pub partner_age_max: Option<i32>,
    pub partner_gender: Option<String>,
    #[serde(default)]
    pub deal_breakers: Vec<String>,

    pub bio: Option<String>,

    #[serde(default)]
    pub profile_complete: bool,
    pub last_updated: DateTime,
}

impl ProfileDocument {
    pub fn to_domain(self) -> Profile {
        Profile {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            user_id: self.user_id.to_hex(),
            name: self.name,
            age: self.age,
            gender: self.gender,
            country: self.country,
            city: self.city,
            occupation: self.occupation,
            phone_number: self.phone_number,
            height: self.height,
            education: self.education,
            smoking_habit: self.smoking_habit,
            drinking_habit: self.drinking_habit,
            fitness_level: self.fitness_level,
            diet: self.diet,
            pet_preference: self.pet_preference,
            introvert_extrovert: self.introvert_extrovert,
            spontaneous_planned: self.spontaneous_planned,
            creative_analytical: self.creative_analytical,
            relationship_type: self.relationship_type,
            wants_children: self.wants_children,
            religion_importance: self.religion_importance,
            political_alignment: self.political_alignment,
            interests: self.interests,
            photos: self.photos.into_iter().map(PhotoDocument::to_domain).collect(),
            partner_age_min: self.partner_age_min,
            partner_age_max: self.partner_age_max,
            partner_gender: self.partner_gender,
            deal_breakers: self.deal_breakers,
            bio: self.bio,
            profile_complete: self.profile_complete,
            last_updated: self.last_updated.to_chrono(),
        }
    }
}
