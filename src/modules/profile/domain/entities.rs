use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A hosted image: public URL plus the id it carries in the external
/// image store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    pub url: String,
    pub storage_id: String,
    pub uploaded_at: DateTime<Utc>,
}

/// One-per-user dating profile. Every descriptive field is optional:
/// profiles are built up incrementally through merge-upserts and only
/// become searchable once `profile_complete` is true.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub id: String,
    pub user_id: String,

    // Basic identity
    pub name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub phone_number: Option<String>,
    pub height: Option<i32>,
    pub education: Option<String>,

    // Lifestyle
    pub smoking_habit: Option<String>,
    pub drinking_habit: Option<String>,
    pub fitness_level: Option<String>,
    pub diet: Option<String>,
    pub pet_preference: Option<String>,

    // Personality
    pub introvert_extrovert: Option<String>,
    pub spontaneous_planned: Option<String>,
    pub creative_analytical: Option<String>,

    // Values
    pub relationship_type: Option<String>,
    pub wants_children: Option<String>,
    pub religion_importance: Option<String>,
    pub political_alignment: Option<String>,

    pub interests: Vec<String>,
    pub photos: Vec<Photo>,

    // Partner criteria
    pub partner_age_min: Option<i32>,
    pub partner_age_max: Option<i32>,
    pub partner_gender: Option<String>,
    pub deal_breakers: Vec<String>,

    pub bio: Option<String>,

    pub profile_complete: bool,
    pub last_updated: DateTime<Utc>,
}

impl Profile {
    /// A profile is complete when name, age, gender and country are all
    /// present. Evaluated against the stored document after every write.
    pub fn meets_completion_requirements(&self) -> bool {
        fn present(value: &Option<String>) -> bool {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
        }

        present(&self.name) && self.age.is_some() && present(&self.gender) && present(&self.country)
    }
}
