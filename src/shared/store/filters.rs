//! BSON filter construction shared by the Ads and Profiles search adapters.
//!
//! All user-supplied text is regex-escaped before it is embedded in a store
//! predicate. Gender is matched anchored over the whole string while the
//! relationship type (and the plain text filters) are substring matches,
//! both case-insensitive.

use mongodb::bson::{doc, Bson, Document, Regex};

use crate::shared::search::{AdSearchCriteria, ProfileSearchCriteria};

/// Case-insensitive whole-string match.
pub fn exact_ci(value: &str) -> Bson {
    Bson::RegularExpression(Regex {
        pattern: format!("^{}$", regex::escape(value)),
        options: "i".to_string(),
    })
}

/// Case-insensitive substring match.
pub fn contains_ci(value: &str) -> Bson {
    Bson::RegularExpression(Regex {
        pattern: regex::escape(value),
        options: "i".to_string(),
    })
}

/// Inclusive numeric range.
pub fn int_range(min: i32, max: i32) -> Document {
    doc! { "$gte": min, "$lte": max }
}

pub fn ad_search_filter(criteria: &AdSearchCriteria) -> Document {
    let mut filter = doc! {
        "active": true,
        "gender": exact_ci(&criteria.gender),
        "age": int_range(criteria.min_age, criteria.max_age),
        "relationship_type": contains_ci(&criteria.relationship_type),
    };

    if let Some(country) = &criteria.country {
        filter.insert("country", contains_ci(country));
    }
    if let Some(city) = &criteria.city {
        filter.insert("city", contains_ci(city));
    }
    if let Some(interests) = &criteria.interests {
        // Set intersection: any shared interest qualifies.
        filter.insert("interests", doc! { "$in": interests.clone() });
    }

    filter
}

pub fn profile_search_filter(criteria: &ProfileSearchCriteria) -> Document {
    let mut filter = doc! {
        "profile_complete": true,
        "gender": exact_ci(&criteria.gender),
        "age": int_range(criteria.min_age, criteria.max_age),
        "relationship_type": contains_ci(&criteria.relationship_type),
    };

    if let Some(country) = &criteria.country {
        filter.insert("country", contains_ci(country));
    }
    if let Some(city) = &criteria.city {
        filter.insert("city", contains_ci(city));
    }
    if let Some(occupation) = &criteria.occupation {
        filter.insert("occupation", contains_ci(occupation));
    }
    if let Some((min, max)) = criteria.height_range {
        filter.insert("height", int_range(min, max));
    }
    if let Some(education) = &criteria.education {
        filter.insert("education", education.clone());
    }
    if let Some(smoking) = &criteria.smoking {
        filter.insert("smoking_habit", smoking.clone());
    }
    if let Some(drinking) = &criteria.drinking {
        filter.insert("drinking_habit", drinking.clone());
    }
    if let Some(interests) = &criteria.interests {
        filter.insert("interests", doc! { "$in": interests.clone() });
    }

    filter
}
