use serde::Deserialize;

/// Both search instances cap their result sets here and truncate
/// silently; callers get no pagination cursor.
pub const SEARCH_RESULT_LIMIT: i64 = 50;

/// Search requests as they arrive from the client. Every field is optional
/// at the wire level; `gender`, `min_age`, `max_age` and `relationship_type`
/// are promoted to required fields during validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdSearchRequest {
    pub gender: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub relationship_type: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileSearchRequest {
    pub gender: Option<String>,
    pub min_age: Option<i32>,
    pub max_age: Option<i32>,
    pub relationship_type: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
    pub education: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub interests: Option<Vec<String>>,
}

/// Validated criteria for the ads search.
///
/// `gender` is matched anchored (whole string, case-insensitive) while
/// `relationship_type` is an unanchored substring match: relationship-type
/// values are compound strings and a query for "Casual" must hit
/// "Casual / Open".
#[derive(Debug, Clone, PartialEq)]
pub struct AdSearchCriteria {
    pub gender: String,
    pub min_age: i32,
    pub max_age: i32,
    pub relationship_type: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProfileSearchCriteria {
    pub gender: String,
    pub min_age: i32,
    pub max_age: i32,
    pub relationship_type: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub occupation: Option<String>,
    /// Applied only when both bounds are present. Zero is a legitimate
    /// bound, which is why presence is tagged and not inferred from the
    /// value.
    pub height_range: Option<(i32, i32)>,
    pub education: Option<String>,
    pub smoking: Option<String>,
    pub drinking: Option<String>,
    pub interests: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CriteriaError {
    MissingField(&'static str),
}

impl std::fmt::Display for CriteriaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CriteriaError::MissingField(field) => {
                write!(f, "Required search field missing: {}", field)
            }
        }
    }
}

impl std::error::Error for CriteriaError {}

fn required_text(value: Option<String>, field: &'static str) -> Result<String, CriteriaError> {
    match value {
        Some(v) => {
            let v = v.trim().to_string();
            if v.is_empty() {
                Err(CriteriaError::MissingField(field))
            } else {
                Ok(v)
            }
        }
        None => Err(CriteriaError::MissingField(field)),
    }
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn optional_list(value: Option<Vec<String>>) -> Option<Vec<String>> {
    value.filter(|v| !v.is_empty())
}

impl AdSearchCriteria {
    pub fn from_request(req: AdSearchRequest) -> Result<Self, CriteriaError> {
        Ok(Self {
            gender: required_text(req.gender, "gender")?,
            min_age: req.min_age.ok_or(CriteriaError::MissingField("min_age"))?,
            max_age: req.max_age.ok_or(CriteriaError::MissingField("max_age"))?,
            relationship_type: required_text(req.relationship_type, "relationship_type")?,
            country: optional_text(req.country),
            city: optional_text(req.city),
            interests: optional_list(req.interests),
        })
    }
}

impl ProfileSearchCriteria {
    pub fn from_request(req: ProfileSearchRequest) -> Result<Self, CriteriaError> {
        let height_range = match (req.min_height, req.max_height) {
            (Some(min), Some(max)) => Some((min, max)),
            _ => None,
        };

        Ok(Self {
            gender: required_text(req.gender, "gender")?,
            min_age: req.min_age.ok_or(CriteriaError::MissingField("min_age"))?,
            max_age: req.max_age.ok_or(CriteriaError::MissingField("max_age"))?,
            relationship_type: required_text(req.relationship_type, "relationship_type")?,
            country: optional_text(req.country),
            city: optional_text(req.city),
            occupation: optional_text(req.occupation),
            height_range,
            education: optional_text(req.education),
            smoking: optional_text(req.smoking),
            drinking: optional_text(req.drinking),
            interests: optional_list(req.interests),
        })
    }
}
