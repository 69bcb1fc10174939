use chrono::{DateTime, Utc};
use serde::Serialize;

/// Identity anchor of the system. Owns zero-or-one Profile, any number of
/// Ads, Messages and Favorites. Deleting a User does NOT cascade into the
/// records referencing it; consumers tolerate dangling references instead.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub email: String,
    pub password_hash: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// The public slice of a User returned by auth endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct AuthUserInfo {
    pub id: String,
    pub email: String,
}

impl From<&User> for AuthUserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
        }
    }
}

/// Result of a successful register or login.
#[derive(Debug, Clone, Serialize)]
pub struct AuthSession {
    pub token: String,
    pub user: AuthUserInfo,
}
