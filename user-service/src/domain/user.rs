use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A registration that passed validation but has no id yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
}

impl NewUser {
    /// The display name falls back to the username when not supplied.
    pub fn new(
        username: String,
        email: String,
        display_name: Option<String>,
        bio: Option<String>,
    ) -> Self {
        let display_name = display_name.unwrap_or_else(|| username.clone());
        Self {
            username,
            email,
            display_name,
            bio,
        }
    }
}

/// Partial profile update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.bio.is_none()
    }
}
