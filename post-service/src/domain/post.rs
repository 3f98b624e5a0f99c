use chrono::{DateTime, Utc};
use sqlx::FromRow;
use user_client::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub user_id: i64,
    pub content: String,
    pub image_url: Option<String>,
}

/// Partial post update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostChanges {
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.content.is_none() && self.image_url.is_none()
    }
}

/// A stored post together with its author's display data as seen at read
/// time. Author fields are `None` when the author could not be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedPost {
    pub post: Post,
    pub username: Option<String>,
    pub user_display_name: Option<String>,
}

impl EnrichedPost {
    pub fn compose(post: Post, author: Option<&UserProfile>) -> Self {
        Self {
            post,
            username: author.map(|a| a.username.clone()),
            user_display_name: author.map(|a| a.display_name.clone()),
        }
    }
}
