//! Client side of the user service as seen by its consumers.
//!
//! [`UserLookup`] is the capability the post service depends on; the
//! reqwest-backed [`UserServiceClient`] is the production implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

mod error;
mod http_client;

pub use error::LookupError;
pub use http_client::{DEFAULT_TIMEOUT, UserServiceClient};

/// Public profile of a user, as returned by `GET /users/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Fetches a user's public profile from wherever users live.
///
/// `Ok(None)` means the user does not exist, which callers must treat as a
/// legitimate outcome. Every other failure is [`LookupError`].
#[async_trait]
pub trait UserLookup: Send + Sync {
    async fn lookup_user(&self, id: i64) -> Result<Option<UserProfile>, LookupError>;
}
