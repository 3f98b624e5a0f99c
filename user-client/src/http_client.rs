use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, error, warn};

use crate::error::LookupError;
use crate::{UserLookup, UserProfile};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Blocking-per-call lookup against the user service REST API. No retries and
/// no caching: every call is one `GET /users/{id}` bounded by the timeout.
#[derive(Clone)]
pub struct UserServiceClient {
    client: Client,
    base_url: String,
}

impl UserServiceClient {
    pub fn connect(endpoint: &str, timeout: Duration) -> Result<Self, LookupError> {
        let base_url = endpoint.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(json_headers())
            .build()?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn fetch(&self, id: i64) -> Result<Option<UserProfile>, LookupError> {
        let resp = self
            .client
            .get(format!("{}/users/{}", self.base_url, id))
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            warn!(user_id = id, "user not found in user service");
            return Ok(None);
        }

        let body = resp.bytes().await?;
        if !status.is_success() {
            return Err(LookupError::UnexpectedStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        serde_json::from_slice::<UserProfile>(&body)
            .map(Some)
            .map_err(|e| LookupError::Malformed(e.to_string()))
    }
}

fn json_headers() -> reqwest::header::HeaderMap {
    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert(
        reqwest::header::ACCEPT,
        reqwest::header::HeaderValue::from_static("application/json"),
    );
    headers
}

#[async_trait]
impl UserLookup for UserServiceClient {
    async fn lookup_user(&self, id: i64) -> Result<Option<UserProfile>, LookupError> {
        debug!(user_id = id, "fetching user profile");
        self.fetch(id).await.inspect_err(|e| {
            error!(user_id = id, error = %e, "user service lookup failed");
        })
    }
}
