use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_common::not_blank;
use service_common::validation::check;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::post::{EnrichedPost, NewPost, PostChanges};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostRequest {
    #[validate(required(message = "userId is required"))]
    pub user_id: Option<i64>,
    #[validate(
        required(message = "Content is required"),
        custom(function = "not_blank", message = "Content is required"),
        length(max = 280, message = "Post content cannot exceed 280 characters")
    )]
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl CreatePostRequest {
    /// `check` has rejected absent required fields before they are unwrapped.
    pub fn into_command(self) -> Result<NewPost, DomainError> {
        check(&self).map_err(DomainError::ValidationFailed)?;
        Ok(NewPost {
            user_id: self.user_id.unwrap_or_default(),
            content: self.content.unwrap_or_default(),
            image_url: self.image_url,
        })
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostRequest {
    #[validate(length(max = 280, message = "Post content cannot exceed 280 characters"))]
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl UpdatePostRequest {
    pub fn into_changes(self) -> Result<PostChanges, DomainError> {
        check(&self).map_err(DomainError::ValidationFailed)?;
        Ok(PostChanges {
            content: self.content,
            image_url: self.image_url,
        })
    }
}

/// A post as served to clients. `username` and `userDisplayName` are `null`
/// when the author could not be resolved.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: i64,
    pub user_id: i64,
    pub username: Option<String>,
    pub user_display_name: Option<String>,
    pub content: String,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EnrichedPost> for PostResponse {
    fn from(enriched: EnrichedPost) -> Self {
        let EnrichedPost {
            post,
            username,
            user_display_name,
        } = enriched;
        Self {
            id: post.id,
            user_id: post.user_id,
            username,
            user_display_name,
            content: post.content,
            image_url: post.image_url,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> CreatePostRequest {
        serde_json::from_value(value).unwrap()
    }

    fn field_errors(err: DomainError) -> service_common::FieldErrors {
        match err {
            DomainError::ValidationFailed(fields) => fields,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[test]
    fn empty_payload_reports_user_id_and_content() {
        let fields = field_errors(parse(json!({})).into_command().unwrap_err());

        assert_eq!(fields.get("userId"), Some("userId is required"));
        assert_eq!(fields.get("content"), Some("Content is required"));
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn null_fields_are_reported_like_missing_ones() {
        let fields = field_errors(
            parse(json!({"userId": null, "content": null}))
                .into_command()
                .unwrap_err(),
        );

        assert_eq!(fields.get("userId"), Some("userId is required"));
        assert_eq!(fields.get("content"), Some("Content is required"));
    }

    #[rstest]
    #[case("", "Content is required")]
    #[case("   ", "Content is required")]
    fn blank_content_is_required(#[case] content: &str, #[case] message: &str) {
        let fields =
            field_errors(parse(json!({"userId": 1, "content": content})).into_command().unwrap_err());
        assert_eq!(fields.get("content"), Some(message));
    }

    #[rstest]
    #[case(280, true)]
    #[case(281, false)]
    fn content_limit_is_280_characters(#[case] len: usize, #[case] ok: bool) {
        let content = "ß".repeat(len);
        let result = parse(json!({"userId": 1, "content": content})).into_command();
        assert_eq!(result.is_ok(), ok);
    }

    #[test]
    fn valid_request_becomes_command() {
        let cmd = parse(json!({"userId": 4, "content": "hi", "imageUrl": "http://img.test/x.png"}))
            .into_command()
            .unwrap();
        assert_eq!(
            cmd,
            NewPost {
                user_id: 4,
                content: "hi".into(),
                image_url: Some("http://img.test/x.png".into()),
            }
        );
    }

    #[test]
    fn update_allows_absent_content_but_caps_length() {
        assert!(UpdatePostRequest::default().into_changes().unwrap().is_empty());

        let too_long = UpdatePostRequest {
            content: Some("x".repeat(281)),
            image_url: None,
        };
        let fields = field_errors(too_long.into_changes().unwrap_err());
        assert_eq!(
            fields.get("content"),
            Some("Post content cannot exceed 280 characters")
        );
    }
}
