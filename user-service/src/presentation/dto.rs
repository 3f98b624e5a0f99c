use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use service_common::not_blank;
use service_common::validation::check;
use validator::Validate;

use crate::domain::error::DomainError;
use crate::domain::user::{NewUser, User, UserChanges};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    #[validate(
        required(message = "Username is required"),
        custom(function = "not_blank", message = "Username is required"),
        length(
            min = 3,
            max = 50,
            message = "Username must be between 3 and 50 characters"
        )
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "Email is required"),
        custom(function = "not_blank", message = "Email is required"),
        email(message = "Must be a valid email address")
    )]
    pub email: Option<String>,
    #[validate(length(max = 100, message = "Display name cannot exceed 100 characters"))]
    pub display_name: Option<String>,
    #[validate(length(max = 250, message = "Bio cannot exceed 250 characters"))]
    pub bio: Option<String>,
}

impl CreateUserRequest {
    /// `check` has rejected absent required fields before they are unwrapped.
    pub fn into_command(self) -> Result<NewUser, DomainError> {
        check(&self).map_err(DomainError::ValidationFailed)?;
        Ok(NewUser::new(
            self.username.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.display_name,
            self.bio,
        ))
    }
}

#[derive(Debug, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[validate(length(max = 100, message = "Display name cannot exceed 100 characters"))]
    pub display_name: Option<String>,
    #[validate(length(max = 250, message = "Bio cannot exceed 250 characters"))]
    pub bio: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_changes(self) -> Result<UserChanges, DomainError> {
        check(&self).map_err(DomainError::ValidationFailed)?;
        Ok(UserChanges {
            display_name: self.display_name,
            bio: self.bio,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            created_at: user.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn request(username: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            username: Some(username.into()),
            email: Some(email.into()),
            display_name: None,
            bio: None,
        }
    }

    fn field_errors(err: DomainError) -> service_common::FieldErrors {
        match err {
            DomainError::ValidationFailed(fields) => fields,
            other => panic!("expected validation failure, got {other:?}"),
        }
    }

    #[rstest]
    #[case("ab", "username")]
    #[case("   ", "username")]
    #[case(&"x".repeat(51), "username")]
    fn rejects_bad_usernames(#[case] username: &str, #[case] field: &str) {
        let err = request(username, "ana@x.com").into_command().unwrap_err();
        let fields = field_errors(err);
        assert_eq!(fields.len(), 1);
        assert!(fields.get(field).is_some());
    }

    #[rstest]
    #[case("")]
    #[case("not-an-email")]
    #[case("@x.com")]
    fn rejects_bad_emails(#[case] email: &str) {
        let err = request("ana", email).into_command().unwrap_err();
        assert!(field_errors(err).get("email").is_some());
    }

    #[test]
    fn reports_every_violated_field() {
        let req = CreateUserRequest {
            username: Some("a".into()),
            email: Some("nope".into()),
            display_name: Some("d".repeat(101)),
            bio: Some("b".repeat(251)),
        };
        let fields = field_errors(req.into_command().unwrap_err());

        assert_eq!(
            fields.fields().collect::<Vec<_>>(),
            vec!["bio", "displayName", "email", "username"]
        );
        assert_eq!(
            fields.get("bio"),
            Some("Bio cannot exceed 250 characters")
        );
        assert_eq!(
            fields.get("displayName"),
            Some("Display name cannot exceed 100 characters")
        );
    }

    #[test]
    fn absent_username_and_email_are_required() {
        let req = CreateUserRequest {
            username: None,
            email: None,
            display_name: None,
            bio: None,
        };
        let fields = field_errors(req.into_command().unwrap_err());

        assert_eq!(fields.get("username"), Some("Username is required"));
        assert_eq!(fields.get("email"), Some("Email is required"));
    }

    #[test]
    fn length_limits_count_characters_not_bytes() {
        let req = CreateUserRequest {
            bio: Some("é".repeat(250)),
            ..request("ana", "ana@x.com")
        };
        assert!(req.into_command().is_ok());
    }

    #[test]
    fn valid_request_defaults_display_name() {
        let user = request("ana", "ana@x.com").into_command().unwrap();
        assert_eq!(user.display_name, "ana");
        assert_eq!(user.bio, None);
    }

    #[test]
    fn update_validates_lengths() {
        let req = UpdateUserRequest {
            display_name: None,
            bio: Some("b".repeat(251)),
        };
        let fields = field_errors(req.into_changes().unwrap_err());
        assert_eq!(fields.fields().collect::<Vec<_>>(), vec!["bio"]);
    }

    #[test]
    fn response_uses_camel_case() {
        let value = serde_json::to_value(UserResponse {
            id: 1,
            username: "ana".into(),
            email: "ana@x.com".into(),
            display_name: "ana".into(),
            bio: None,
            created_at: Utc::now(),
        })
        .unwrap();

        assert_eq!(value["displayName"], "ana");
        assert!(value["bio"].is_null());
        assert!(value.get("createdAt").is_some());
    }
}
