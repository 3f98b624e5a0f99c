use std::collections::BTreeMap;
use std::fmt;

use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use chrono::{DateTime, Utc};
use heck::ToLowerCamelCase;
use serde::{Deserialize, Serialize};
use validator::ValidationErrors;

/// One message per offending request field, keyed by the camelCase wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

impl From<ValidationErrors> for FieldErrors {
    fn from(errors: ValidationErrors) -> Self {
        let mut out = FieldErrors::new();
        for (field, field_errors) in errors.field_errors() {
            // a missing value is reported over any format rule it also breaks
            let chosen = field_errors
                .iter()
                .find(|e| e.code == "blank" || e.code == "required")
                .or_else(|| field_errors.first());
            if let Some(first) = chosen {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", first.code));
                out.insert(field.to_lower_camel_case(), message);
            }
        }
        out
    }
}

/// Error envelope returned by every endpoint of both services.
///
/// Exactly one of `message` and `field_errors` is present.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl ErrorBody {
    pub fn with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: reason(status),
            message: Some(message.into()),
            field_errors: None,
        }
    }

    pub fn with_field_errors(field_errors: FieldErrors) -> Self {
        let status = StatusCode::BAD_REQUEST;
        Self {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: "Validation Failed".to_string(),
            message: None,
            field_errors: Some(field_errors),
        }
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("Unknown Status")
        .to_string()
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(ErrorBody::with_message(status, message))
}

/// Rejects unparsable JSON bodies with the shared envelope instead of actix's
/// plain-text default.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_response(
            StatusCode::BAD_REQUEST,
            format!("Malformed request body: {err}"),
        );
        InternalError::from_response(err, response).into()
    })
}

pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        let response = error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid path parameter: {err}"),
        );
        InternalError::from_response(err, response).into()
    })
}
