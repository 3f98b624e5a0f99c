use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use service_common::{ErrorBody, FieldErrors};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation failed: {0}")]
    ValidationFailed(FieldErrors),
    #[error("Post not found with id: {0}")]
    PostNotFound(i64),
    #[error("User not found with id: {0}")]
    AuthorNotFound(i64),
    #[error("User service unavailable: {0}")]
    DependencyUnavailable(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<sqlx::Error> for DomainError {
    fn from(err: sqlx::Error) -> Self {
        DomainError::Internal(format!("database error: {err}"))
    }
}

impl ResponseError for DomainError {
    fn status_code(&self) -> StatusCode {
        match self {
            DomainError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            DomainError::PostNotFound(_) | DomainError::AuthorNotFound(_) => StatusCode::NOT_FOUND,
            DomainError::DependencyUnavailable(_) => StatusCode::BAD_GATEWAY,
            DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            DomainError::ValidationFailed(fields) => ErrorBody::with_field_errors(fields.clone()),
            DomainError::Internal(detail) => {
                error!(detail = %detail, "request failed");
                ErrorBody::with_message(status, "Internal Server Error")
            }
            other => ErrorBody::with_message(status, other.to_string()),
        };
        HttpResponse::build(status).json(body)
    }
}
