use thiserror::Error;

/// The user service could not answer a lookup. A remote "not found" is not an
/// error and never ends up here.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("user service unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("user service answered {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
    #[error("malformed user payload: {0}")]
    Malformed(String),
}
