//! Plumbing shared by the user and post services: logging bootstrap, the
//! request-context middleware, the JSON error envelope and HTTP helpers.

pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod middleware;
pub mod validation;

pub use config::Settings;
pub use error::{ErrorBody, FieldErrors, error_response, json_config, path_config};
pub use http::{build_cors, health, security_headers};
pub use logging::init_logging;
pub use middleware::{RequestContext, RequestId};
pub use validation::not_blank;
