pub mod dto;
pub mod handlers;

use actix_web::web;
use service_common::{health, json_config, path_config};

use crate::application::user_service::UserService;

/// Registers the user API and its extractor configuration on an app.
pub fn routes(service: UserService) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(service))
            .app_data(json_config())
            .app_data(path_config())
            .route("/health", health("user-service"))
            .service(handlers::user::scope());
    }
}
