use actix_web::{App, HttpServer};
use service_common::{RequestContext, build_cors, security_headers};
use tracing::info;

use crate::application::user_service::UserService;
use crate::infrastructure::config::AppConfig;
use crate::presentation::routes;

pub async fn start_rest_server(config: AppConfig, service: UserService) -> anyhow::Result<()> {
    let bind_address = (config.host.clone(), config.port);
    info!(host = %config.host, port = config.port, "user service starting");

    let origins = config.cors_origins;
    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&origins))
            .wrap(security_headers())
            .wrap(RequestContext)
            .configure(routes(service.clone()))
    })
    .bind(bind_address)?
    .run()
    .await?;

    info!("user service stopped");
    Ok(())
}
