use std::sync::Arc;

use post_service::application::post_service::PostService;
use post_service::data::post_repository::PostgresPostRepository;
use post_service::infrastructure::config::AppConfig;
use post_service::infrastructure::database::{create_pool, run_migrations};
use post_service::server::start_rest_server;
use service_common::init_logging;
use user_client::UserServiceClient;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging("info,post_service=debug,user_client=debug");

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&pool).await?;

    let users = UserServiceClient::connect(&config.user_service_url, config.user_service_timeout)?;
    let service = PostService::new(
        Arc::new(PostgresPostRepository::new(pool)),
        Arc::new(users),
    );

    start_rest_server(config, service).await
}
