use std::sync::Arc;

use service_common::init_logging;
use user_service::application::user_service::UserService;
use user_service::data::user_repository::PostgresUserRepository;
use user_service::infrastructure::config::AppConfig;
use user_service::infrastructure::database::{create_pool, run_migrations};
use user_service::server::start_rest_server;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging("info,user_service=debug");

    let config = AppConfig::from_env()?;
    let pool = create_pool(&config.database_url, config.database_max_connections).await?;
    run_migrations(&pool).await?;

    let service = UserService::new(Arc::new(PostgresUserRepository::new(pool)));

    start_rest_server(config, service).await
}
