use std::time::Duration;

use service_common::Settings;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub cors_origins: Vec<String>,
    /// Base address of the user service, e.g. `http://user-service:8081`.
    pub user_service_url: String,
    pub user_service_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_settings(&Settings::from_env())
    }

    pub fn from_settings<F>(settings: &Settings<F>) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_ms: u64 = settings.parsed_or(
            "USER_SERVICE_TIMEOUT_MS",
            user_client::DEFAULT_TIMEOUT.as_millis() as u64,
        )?;
        if timeout_ms == 0 {
            anyhow::bail!("USER_SERVICE_TIMEOUT_MS must be greater than zero");
        }

        Ok(Self {
            host: settings.string_or("HOST", "0.0.0.0"),
            port: settings.parsed_or("PORT", 8082)?,
            database_url: settings.required("DATABASE_URL")?,
            database_max_connections: settings.parsed_or("DATABASE_MAX_CONNECTIONS", 10)?,
            cors_origins: settings.list("CORS_ORIGINS"),
            user_service_url: settings.required("USER_SERVICE_URL")?,
            user_service_timeout: Duration::from_millis(timeout_ms),
        })
    }
}
