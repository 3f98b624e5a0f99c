use service_common::Settings;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_settings(&Settings::from_env())
    }

    pub fn from_settings<F>(settings: &Settings<F>) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            host: settings.string_or("HOST", "0.0.0.0"),
            port: settings.parsed_or("PORT", 8081)?,
            database_url: settings.required("DATABASE_URL")?,
            database_max_connections: settings.parsed_or("DATABASE_MAX_CONNECTIONS", 10)?,
            cors_origins: settings.list("CORS_ORIGINS"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_only_database_is_set() {
        let settings = Settings::new(|key: &str| {
            (key == "DATABASE_URL").then(|| "postgres://localhost/users".to_string())
        });
        let config = AppConfig::from_settings(&settings).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8081);
        assert_eq!(config.database_max_connections, 10);
        assert!(config.cors_origins.is_empty());
    }

    #[test]
    fn database_url_is_required() {
        let settings = Settings::new(|_: &str| None);
        let err = AppConfig::from_settings(&settings).unwrap_err();
        assert_eq!(err.to_string(), "DATABASE_URL must be set");
    }
}
