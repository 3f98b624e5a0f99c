use std::str::FromStr;

use anyhow::{Context, anyhow};

/// Reads settings through a lookup function so that services can be configured
/// from the process environment or, in tests, from a plain map.
pub struct Settings<F> {
    lookup: F,
}

impl Settings<fn(&str) -> Option<String>> {
    /// Process environment, after loading `.env` if one exists.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            lookup: |key| std::env::var(key).ok(),
        }
    }
}

impl<F> Settings<F>
where
    F: Fn(&str) -> Option<String>,
{
    pub fn new(lookup: F) -> Self {
        Self { lookup }
    }

    fn get(&self, key: &str) -> Option<String> {
        (self.lookup)(key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    pub fn string_or(&self, key: &str, default: &str) -> String {
        self.get(key).unwrap_or_else(|| default.to_string())
    }

    pub fn required(&self, key: &str) -> anyhow::Result<String> {
        self.get(key).ok_or_else(|| anyhow!("{key} must be set"))
    }

    pub fn parsed_or<T>(&self, key: &str, default: T) -> anyhow::Result<T>
    where
        T: FromStr,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        match self.get(key) {
            Some(raw) => raw.parse().with_context(|| format!("invalid {key}: {raw:?}")),
            None => Ok(default),
        }
    }

    /// Comma-separated list; blank entries are dropped.
    pub fn list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default()
    }
}
