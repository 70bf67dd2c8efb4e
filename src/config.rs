//! Service configuration parsed from environment variables.

use std::time::Duration;

use crate::store::memory::DEFAULT_MEMORY_STORE_LATENCY_MS;
use crate::store::timeout::DEFAULT_STORE_TIMEOUT_MS;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required env var: {var}")]
    Missing { var: &'static str },
    #[error("unknown ZOO_STORE: {0} (expected 'postgres' or 'memory')")]
    UnknownBackend(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Postgres { database_url: String, max_connections: u32 },
    Memory { latency: Duration },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub backend: StoreBackend,
    pub store_timeout: Duration,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// - `ZOO_STORE`: `postgres` (default) or `memory`
    /// - `DATABASE_URL`: required for `postgres`
    /// - `DB_MAX_CONNECTIONS`: default 5
    /// - `PORT`: default 3000
    /// - `STORE_TIMEOUT_MS`: default 5000
    /// - `MEMORY_STORE_LATENCY_MS`: default 500
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend or a missing `DATABASE_URL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown backend or a missing `DATABASE_URL`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let parse_or = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.parse::<u64>().ok())
                .unwrap_or(default)
        };

        let backend = match lookup("ZOO_STORE").as_deref().unwrap_or("postgres") {
            "postgres" => StoreBackend::Postgres {
                database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing { var: "DATABASE_URL" })?,
                max_connections: lookup("DB_MAX_CONNECTIONS")
                    .and_then(|v| v.parse::<u32>().ok())
                    .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            },
            "memory" => StoreBackend::Memory {
                latency: Duration::from_millis(parse_or("MEMORY_STORE_LATENCY_MS", DEFAULT_MEMORY_STORE_LATENCY_MS)),
            },
            other => return Err(ConfigError::UnknownBackend(other.to_owned())),
        };

        let port = lookup("PORT")
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(DEFAULT_PORT);
        let store_timeout = Duration::from_millis(parse_or("STORE_TIMEOUT_MS", DEFAULT_STORE_TIMEOUT_MS));

        Ok(Self { port, backend, store_timeout })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
