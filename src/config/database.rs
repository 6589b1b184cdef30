use crate::core::{AppError, Result};
use serde::Deserialize;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::env;
use std::time::Duration;

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub min_connections: u32,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Result<Self> {
        let parse_u32 = |var: &str, default: &str| -> Result<u32> {
            env::var(var)
                .unwrap_or_else(|_| default.to_string())
                .parse()
                .map_err(|_| AppError::Configuration(format!("Invalid {}", var)))
        };

        Ok(DatabaseConfig {
            url: env::var("DATABASE_URL")
                .map_err(|_| AppError::Configuration("DATABASE_URL not set".to_string()))?,
            min_connections: parse_u32("DATABASE_MIN_CONNECTIONS", "2")?,
            max_connections: parse_u32("DATABASE_MAX_CONNECTIONS", "15")?,
        })
    }

    /// Create a MySQL connection pool.
    ///
    /// A cancellation touches the pool a handful of times (one joined load,
    /// the status commit, two cleanup deletes, a subscriber lookup), so the
    /// pool stays small with a short acquire deadline.
    pub async fn create_pool(&self) -> Result<MySqlPool> {
        MySqlPoolOptions::new()
            .min_connections(self.min_connections)
            .max_connections(self.max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(300))
            .connect(&self.url)
            .await
            .map_err(AppError::Database)
    }
}
