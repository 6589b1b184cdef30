use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub providers: ProviderConfig,
    pub webhooks: WebhookConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
}

/// Base URLs for the external provider APIs
///
/// Defaults point at the live APIs; overridable for sandbox/test environments.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub google_calendar_base_url: String,
    pub office365_base_url: String,
    pub zoom_base_url: String,
    pub daily_base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookConfig {
    /// Shared secret used to sign outbound webhook payloads.
    /// Unset disables signing; deliveries still carry the payload.
    pub signing_secret: Option<String>,
    pub timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
            providers: ProviderConfig {
                google_calendar_base_url: env::var("GOOGLE_CALENDAR_BASE_URL")
                    .unwrap_or_else(|_| "https://www.googleapis.com/calendar/v3".to_string()),
                office365_base_url: env::var("OFFICE365_BASE_URL")
                    .unwrap_or_else(|_| "https://graph.microsoft.com/v1.0".to_string()),
                zoom_base_url: env::var("ZOOM_BASE_URL")
                    .unwrap_or_else(|_| "https://api.zoom.us/v2".to_string()),
                daily_base_url: env::var("DAILY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.daily.co/v1".to_string()),
            },
            webhooks: WebhookConfig {
                signing_secret: env::var("WEBHOOK_SIGNING_SECRET").ok(),
                timeout_secs: env::var("WEBHOOK_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::Configuration("Invalid WEBHOOK_TIMEOUT_SECS".to_string())
                    })?,
            },
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.webhooks.timeout_secs == 0 {
            return Err(AppError::Configuration(
                "Webhook timeout must be greater than 0".to_string(),
            ));
        }

        if let Some(secret) = &self.webhooks.signing_secret {
            if secret.is_empty() {
                return Err(AppError::Configuration(
                    "WEBHOOK_SIGNING_SECRET must not be empty when set".to_string(),
                ));
            }
        }

        Ok(())
    }
}
