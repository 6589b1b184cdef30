use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::provider_trait::VideoClient;
use crate::config::ProviderConfig;
use crate::core::{AppError, Result};
use crate::modules::bookings::models::Credential;

/// Video client over the provider REST APIs (Zoom meetings, Daily rooms)
pub struct ReqwestVideoClient {
    client: Client,
    zoom_base_url: String,
    daily_base_url: String,
}

impl ReqwestVideoClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            zoom_base_url: config.zoom_base_url.clone(),
            daily_base_url: config.daily_base_url.clone(),
        }
    }

    fn delete_url(&self, provider_type: &str, meeting_uid: &str) -> Option<String> {
        match provider_type {
            "zoom_video" => Some(format!("{}/meetings/{}", self.zoom_base_url, meeting_uid)),
            "daily_video" => Some(format!("{}/rooms/{}", self.daily_base_url, meeting_uid)),
            _ => None,
        }
    }
}

#[async_trait]
impl VideoClient for ReqwestVideoClient {
    async fn delete_meeting(&self, credential: &Credential, meeting_uid: &str) -> Result<()> {
        let Some(url) = self.delete_url(&credential.provider_type, meeting_uid) else {
            warn!(
                provider = credential.provider_type.as_str(),
                "No video client for provider, skipping meeting deletion"
            );
            return Ok(());
        };

        let token = credential.access_token().ok_or_else(|| {
            AppError::provider(format!(
                "{}: credential has no access token",
                credential.provider_type
            ))
        })?;

        let response = self
            .client
            .delete(&url)
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| {
                AppError::provider(format!(
                    "{}: meeting deletion request failed: {}",
                    credential.provider_type, e
                ))
            })?;

        if !response.status().is_success() {
            return Err(AppError::provider(format!(
                "{}: meeting deletion returned {}",
                credential.provider_type,
                response.status()
            )));
        }

        Ok(())
    }
}
