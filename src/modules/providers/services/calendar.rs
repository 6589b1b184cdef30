use async_trait::async_trait;
use reqwest::Client;
use tracing::warn;

use super::provider_trait::CalendarClient;
use crate::config::ProviderConfig;
use crate::core::{AppError, Result};
use crate::modules::bookings::models::Credential;

/// Calendar client over the provider REST APIs
///
/// Supports Google Calendar and Office 365 (Microsoft Graph) event deletion
/// with the bearer token stored in the credential payload.
pub struct ReqwestCalendarClient {
    client: Client,
    google_base_url: String,
    office365_base_url: String,
}

impl ReqwestCalendarClient {
    pub fn new(config: &ProviderConfig) -> Self {
        Self {
            client: Client::new(),
            google_base_url: config.google_calendar_base_url.clone(),
            office365_base_url: config.office365_base_url.clone(),
        }
    }

    fn delete_url(&self, provider_type: &str, event_uid: &str) -> Option<String> {
        match provider_type {
            "google_calendar" => Some(format!(
                "{}/calendars/primary/events/{}",
                self.google_base_url, event_uid
            )),
            "office365_calendar" => Some(format!("{}/me/events/{}", self.office365_base_url, event_uid)),
            _ => None,
        }
    }
}

#[async_trait]
impl CalendarClient for ReqwestCalendarClient {
    async fn delete_event(&self, credential: &Credential, event_uid: &str) -> Result<()> {
        let Some(url) = self.delete_url(&credential.provider_type, event_uid) else {
            // Unknown calendar integrations are skipped, matching the
            // reconciler's treatment of unknown suffixes.
            warn!(
                provider = credential.provider_type.as_str(),
                "No calendar client for provider, skipping event deletion"
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
                    "{}: event deletion request failed: {}",
                    credential.provider_type, e
                ))
            })?;

        if !response.status().is_success() {
            return Err(AppError::provider(format!(
                "{}: event deletion returned {}",
                credential.provider_type,
                response.status()
            )));
        }

        Ok(())
    }
}
