use async_trait::async_trait;

use crate::core::Result;
use crate::modules::bookings::models::Credential;

/// Calendar provider client
///
/// Implementations dispatch on the credential's concrete provider type
/// (e.g. "google_calendar", "office365_calendar").
#[async_trait]
pub trait CalendarClient: Send + Sync {
    /// Delete the remote calendar event identified by `event_uid`
    async fn delete_event(&self, credential: &Credential, event_uid: &str) -> Result<()>;
}

/// Video-conferencing provider client
#[async_trait]
pub trait VideoClient: Send + Sync {
    /// Delete the remote meeting identified by `meeting_uid`
    async fn delete_meeting(&self, credential: &Credential, meeting_uid: &str) -> Result<()>;
}
