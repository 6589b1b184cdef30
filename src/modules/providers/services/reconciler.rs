use futures_util::stream::{self, StreamExt};
use std::sync::Arc;
use tracing::debug;

use super::provider_trait::{CalendarClient, VideoClient};
use crate::core::Result;
use crate::modules::bookings::models::{BookingReference, Credential};

/// Maximum provider deletions in flight at once
pub const PROVIDER_CONCURRENCY: usize = 5;

/// Deletes the remote artifacts a booking left behind across providers.
///
/// One deletion attempt per credential, capped at [`PROVIDER_CONCURRENCY`]
/// in-flight calls; outcomes are collected per credential and one provider's
/// failure never cancels the others.
pub struct ArtifactReconciler {
    calendar: Arc<dyn CalendarClient>,
    video: Arc<dyn VideoClient>,
}

impl ArtifactReconciler {
    pub fn new(calendar: Arc<dyn CalendarClient>, video: Arc<dyn VideoClient>) -> Self {
        Self { calendar, video }
    }

    /// Run the fan-out over every credential. No retries.
    pub async fn reconcile(
        &self,
        credentials: &[Credential],
        references: &[BookingReference],
    ) -> Vec<Result<()>> {
        stream::iter(
            credentials
                .iter()
                .map(|credential| self.reconcile_one(credential, references)),
        )
        .buffer_unordered(PROVIDER_CONCURRENCY)
        .collect()
        .await
    }

    /// Delete the artifact matching one credential, if any.
    ///
    /// The first reference whose provider type equals the credential's is
    /// used; a credential with no matching reference, or with a suffix that
    /// is neither `_calendar` nor `_video`, is a no-op.
    async fn reconcile_one(
        &self,
        credential: &Credential,
        references: &[BookingReference],
    ) -> Result<()> {
        let Some(reference) = references
            .iter()
            .find(|r| r.provider_type == credential.provider_type)
        else {
            debug!(
                provider = credential.provider_type.as_str(),
                "No booking reference for credential, nothing to delete"
            );
            return Ok(());
        };

        if credential.is_calendar() {
            self.calendar.delete_event(credential, &reference.uid).await
        } else if credential.is_video() {
            self.video.delete_meeting(credential, &reference.uid).await
        } else {
            Ok(())
        }
    }
}
