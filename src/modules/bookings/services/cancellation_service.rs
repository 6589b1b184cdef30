use std::sync::Arc;
use tracing::{info, warn};

use crate::core::{AppError, Result};
use crate::modules::bookings::models::BookingStatus;
use crate::modules::bookings::repositories::{BookingRepository, UserRepository};
use crate::modules::providers::ArtifactReconciler;
use crate::modules::webhooks::models::{CancellationEvent, Trigger};
use crate::modules::webhooks::services::NotificationDispatcher;

/// Orchestrates booking cancellation.
///
/// A booking counts as cancelled once its status commit succeeds; webhook
/// notification, remote artifact deletion, and dependent-row cleanup are
/// best-effort around that single authoritative write.
pub struct CancellationService {
    booking_repo: Arc<dyn BookingRepository>,
    user_repo: Arc<dyn UserRepository>,
    dispatcher: NotificationDispatcher,
    reconciler: ArtifactReconciler,
}

impl CancellationService {
    pub fn new(
        booking_repo: Arc<dyn BookingRepository>,
        user_repo: Arc<dyn UserRepository>,
        dispatcher: NotificationDispatcher,
        reconciler: ArtifactReconciler,
    ) -> Self {
        Self {
            booking_repo,
            user_repo,
            dispatcher,
            reconciler,
        }
    }

    /// Cancel the booking identified by `uid`.
    ///
    /// Fails with `NotFound` when the uid is empty or unknown, and with
    /// `Database` when the status commit fails (in which case no remote
    /// deletion or cleanup is attempted). Provider and delivery failures
    /// after the commit are logged and do not fail the call.
    pub async fn cancel(&self, uid: &str) -> Result<()> {
        if uid.is_empty() {
            return Err(AppError::not_found("Booking not found"));
        }

        let detail = self
            .booking_repo
            .find_detail_by_uid(uid)
            .await?
            .ok_or_else(|| AppError::not_found("Booking not found"))?;

        // Best-effort enrichment; the event is emitted without an organizer
        // when resolution fails.
        let organizer = match self.user_repo.find_organizer(detail.booking.user_id).await {
            Ok(organizer) => organizer,
            Err(e) => {
                warn!(uid, error = %e, "Organizer lookup failed");
                None
            }
        };

        let event = CancellationEvent::from_booking(&detail.booking, organizer, &detail.attendees);

        self.dispatcher
            .notify(
                detail.booking.user_id,
                detail.booking.event_type_id,
                Trigger::BookingCancelled,
                &event,
            )
            .await;

        // Committing first, and blocking whilst doing so, ensures a cancel
        // always succeeds even if subsequent integrations fail.
        self.booking_repo
            .update_status(uid, BookingStatus::Cancelled)
            .await?;

        info!(uid, "Booking cancelled");

        let (outcomes, attendee_cleanup, reference_cleanup) = tokio::join!(
            self.reconciler
                .reconcile(&detail.credentials, &detail.references),
            self.booking_repo.delete_attendees(detail.booking.id),
            self.booking_repo.delete_references(detail.booking.id),
        );

        for error in outcomes.iter().filter_map(|r| r.as_ref().err()) {
            warn!(uid, error = %error, "Remote artifact deletion failed");
        }

        if let Err(e) = attendee_cleanup {
            warn!(uid, error = %e, "Attendee cleanup failed");
        }

        if let Err(e) = reference_cleanup {
            warn!(uid, error = %e, "Booking reference cleanup failed");
        }

        Ok(())
    }
}
