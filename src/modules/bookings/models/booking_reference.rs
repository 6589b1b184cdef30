use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Maps a booking to the artifact a provider created for it
/// (e.g. a Google Calendar event id or a Zoom meeting id).
///
/// At most one reference per provider type is expected per booking, but this
/// is not enforced; consumers take the first match in load order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct BookingReference {
    pub id: i64,

    pub booking_id: i64,

    /// Provider type string, e.g. "google_calendar" or "zoom_video"
    pub provider_type: String,

    /// Identifier the provider assigned to the remote artifact
    pub uid: String,
}
