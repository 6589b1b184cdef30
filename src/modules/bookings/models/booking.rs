// A booking links an organizing user, its attendees, and a time range.
// Bookings are created elsewhere; this service only transitions them to
// CANCELLED and removes their dependent rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{Attendee, BookingReference, Credential};

/// Booking status lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR(20)", rename_all = "UPPERCASE")]
pub enum BookingStatus {
    /// Awaiting organizer confirmation
    #[serde(rename = "PENDING")]
    Pending,

    /// Confirmed by the organizer
    #[serde(rename = "ACCEPTED")]
    Accepted,

    /// Cancelled by either party
    #[serde(rename = "CANCELLED")]
    Cancelled,

    /// Declined by the organizer
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingStatus::Pending => write!(f, "PENDING"),
            BookingStatus::Accepted => write!(f, "ACCEPTED"),
            BookingStatus::Cancelled => write!(f, "CANCELLED"),
            BookingStatus::Rejected => write!(f, "REJECTED"),
        }
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "PENDING" => Ok(BookingStatus::Pending),
            "ACCEPTED" => Ok(BookingStatus::Accepted),
            "CANCELLED" => Ok(BookingStatus::Cancelled),
            "REJECTED" => Ok(BookingStatus::Rejected),
            _ => Err(format!("Invalid booking status: {}", s)),
        }
    }
}

/// Represents a scheduled booking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    /// Internal numeric ID
    pub id: i64,

    /// Globally unique external identifier
    pub uid: String,

    /// Owning user ID
    pub user_id: i64,

    /// Event type the booking was made against
    pub event_type_id: Option<i64>,

    pub title: String,

    pub description: Option<String>,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    pub status: BookingStatus,
}

/// A booking together with everything cancellation needs: its attendees,
/// its provider references, and the owning user's credentials.
#[derive(Debug, Clone)]
pub struct BookingDetail {
    pub booking: Booking,
    pub attendees: Vec<Attendee>,
    pub references: Vec<BookingReference>,
    pub credentials: Vec<Credential>,
}
