use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::bookings::models::{Attendee, Booking, Organizer};

/// Symbolic event names used to select interested subscribers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trigger {
    #[serde(rename = "BOOKING_CANCELLED")]
    BookingCancelled,
}

impl Trigger {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trigger::BookingCancelled => "BOOKING_CANCELLED",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person as rendered into webhook payloads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: Option<String>,
    pub email: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

/// Webhook payload body for a cancelled booking.
///
/// Ephemeral: assembled per request, sent to subscribers, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancellationEvent {
    /// Event kind; mirrors the booking title
    #[serde(rename = "type")]
    pub kind: String,

    pub title: String,

    pub description: String,

    pub start_time: DateTime<Utc>,

    pub end_time: DateTime<Utc>,

    /// Absent when organizer resolution failed
    pub organizer: Option<Person>,

    pub attendees: Vec<Person>,
}

impl CancellationEvent {
    /// Assemble the payload from a booking, its (optionally resolved)
    /// organizer, and its attendees.
    pub fn from_booking(
        booking: &Booking,
        organizer: Option<Organizer>,
        attendees: &[Attendee],
    ) -> Self {
        CancellationEvent {
            kind: booking.title.clone(),
            title: booking.title.clone(),
            description: booking.description.clone().unwrap_or_default(),
            start_time: booking.start_time,
            end_time: booking.end_time,
            organizer: organizer.map(|o| Person {
                name: o.name,
                email: o.email,
                time_zone: o.time_zone,
            }),
            attendees: attendees
                .iter()
                .map(|a| Person {
                    name: Some(a.name.clone()),
                    email: a.email.clone(),
                    time_zone: a.time_zone.clone(),
                })
                .collect(),
        }
    }
}
