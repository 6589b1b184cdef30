use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An attendee of a single booking
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    pub id: i64,

    pub booking_id: i64,

    pub name: String,

    pub email: String,

    pub time_zone: String,
}
