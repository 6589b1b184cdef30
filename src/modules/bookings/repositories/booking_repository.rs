use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::bookings::models::{
    Attendee, Booking, BookingDetail, BookingReference, BookingStatus, Credential,
};

/// Storage operations for bookings and their dependent rows
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Load a booking by uid together with its attendees, provider
    /// references, and the owning user's credentials.
    async fn find_detail_by_uid(&self, uid: &str) -> Result<Option<BookingDetail>>;

    /// Transition the booking's status. Setting the same status twice is
    /// harmless.
    async fn update_status(&self, uid: &str, status: BookingStatus) -> Result<()>;

    /// Delete all attendee rows for the booking
    async fn delete_attendees(&self, booking_id: i64) -> Result<u64>;

    /// Delete all provider reference rows for the booking
    async fn delete_references(&self, booking_id: i64) -> Result<u64>;
}

/// MySQL-backed booking repository
pub struct SqlBookingRepository {
    pool: MySqlPool,
}

impl SqlBookingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingRepository for SqlBookingRepository {
    async fn find_detail_by_uid(&self, uid: &str) -> Result<Option<BookingDetail>> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            SELECT id, uid, user_id, event_type_id, title, description,
                   start_time, end_time, status
            FROM bookings
            WHERE uid = ?
            "#,
        )
        .bind(uid)
        .fetch_optional(&self.pool)
        .await?;

        let Some(booking) = booking else {
            return Ok(None);
        };

        let attendees = sqlx::query_as::<_, Attendee>(
            r#"
            SELECT id, booking_id, name, email, time_zone
            FROM attendees
            WHERE booking_id = ?
            "#,
        )
        .bind(booking.id)
        .fetch_all(&self.pool)
        .await?;

        let references = sqlx::query_as::<_, BookingReference>(
            r#"
            SELECT id, booking_id, provider_type, uid
            FROM booking_references
            WHERE booking_id = ?
            ORDER BY id
            "#,
        )
        .bind(booking.id)
        .fetch_all(&self.pool)
        .await?;

        let credentials = sqlx::query_as::<_, Credential>(
            r#"
            SELECT id, user_id, provider_type, `key`
            FROM credentials
            WHERE user_id = ?
            "#,
        )
        .bind(booking.user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(Some(BookingDetail {
            booking,
            attendees,
            references,
            credentials,
        }))
    }

    async fn update_status(&self, uid: &str, status: BookingStatus) -> Result<()> {
        sqlx::query("UPDATE bookings SET status = ? WHERE uid = ?")
            .bind(status.to_string())
            .bind(uid)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_attendees(&self, booking_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM attendees WHERE booking_id = ?")
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_references(&self, booking_id: i64) -> Result<u64> {
        let result = sqlx::query("DELETE FROM booking_references WHERE booking_id = ?")
            .bind(booking_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
