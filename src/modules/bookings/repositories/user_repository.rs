use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::bookings::models::Organizer;

/// User lookups needed by cancellation
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve organizer fields (name, email, time zone) for a user
    async fn find_organizer(&self, user_id: i64) -> Result<Option<Organizer>>;
}

/// MySQL-backed user repository
pub struct SqlUserRepository {
    pool: MySqlPool,
}

impl SqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for SqlUserRepository {
    async fn find_organizer(&self, user_id: i64) -> Result<Option<Organizer>> {
        let organizer = sqlx::query_as::<_, Organizer>(
            r#"
            SELECT name, email, time_zone
            FROM users
            WHERE id = ?
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(organizer)
    }
}
