use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::core::Result;
use crate::modules::webhooks::models::Trigger;

/// Resolves which endpoints subscribe to an event
#[async_trait]
pub trait SubscriberRepository: Send + Sync {
    /// Active subscriber URLs for (user, event type, trigger).
    ///
    /// Subscriptions scoped to a specific event type match only that type;
    /// subscriptions without one match every event type of the user.
    async fn subscriber_urls(
        &self,
        user_id: i64,
        event_type_id: Option<i64>,
        trigger: Trigger,
    ) -> Result<Vec<String>>;
}

/// MySQL-backed subscriber repository
pub struct SqlSubscriberRepository {
    pool: MySqlPool,
}

impl SqlSubscriberRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriberRepository for SqlSubscriberRepository {
    async fn subscriber_urls(
        &self,
        user_id: i64,
        event_type_id: Option<i64>,
        trigger: Trigger,
    ) -> Result<Vec<String>> {
        let urls = sqlx::query_scalar::<_, String>(
            r#"
            SELECT w.subscriber_url
            FROM webhooks w
            WHERE w.user_id = ?
              AND w.active = TRUE
              AND w.event_trigger = ?
              AND (w.event_type_id IS NULL OR w.event_type_id = ?)
            "#,
        )
        .bind(user_id)
        .bind(trigger.as_str())
        .bind(event_type_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(urls)
    }
}
