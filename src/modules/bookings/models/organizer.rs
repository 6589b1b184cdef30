use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Resolved organizer fields for a booking's owning user.
///
/// Enrichment only: a cancellation proceeds even when the organizer cannot
/// be resolved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Organizer {
    pub name: Option<String>,

    pub email: String,

    pub time_zone: String,
}
