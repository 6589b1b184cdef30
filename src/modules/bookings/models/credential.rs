use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Stored authorization material for one external provider on behalf of a
/// user. Read-only in this service.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Credential {
    pub id: i64,

    pub user_id: i64,

    /// Provider type string; the suffix selects the dispatch target
    /// (`_calendar` or `_video`).
    pub provider_type: String,

    /// Provider-specific auth payload (tokens etc.)
    pub key: serde_json::Value,
}

impl Credential {
    pub fn is_calendar(&self) -> bool {
        self.provider_type.ends_with("_calendar")
    }

    pub fn is_video(&self) -> bool {
        self.provider_type.ends_with("_video")
    }

    /// Bearer token from the auth payload, if present
    pub fn access_token(&self) -> Option<&str> {
        self.key.get("access_token").and_then(|v| v.as_str())
    }
}
