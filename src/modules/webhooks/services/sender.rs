use async_trait::async_trait;
use chrono::{DateTime, Utc};
use hmac::{Hmac, Mac};
use reqwest::Client;
use serde_json::json;
use sha2::Sha256;
use std::time::Duration;

use crate::core::{AppError, Result};
use crate::modules::webhooks::models::{CancellationEvent, Trigger};

type HmacSha256 = Hmac<Sha256>;

/// Delivers one webhook payload to one subscriber endpoint
#[async_trait]
pub trait WebhookSender: Send + Sync {
    async fn send(
        &self,
        trigger: Trigger,
        created_at: DateTime<Utc>,
        url: &str,
        payload: &CancellationEvent,
    ) -> Result<()>;
}

/// HTTP webhook sender
///
/// POSTs the standard envelope `{triggerEvent, createdAt, payload}` and, when
/// a signing secret is configured, signs the body with HMAC-SHA256 in the
/// `X-Webhook-Signature` header so subscribers can verify origin.
pub struct ReqwestWebhookSender {
    client: Client,
    signing_secret: Option<String>,
}

impl ReqwestWebhookSender {
    pub fn new(signing_secret: Option<String>, timeout_secs: u64) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            signing_secret,
        }
    }

    /// Hex-encoded HMAC-SHA256 of the serialized body
    pub fn signature(secret: &str, body: &str) -> String {
        let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(body.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

#[async_trait]
impl WebhookSender for ReqwestWebhookSender {
    async fn send(
        &self,
        trigger: Trigger,
        created_at: DateTime<Utc>,
        url: &str,
        payload: &CancellationEvent,
    ) -> Result<()> {
        let body = serde_json::to_string(&json!({
            "triggerEvent": trigger.as_str(),
            "createdAt": created_at.to_rfc3339(),
            "payload": payload,
        }))?;

        let mut request = self
            .client
            .post(url)
            .header("Content-Type", "application/json");

        if let Some(secret) = &self.signing_secret {
            request = request.header("X-Webhook-Signature", Self::signature(secret, &body));
        }

        let response = request
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::delivery(format!("Webhook POST to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(AppError::delivery(format!(
                "Webhook POST to {} returned {}",
                url,
                response.status()
            )));
        }

        Ok(())
    }
}
