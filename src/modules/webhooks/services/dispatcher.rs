use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::modules::webhooks::models::{CancellationEvent, Trigger};
use crate::modules::webhooks::repositories::SubscriberRepository;
use crate::modules::webhooks::services::sender::WebhookSender;

/// Fire-and-forget notification fan-out to webhook subscribers.
///
/// Endpoint resolution is awaited; deliveries are detached tasks whose
/// outcomes are logged and never joined, so a slow or failing subscriber
/// cannot delay or abort the caller.
#[derive(Clone)]
pub struct NotificationDispatcher {
    subscriber_repo: Arc<dyn SubscriberRepository>,
    sender: Arc<dyn WebhookSender>,
}

impl NotificationDispatcher {
    pub fn new(
        subscriber_repo: Arc<dyn SubscriberRepository>,
        sender: Arc<dyn WebhookSender>,
    ) -> Self {
        Self {
            subscriber_repo,
            sender,
        }
    }

    /// Dispatch `payload` to every subscriber of (user, event type, trigger).
    ///
    /// Never fails: a subscriber lookup error is logged and swallowed, and
    /// per-endpoint delivery outcomes stay inside their spawned tasks.
    pub async fn notify(
        &self,
        user_id: i64,
        event_type_id: Option<i64>,
        trigger: Trigger,
        payload: &CancellationEvent,
    ) {
        let urls = match self
            .subscriber_repo
            .subscriber_urls(user_id, event_type_id, trigger)
            .await
        {
            Ok(urls) => urls,
            Err(e) => {
                warn!(
                    user_id,
                    trigger = %trigger,
                    error = %e,
                    "Subscriber lookup failed, skipping webhook dispatch"
                );
                return;
            }
        };

        if urls.is_empty() {
            debug!(user_id, trigger = %trigger, "No webhook subscribers");
            return;
        }

        let created_at = Utc::now();

        for url in urls {
            let sender = Arc::clone(&self.sender);
            let payload = payload.clone();

            tokio::spawn(async move {
                match sender.send(trigger, created_at, &url, &payload).await {
                    Ok(()) => {
                        debug!(url = url.as_str(), trigger = %trigger, "Webhook delivered");
                    }
                    Err(e) => {
                        warn!(
                            url = url.as_str(),
                            trigger = %trigger,
                            error = %e,
                            "Webhook delivery failed"
                        );
                    }
                }
            });
        }
    }
}
