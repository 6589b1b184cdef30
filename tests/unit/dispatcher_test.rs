// Unit tests for the notification dispatcher:
// - every subscriber URL gets its own detached delivery
// - slow or failing deliveries never delay the caller
// - subscriber lookup failures are swallowed

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tokio::time::{sleep, Duration};

use bookflow::core::{AppError, Result};
use bookflow::modules::bookings::models::{Booking, BookingStatus};
use bookflow::modules::webhooks::models::{CancellationEvent, Trigger};
use bookflow::modules::webhooks::repositories::SubscriberRepository;
use bookflow::modules::webhooks::services::{NotificationDispatcher, WebhookSender};

fn event() -> CancellationEvent {
    let start = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();
    let booking = Booking {
        id: 1,
        uid: "abc".to_string(),
        user_id: 7,
        event_type_id: Some(3),
        title: "30min Intro".to_string(),
        description: None,
        start_time: start,
        end_time: start + chrono::Duration::minutes(30),
        status: BookingStatus::Accepted,
    };
    CancellationEvent::from_booking(&booking, None, &[])
}

struct StaticSubscriberRepository {
    urls: Result<Vec<String>>,
}

#[async_trait]
impl SubscriberRepository for StaticSubscriberRepository {
    async fn subscriber_urls(
        &self,
        _user_id: i64,
        _event_type_id: Option<i64>,
        _trigger: Trigger,
    ) -> Result<Vec<String>> {
        match &self.urls {
            Ok(urls) => Ok(urls.clone()),
            Err(_) => Err(AppError::Database(sqlx::Error::PoolClosed)),
        }
    }
}

#[derive(Default)]
struct RecordingSender {
    sends: Mutex<Vec<(Trigger, String)>>,
    delay: Option<Duration>,
    fail: bool,
}

#[async_trait]
impl WebhookSender for RecordingSender {
    async fn send(
        &self,
        trigger: Trigger,
        _created_at: DateTime<Utc>,
        url: &str,
        _payload: &CancellationEvent,
    ) -> Result<()> {
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.sends.lock().unwrap().push((trigger, url.to_string()));
        if self.fail {
            return Err(AppError::delivery("simulated failure"));
        }
        Ok(())
    }
}

async fn wait_for_sends(sender: &RecordingSender, expected: usize) {
    for _ in 0..100 {
        if sender.sends.lock().unwrap().len() >= expected {
            return;
        }
        sleep(Duration::from_millis(10)).await;
    }
    panic!("expected {} sends, saw {}", expected, sender.sends.lock().unwrap().len());
}

#[tokio::test]
async fn test_dispatches_to_every_subscriber() {
    let sender = Arc::new(RecordingSender::default());
    let dispatcher = NotificationDispatcher::new(
        Arc::new(StaticSubscriberRepository {
            urls: Ok(vec![
                "https://hooks.example.com/a".to_string(),
                "https://hooks.example.com/b".to_string(),
            ]),
        }),
        sender.clone(),
    );

    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;

    wait_for_sends(&sender, 2).await;

    let sends = sender.sends.lock().unwrap();
    let mut urls: Vec<&str> = sends.iter().map(|(_, url)| url.as_str()).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec!["https://hooks.example.com/a", "https://hooks.example.com/b"]
    );
    assert!(sends
        .iter()
        .all(|(trigger, _)| *trigger == Trigger::BookingCancelled));
}

#[tokio::test]
async fn test_slow_delivery_does_not_block_notify() {
    let sender = Arc::new(RecordingSender {
        delay: Some(Duration::from_millis(500)),
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(
        Arc::new(StaticSubscriberRepository {
            urls: Ok(vec!["https://hooks.example.com/slow".to_string()]),
        }),
        sender.clone(),
    );

    let started = Instant::now();
    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;

    assert!(
        started.elapsed() < Duration::from_millis(200),
        "notify must not wait for delivery"
    );

    wait_for_sends(&sender, 1).await;
}

#[tokio::test]
async fn test_delivery_failure_is_swallowed() {
    let sender = Arc::new(RecordingSender {
        fail: true,
        ..Default::default()
    });
    let dispatcher = NotificationDispatcher::new(
        Arc::new(StaticSubscriberRepository {
            urls: Ok(vec!["https://hooks.example.com/a".to_string()]),
        }),
        sender.clone(),
    );

    // Must not panic or propagate anything.
    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;

    wait_for_sends(&sender, 1).await;
}

#[tokio::test]
async fn test_lookup_failure_skips_dispatch() {
    let sender = Arc::new(RecordingSender::default());
    let dispatcher = NotificationDispatcher::new(
        Arc::new(StaticSubscriberRepository {
            urls: Err(AppError::Database(sqlx::Error::PoolClosed)),
        }),
        sender.clone(),
    );

    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;

    sleep(Duration::from_millis(50)).await;
    assert!(sender.sends.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_no_subscribers_means_no_sends() {
    let sender = Arc::new(RecordingSender::default());
    let dispatcher = NotificationDispatcher::new(
        Arc::new(StaticSubscriberRepository { urls: Ok(vec![]) }),
        sender.clone(),
    );

    dispatcher
        .notify(7, None, Trigger::BookingCancelled, &event())
        .await;

    sleep(Duration::from_millis(50)).await;
    assert!(sender.sends.lock().unwrap().is_empty());
}

struct CountingSubscriberRepository {
    lookups: AtomicUsize,
}

#[async_trait]
impl SubscriberRepository for CountingSubscriberRepository {
    async fn subscriber_urls(
        &self,
        _user_id: i64,
        _event_type_id: Option<i64>,
        _trigger: Trigger,
    ) -> Result<Vec<String>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(vec![])
    }
}

#[tokio::test]
async fn test_one_lookup_per_notify() {
    let repo = Arc::new(CountingSubscriberRepository {
        lookups: AtomicUsize::new(0),
    });
    let sender = Arc::new(RecordingSender::default());
    let dispatcher = NotificationDispatcher::new(repo.clone(), sender);

    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;
    dispatcher
        .notify(7, Some(3), Trigger::BookingCancelled, &event())
        .await;

    assert_eq!(repo.lookups.load(Ordering::SeqCst), 2);
}
