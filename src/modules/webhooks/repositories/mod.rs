pub mod subscriber_repository;

pub use subscriber_repository::{SqlSubscriberRepository, SubscriberRepository};
