//! Bookflow Booking Cancellation Service Library
//!
//! This library provides the cancellation orchestration core: status
//! transition, webhook notification, and remote artifact teardown across
//! calendar and video providers.

pub mod config;
pub mod core;
pub mod modules;

// Re-export commonly used types
pub use modules::bookings;
pub use modules::providers;
pub use modules::webhooks;
