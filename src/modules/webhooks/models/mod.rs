pub mod cancellation_event;

pub use cancellation_event::{CancellationEvent, Person, Trigger};
