pub mod attendee;
pub mod booking;
pub mod booking_reference;
pub mod credential;
pub mod organizer;

pub use attendee::Attendee;
pub use booking::{Booking, BookingDetail, BookingStatus};
pub use booking_reference::BookingReference;
pub use credential::Credential;
pub use organizer::Organizer;
