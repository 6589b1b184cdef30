pub mod controllers;
pub mod models;
pub mod repositories;
pub mod services;

pub use models::{Attendee, Booking, BookingDetail, BookingReference, BookingStatus, Credential};
