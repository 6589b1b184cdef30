pub mod booking_repository;
pub mod user_repository;

pub use booking_repository::{BookingRepository, SqlBookingRepository};
pub use user_repository::{SqlUserRepository, UserRepository};
