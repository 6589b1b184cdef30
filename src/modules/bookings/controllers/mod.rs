pub mod cancel_controller;

pub use cancel_controller::configure;
