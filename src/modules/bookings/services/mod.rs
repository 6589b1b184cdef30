pub mod cancellation_service;

pub use cancellation_service::CancellationService;
