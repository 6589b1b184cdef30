use std::sync::Arc;

use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::core::error::AppError;
use crate::modules::bookings::services::CancellationService;

/// Cancellation request body
#[derive(Debug, Deserialize)]
pub struct CancelBookingRequest {
    #[serde(default)]
    pub uid: String,
}

/// Cancel a booking
/// DELETE /bookings/cancel (POST accepted for clients that cannot send
/// DELETE bodies)
///
/// Returns 204 once the booking's status commit succeeds; failures of
/// remote artifact deletion or webhook delivery do not change the response.
pub async fn cancel_booking(
    service: web::Data<Arc<CancellationService>>,
    request: web::Json<CancelBookingRequest>,
) -> Result<HttpResponse, AppError> {
    service.cancel(&request.uid).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// Default handler for the cancel resource: reject every other verb before
/// any body parsing or storage work happens.
pub async fn method_not_allowed() -> Result<HttpResponse, AppError> {
    Err(AppError::MethodNotAllowed)
}

/// Configure booking routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/bookings").service(
            web::resource("/cancel")
                .route(web::delete().to(cancel_booking))
                .route(web::post().to(cancel_booking))
                .default_service(web::route().to(method_not_allowed)),
        ),
    );
}
