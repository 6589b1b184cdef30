use std::sync::Arc;

use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bookflow::config::Config;
use bookflow::modules::bookings::controllers;
use bookflow::modules::bookings::repositories::{SqlBookingRepository, SqlUserRepository};
use bookflow::modules::bookings::services::CancellationService;
use bookflow::modules::providers::{
    ArtifactReconciler, ReqwestCalendarClient, ReqwestVideoClient,
};
use bookflow::modules::webhooks::repositories::SqlSubscriberRepository;
use bookflow::modules::webhooks::services::{NotificationDispatcher, ReqwestWebhookSender};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookflow=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!("Starting Bookflow Cancellation Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Create database connection pool
    let db_pool = config
        .database
        .create_pool()
        .await
        .map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Database pool initialized (up to {} connections)",
        config.database.max_connections
    );

    // Wire collaborators
    let booking_repo = Arc::new(SqlBookingRepository::new(db_pool.clone()));
    let user_repo = Arc::new(SqlUserRepository::new(db_pool.clone()));
    let subscriber_repo = Arc::new(SqlSubscriberRepository::new(db_pool.clone()));

    let sender = Arc::new(ReqwestWebhookSender::new(
        config.webhooks.signing_secret.clone(),
        config.webhooks.timeout_secs,
    ));
    let dispatcher = NotificationDispatcher::new(subscriber_repo, sender);

    let calendar = Arc::new(ReqwestCalendarClient::new(&config.providers));
    let video = Arc::new(ReqwestVideoClient::new(&config.providers));
    let reconciler = ArtifactReconciler::new(calendar, video);

    let cancellation_service = Arc::new(CancellationService::new(
        booking_repo,
        user_repo,
        dispatcher,
        reconciler,
    ));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::Data::new(cancellation_service.clone()))
            .route("/health", web::get().to(health_check))
            .configure(controllers::configure)
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await?;

    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bookflow"
    }))
}
