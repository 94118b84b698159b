use std::sync::{Arc, Mutex};

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use clinique::config::AppConfig;
use clinique::db;
use clinique::handlers;
use clinique::services::mail::mailgun::MailgunMailer;
use clinique::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let conn = db::init_db(&config.database_url)?;

    if config.mailgun_api_key.is_empty() {
        tracing::warn!("MAILGUN_API_KEY is not set, outgoing emails will fail (bookings still work)");
    }
    let mailer = MailgunMailer::new(config.mailgun_domain.clone(), config.mailgun_api_key.clone());

    let state = Arc::new(AppState {
        db: Arc::new(Mutex::new(conn)),
        config: config.clone(),
        mailer: Box::new(mailer),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::catalog::list_services))
        .route("/api/team", get(handlers::catalog::list_team))
        .route("/api/hours", get(handlers::catalog::list_hours))
        .route("/api/appointments", post(handlers::booking::create_appointment))
        .route("/api/contact", post(handlers::contact::create_contact))
        .route(
            "/api/admin/appointments",
            get(handlers::admin::get_appointments),
        )
        .route(
            "/api/admin/appointments/:id/status",
            post(handlers::admin::update_appointment_status),
        )
        .route("/api/admin/contacts", get(handlers::admin::get_contacts))
        .route(
            "/api/admin/contacts/:id/read",
            post(handlers::admin::mark_contact_read),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
