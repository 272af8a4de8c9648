//! alpha-calendar server entry point.
//!
//! Starts the Axum HTTP server for the event calendar REST API.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use alpha_calendar::api;
use alpha_calendar::app_state::AppState;
use alpha_calendar::auth::AuthProviderClient;
use alpha_calendar::config::CalendarConfig;
use alpha_calendar::persistence::PostgresEventStore;
use alpha_calendar::service::{EventService, IngestTrigger};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = Arc::new(CalendarConfig::from_env()?);
    tracing::info!(addr = %config.listen_addr, "starting alpha-calendar");

    // Connect to the store and run pending migrations
    let pool = PgPoolOptions::new()
        .max_connections(config.database_max_connections)
        .min_connections(config.database_min_connections)
        .acquire_timeout(Duration::from_secs(config.database_connect_timeout_secs))
        .connect(&config.database_url)
        .await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    // Build service layer
    let store = Arc::new(PostgresEventStore::new(pool));
    let events = Arc::new(EventService::new(store));
    let ingest = Arc::new(IngestTrigger::new(config.ingest_trigger_url.clone()));
    let sessions = Arc::new(AuthProviderClient::new(
        config.auth_base_url.clone(),
        config.auth_api_key.clone(),
    ));

    // Build application state
    let app_state = AppState {
        events,
        ingest,
        sessions,
        config: Arc::clone(&config),
    };

    // Build router
    let app = Router::new()
        .merge(api::build_router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
