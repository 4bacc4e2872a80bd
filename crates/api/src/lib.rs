//! # Hirondelle API
//!
//! Web server for the wedding site backend: slot reservations (DJ sets,
//! brunch cooking, volunteer positions), RSVP submissions with their
//! notification side channel, carpool offers, and proposal emails.
//!
//! ## Architecture
//!
//! - **Routes**: endpoint and URL structure
//! - **Handlers**: request processing logic
//! - **Middleware**: error-to-response mapping
//! - **Config**: environment configuration
//!
//! The API uses Axum as the web framework and SQLx for database access.
//! All shared dependencies (connection pool, notifier) are built once at
//! startup and injected through [`ApiState`]; nothing lives in module
//! globals.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware mapping domain errors to HTTP responses
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, Method};
use axum::Router;
use eyre::Result;
use hirondelle_notify::Notifier;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for database operations
    pub db_pool: PgPool,
    /// Outbound notification channels
    pub notifier: Notifier,
}

/// Starts the API server with the provided configuration, database pool
/// and notifier.
///
/// Sets up logging, builds the router, applies the CORS / trace / timeout
/// layers and serves until the process is stopped.
pub async fn start_server(
    config: config::ApiConfig,
    db_pool: PgPool,
    notifier: Notifier,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState { db_pool, notifier });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot reservation + listing endpoints
        .merge(routes::slots::routes())
        // RSVP submission and webhook endpoints
        .merge(routes::rsvp::routes())
        // Carpool offer endpoints
        .merge(routes::carpool::routes())
        // Proposal endpoint
        .merge(routes::proposals::routes())
        // Attach shared state to all routes
        .with_state(state);

    // The site is served from a different origin than the API, so every
    // endpoint answers cross-origin GET/POST and the OPTIONS preflight.
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    let app = app
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout)));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
