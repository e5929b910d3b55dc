//! # Job-fair Agenda API
//!
//! The web server for the recruiters' interview agenda: slot generation,
//! slot management, and the weekly calendar view.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Turn requests into calls on the core and the slot store
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Environment configuration
//!
//! Scheduling logic lives in `jobfair-core`; persistence goes through the
//! `TimeSlotStore` trait of `jobfair-db`.

/// Configuration module for API settings
pub mod config;
/// Request handlers
pub mod handlers;
/// Error handling shared by handlers
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{Router, http::HeaderValue};
use eyre::Result;
use jobfair_core::grid::TimeGrid;
use jobfair_db::store::TimeSlotStore;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared application state that is accessible to all request handlers
pub struct ApiState {
    /// Where interview slots are persisted
    pub store: Arc<dyn TimeSlotStore>,
    /// Name of the store implementation, reported by `/health`
    pub store_backend: &'static str,
    /// Layout used to render week views
    pub grid: TimeGrid,
}

/// Builds the router with every endpoint, without transport layers.
pub fn app(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Slot generation, management and week view endpoints
        .merge(routes::slots::routes())
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::PATCH,
            axum::http::Method::DELETE,
            axum::http::Method::OPTIONS,
        ])
        .allow_headers([
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
        ])
        .allow_origin(allowed)
        .allow_credentials(true)
}

/// Starts the API server on the configured address
///
/// Expects the tracing subscriber to be installed by the caller.
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    let app = app(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = match &config.cors_origins {
        Some(origins) => app.layer(cors_layer(origins)),
        None => app,
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
