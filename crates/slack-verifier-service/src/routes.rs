//! Router configuration.
//!
//! This module sets up the Axum router with all routes and middleware.

use std::time::Duration;

use axum::routing::{get, post};
use axum::Router;
use tower::limit::ConcurrencyLimitLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::gate;
use crate::handlers::{events, health};
use crate::state::AppState;

/// Maximum concurrent requests on the webhook route.
const WEBHOOK_MAX_CONCURRENT_REQUESTS: usize = 100;

/// Create the service router with all routes and middleware.
///
/// # Routes
///
/// - `GET /health` - Health check (public)
/// - `POST {webhook_path}` - Slack requests (signature verified)
pub fn create_router(state: AppState) -> Router {
    let max_body_bytes = state.config.max_body_bytes;
    let request_timeout_seconds = state.config.request_timeout_seconds;

    let webhook_routes = Router::new()
        .route(&state.config.webhook_path, post(events::receive_event))
        .layer(ConcurrencyLimitLayer::new(WEBHOOK_MAX_CONCURRENT_REQUESTS));
    let webhook_routes = gate::protect(webhook_routes, state.gate);

    Router::new()
        .route("/health", get(health::health))
        .merge(webhook_routes)
        // Global middleware
        .layer(TraceLayer::new_for_http())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            request_timeout_seconds,
        )))
}
