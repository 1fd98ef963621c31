//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET/POST /likes/{slug}` - Like counter (public)
//! - `GET/POST /views`        - View counter (public)
//! - `GET /health`            - Health check (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging at INFO with
//!   millisecond latency

use axum::{Router, routing::get};
use tower_http::LatencyUnit;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::api;
use crate::api::handlers::health_handler;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// `state` is the shared application state injected into all handlers.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::counter_routes())
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
}
