//! Counter route configuration.

use axum::{Router, routing::get};

use crate::api::handlers::{
    get_likes_handler, get_views_handler, increment_likes_handler, increment_views_handler,
};
use crate::state::AppState;

/// The counter endpoints.
///
/// # Endpoints
///
/// - `GET  /likes/{slug}` - Current like count for a slug
/// - `POST /likes/{slug}` - Add one like, return the new count
/// - `GET  /views?slug=…` - Current view count for a slug
/// - `POST /views`        - Add one view (JSON body), return the new count
pub fn counter_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/likes/{slug}",
            get(get_likes_handler).post(increment_likes_handler),
        )
        .route(
            "/views",
            get(get_views_handler).post(increment_views_handler),
        )
}
