//! Handlers for the likes counter endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};

use crate::api::dto::likes::LikesResponse;
use crate::api::response::json_no_store;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current like count for a slug.
///
/// # Endpoint
///
/// `GET /likes/{slug}`
///
/// The slug is a routed path parameter, URL-decoded by the framework and
/// used exactly as supplied, with no trimming or normalization. A slug that has
/// never been liked reads as 0.
///
/// # Response
///
/// `200 OK` with `{ "likes": n }` and `Cache-Control: no-store`; the value
/// is per-slug mutable state and must never be served from a shared cache.
pub async fn get_likes_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let likes = state.likes_service.current(&slug).await?;

    Ok(json_no_store(StatusCode::OK, &LikesResponse { likes }))
}

/// Adds one like to a slug.
///
/// # Endpoint
///
/// `POST /likes/{slug}`
///
/// No request body. The increment is atomic with respect to the likes store:
/// concurrent posts for the same slug are all counted.
///
/// # Response
///
/// `200 OK` with `{ "likes": n }` where `n` is the post-increment count.
/// Caching is suppressed here as well, for the same reason as on reads.
pub async fn increment_likes_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let likes = state.likes_service.increment(&slug).await?;

    Ok(json_no_store(StatusCode::OK, &LikesResponse { likes }))
}
