//! Handlers for the views counter endpoints.

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use serde_json::Value;

use crate::api::dto::views::{ViewsQuery, ViewsResponse};
use crate::api::response::json_no_store;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the current view count for a slug.
///
/// # Endpoint
///
/// `GET /views?slug=<slug>`
///
/// The query value is used exactly as supplied, with no trimming. A slug that
/// has never been viewed reads as 0.
///
/// # Errors
///
/// Returns 400 with `{ "error": "Missing required \"slug\" query parameter" }`
/// when the parameter is absent or empty.
pub async fn get_views_handler(
    State(state): State<AppState>,
    Query(query): Query<ViewsQuery>,
) -> Result<Response, AppError> {
    let slug = match query.slug {
        Some(slug) if !slug.is_empty() => slug,
        _ => return Err(AppError::MissingSlugParam),
    };

    let views = state.views_service.current(&slug).await?;

    Ok(json_no_store(StatusCode::OK, &ViewsResponse { slug, views }))
}

/// Adds one view to a slug.
///
/// # Endpoint
///
/// `POST /views` with JSON body `{ "slug": "<slug>" }`
///
/// The raw body is parsed as JSON regardless of `Content-Type`. The slug is
/// trimmed of surrounding whitespace and the count is stored under the
/// trimmed key, so requests differing only in whitespace hit the same
/// counter entry.
///
/// # Errors
///
/// - 400 `{ "error": "Invalid JSON in request body" }` when the body does not parse
/// - 400 `{ "error": "Request body must include a non-empty \"slug\" field" }`
///   when `slug` is missing, not a string, or empty after trimming
pub async fn increment_views_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| AppError::InvalidJsonBody)?;

    let slug = payload
        .get("slug")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|slug| !slug.is_empty())
        .ok_or(AppError::MissingSlugField)?;

    let views = state.views_service.increment(slug).await?;

    Ok(json_no_store(
        StatusCode::OK,
        &ViewsResponse {
            slug: slug.to_owned(),
            views,
        },
    ))
}
