//! Shared JSON response construction.
//!
//! Every response this service produces, success or error, goes through
//! these helpers so the content type and caching behavior stay uniform.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Content type applied to every response.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Builds a JSON response with an explicit `charset=utf-8` content type.
pub fn json(status: StatusCode, body: &impl Serialize) -> Response {
    let mut response = (status, Json(body)).into_response();

    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );

    response
}

/// Builds a JSON response that intermediaries must not cache.
///
/// Counter values change over time and must never be served stale from a
/// shared cache, so every counter endpoint responds with
/// `Cache-Control: no-store`.
pub fn json_no_store(status: StatusCode, body: &impl Serialize) -> Response {
    let mut response = json(status, body);

    response
        .headers_mut()
        .insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_sets_charset_content_type() {
        let response = json(StatusCode::OK, &serde_json::json!({ "likes": 1 }));

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());
    }

    #[test]
    fn test_json_no_store_suppresses_caching() {
        let response = json_no_store(StatusCode::OK, &serde_json::json!({ "views": 2 }));

        assert_eq!(
            response.headers().get(header::CACHE_CONTROL).unwrap(),
            "no-store"
        );
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            JSON_CONTENT_TYPE
        );
    }
}
