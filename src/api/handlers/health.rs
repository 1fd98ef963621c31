//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::application::services::CounterService;
use crate::domain::repositories::CounterRepository;
use crate::state::AppState;

/// Returns service health status with per-store checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All stores healthy
/// - **503 Service Unavailable**: One or more stores degraded
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "likes_store": {
///       "status": "ok",
///       "message": "Tracking 12 slugs"
///     },
///     "views_store": {
///       "status": "ok",
///       "message": "Tracking 31 slugs"
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let likes_check = check_store(&state.likes_service).await;
    let views_check = check_store(&state.views_service).await;

    let all_healthy = likes_check.status == "ok" && views_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            likes_store: likes_check,
            views_store: views_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Probes a counter store by asking how many slugs it tracks.
async fn check_store<R: CounterRepository>(service: &CounterService<R>) -> CheckStatus {
    match service.tracked_slugs().await {
        Ok(tracked) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Tracking {} slugs", tracked)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Store error: {}", e)),
        },
    }
}
