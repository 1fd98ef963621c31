mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use engagement_service::api::handlers::health_handler;

fn health_app() -> TestServer {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_health_endpoint_success() {
    let server = health_app();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["likes_store"]["status"], "ok");
    assert_eq!(json["checks"]["views_store"]["status"], "ok");
}

#[tokio::test]
async fn test_health_endpoint_structure() {
    let server = health_app();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();

    assert!(json.get("status").is_some());
    assert!(json.get("version").is_some());
    assert!(json.get("checks").is_some());
    assert!(json["checks"].get("likes_store").is_some());
    assert!(json["checks"].get("views_store").is_some());
}

#[tokio::test]
async fn test_health_reports_tracked_slugs() {
    let state = common::create_test_state();
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state.clone());
    let server = TestServer::new(app).unwrap();

    state.likes_service.increment("a-post").await.unwrap();
    state.views_service.increment("a-post").await.unwrap();
    state.views_service.increment("b-post").await.unwrap();

    let response = server.get("/health").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["checks"]["likes_store"]["message"],
        "Tracking 1 slugs"
    );
    assert_eq!(
        json["checks"]["views_store"]["message"],
        "Tracking 2 slugs"
    );
}
