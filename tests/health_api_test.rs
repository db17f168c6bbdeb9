use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    routing::get,
    Router,
};
use serde_json::Value as JsonValue;
use tower::ServiceExt;

fn init_test_env() {
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("DATABASE_URL", "postgres://localhost/jobboard_test");
    env::set_var("OPENAI_API_KEY", "sk-test");
    env::set_var("PUBLIC_RPS", "100");
    env::set_var("INTEGRATION_RPS", "100");
    let _ = jobboard_backend::config::init_config();
}

#[tokio::test]
async fn health_endpoint_reports_ok() {
    init_test_env();

    let app = Router::new().route("/health", get(jobboard_backend::routes::health::health));

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = to_bytes(resp.into_body(), 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn rate_limiter_rejects_burst_over_the_cap() {
    init_test_env();

    let app = Router::new()
        .route("/health", get(jobboard_backend::routes::health::health))
        .layer(axum::middleware::from_fn_with_state(
            jobboard_backend::middleware::rate_limit::new_rps_state(2),
            jobboard_backend::middleware::rate_limit::rps_middleware,
        ));

    for _ in 0..2 {
        let req = Request::builder()
            .method("GET")
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = app.clone().oneshot(req).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
}
