use axum::{
    body::{Body, to_bytes},
    http::{Request, StatusCode},
};
use profile_server::app::App;
use serde_json::Value;
use tower::ServiceExt;

#[tokio::test]
async fn success() {
    let response = App::new()
        .router()
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(json, serde_json::json!({"status": "ok"}));
}
