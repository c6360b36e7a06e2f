use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use profile_server::{app::App, config::ServerConfig, request_id::HEADER_REQUEST_ID};
use tower::ServiceExt;

fn post_profile() -> axum::http::request::Builder {
    Request::builder()
        .method("POST")
        .uri("/api/profile")
        .header("content-type", "application/json")
}

#[tokio::test]
async fn generates_request_id() {
    let app = App::new().service(&ServerConfig::default()).unwrap();

    let response = app
        .oneshot(post_profile().body(Body::from(r#"{"fields": []}"#)).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let req_id = response
        .headers()
        .get(HEADER_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(!req_id.is_empty());
}

#[tokio::test]
async fn propagates_caller_request_id() {
    let app = App::new().service(&ServerConfig::default()).unwrap();

    let response = app
        .oneshot(
            post_profile()
                .header(HEADER_REQUEST_ID, "caller-id-7")
                .body(Body::from(r#"{"fields": ["Text Field"]}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[HEADER_REQUEST_ID], "caller-id-7");
}

#[tokio::test]
async fn rejected_requests_carry_request_id() {
    let app = App::new().service(&ServerConfig::default()).unwrap();

    let response = app
        .oneshot(
            post_profile()
                .header(HEADER_REQUEST_ID, "bad-body-1")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.headers()[HEADER_REQUEST_ID], "bad-body-1");
}
