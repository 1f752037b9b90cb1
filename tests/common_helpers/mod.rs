//! Shared helpers for driving the HTTP router in integration tests.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use tower::ServiceExt;

/// Response captured from a single router call.
pub struct CapturedResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: String,
}

/// Sends one request to `router` and captures status, content type and body.
pub async fn send(router: &Router, method: Method, uri: &str) -> CapturedResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("request builds");
    let response = router
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body is readable");
    CapturedResponse {
        status,
        content_type,
        body: String::from_utf8(bytes.to_vec()).expect("body is UTF-8"),
    }
}

/// Sends `GET /` to `router`.
pub async fn get_listing(router: &Router) -> CapturedResponse {
    send(router, Method::GET, "/").await
}
