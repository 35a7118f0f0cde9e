// End-to-end tests for static file serving and the front-end bundle

mod common;

use common::{body_bytes, request, request_with_headers, seeded_state};
use hyper::StatusCode;

#[tokio::test]
async fn static_index_html_accessible() {
    let state = seeded_state();
    let response = request(&state, "GET", "/static/index.html").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));

    let content = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
    assert!(content.contains("<title>Mergington High School Activities</title>"));
    assert!(content.contains("Extracurricular Activities"));
    assert!(content.contains("Sign Up for an Activity"));
}

#[tokio::test]
async fn static_css_accessible() {
    let state = seeded_state();
    let response = request(&state, "GET", "/static/styles.css").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/css"));

    let content = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
    assert!(content.contains("body"));
    assert!(content.contains("activity-card"));
}

#[tokio::test]
async fn static_js_accessible() {
    let state = seeded_state();
    let response = request(&state, "GET", "/static/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get("Content-Type")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("javascript"));

    let content = String::from_utf8(body_bytes(response).await.to_vec()).unwrap();
    assert!(content.contains("DOMContentLoaded"));
    assert!(content.contains("fetchActivities"));
    assert!(content.contains("unregisterParticipant"));
}

#[tokio::test]
async fn nonexistent_static_file_returns_404() {
    let state = seeded_state();
    let response = request(&state, "GET", "/static/nonexistent.html").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn head_request_has_length_but_no_body() {
    let state = seeded_state();
    let response = request(&state, "HEAD", "/static/index.html").await;

    assert_eq!(response.status(), StatusCode::OK);
    let length: usize = response
        .headers()
        .get("Content-Length")
        .unwrap()
        .to_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(length > 0);
    assert!(body_bytes(response).await.is_empty());
}

#[tokio::test]
async fn etag_revalidation_returns_304() {
    let state = seeded_state();
    let first = request(&state, "GET", "/static/index.html").await;
    let etag = first
        .headers()
        .get("ETag")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let second = request_with_headers(
        &state,
        "GET",
        "/static/index.html",
        &[("If-None-Match", &etag)],
    )
    .await;
    assert_eq!(second.status(), StatusCode::NOT_MODIFIED);
    assert!(body_bytes(second).await.is_empty());
}

#[tokio::test]
async fn unknown_non_static_path_returns_404() {
    let state = seeded_state();
    let response = request(&state, "GET", "/somewhere-else").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unsupported_method_outside_api_is_405() {
    let state = seeded_state();
    let response = request(&state, "PUT", "/static/index.html").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert!(response.headers().get("Allow").is_some());
}
