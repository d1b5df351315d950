use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

use prbot_core::config::Config;
use prbot_core::dispatch::GOOD_COMMENT;
use prbot_server::state::AppState;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Router wired to the given API base (a mockito server in most tests).
fn app(api_base: &str) -> axum::Router {
    let config = Config::new("octo", "sekret", "octo", "widgets").with_api_base(api_base);
    prbot_server::build_router(AppState::new(config).unwrap())
}

/// Router for tests that must not reach the network.
fn offline_app() -> axum::Router {
    app("http://127.0.0.1:1")
}

/// Send a GET request via `oneshot` and return (status, content-type, body).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, String, String) {
    let req = axum::http::Request::builder()
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, content_type, String::from_utf8_lossy(&body).into_owned())
}

/// POST raw bytes to the webhook endpoint and return (status, body).
async fn post_raw(app: axum::Router, body: &[u8]) -> (StatusCode, String) {
    let req = axum::http::Request::builder()
        .method("POST")
        .uri("/github/payload")
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.to_vec()))
        .unwrap();
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// POST a JSON payload to the webhook endpoint.
async fn post_payload(app: axum::Router, body: serde_json::Value) -> (StatusCode, String) {
    post_raw(app, &serde_json::to_vec(&body).unwrap()).await
}

// ---------------------------------------------------------------------------
// Landing page
// ---------------------------------------------------------------------------

#[tokio::test]
async fn landing_page_serves_html() {
    let (status, content_type, body) = get(offline_app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.contains("text/html"));
    assert!(body.contains("prbot"));
}

// ---------------------------------------------------------------------------
// Payload handling
// ---------------------------------------------------------------------------

#[tokio::test]
async fn zen_ping_returns_200_without_remote_calls() {
    let (status, body) = post_payload(
        offline_app(),
        serde_json::json!({ "zen": "Responsive is better than fast." }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "beep boop");
}

#[tokio::test]
async fn malformed_json_is_a_400() {
    let (status, _) = post_raw(offline_app(), b"this is not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_body_is_a_400() {
    let (status, _) = post_raw(offline_app(), b"").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_object_is_a_400() {
    let (status, _) = post_payload(offline_app(), serde_json::json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn payload_without_action_is_a_500() {
    let (status, _) = post_payload(offline_app(), serde_json::json!({ "number": 7 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn unhandled_action_is_acknowledged() {
    let (status, body) = post_payload(
        offline_app(),
        serde_json::json!({ "action": "closed", "number": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "beep boop");
}

// ---------------------------------------------------------------------------
// End-to-end flows against a mocked GitHub API
// ---------------------------------------------------------------------------

#[tokio::test]
async fn opened_pull_request_gets_story_link_patched_in() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/widgets/pulls/7")
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"number": 7, "title": "Add X", "body": "Fixes stuff",
                "head": {"ref": "42-add-x"}}"#,
        )
        .create_async()
        .await;
    let patch = server
        .mock("PATCH", "/repos/octo/widgets/pulls/7")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "title": "Add X",
            "body": "story: https://pivotaltracker.com/story/show/42\r\n\nFixes stuff",
            "state": "open",
        })))
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"number": 7, "title": "Add X", "body": "patched",
                "head": {"ref": "42-add-x"}}"#,
        )
        .create_async()
        .await;

    let (status, body) = post_payload(
        app(&server.url()),
        serde_json::json!({ "action": "opened", "number": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "beep boop");
    patch.assert_async().await;
}

#[tokio::test]
async fn edited_pull_request_with_clean_description_gets_good_comment() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/widgets/pulls/7")
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"number": 7, "title": "Add X",
                "body": "story: https://pivotaltracker.com/story/show/42\nAll done",
                "head": {"ref": "42-add-x"}}"#,
        )
        .create_async()
        .await;
    server
        .mock("GET", "/repos/octo/widgets/issues/7")
        .with_header("content-type", "application/json")
        .with_body(r#"{"number": 7, "labels": []}"#)
        .create_async()
        .await;
    let comment = server
        .mock("POST", "/repos/octo/widgets/issues/7/comments")
        .match_body(mockito::Matcher::Json(
            serde_json::json!({ "body": GOOD_COMMENT }),
        ))
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 1, "body": "ok"}"#)
        .create_async()
        .await;

    let (status, _) = post_payload(
        app(&server.url()),
        serde_json::json!({ "action": "edited", "number": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    comment.assert_async().await;
}

#[tokio::test]
async fn github_failure_surfaces_as_502() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/repos/octo/widgets/pulls/7")
        .with_status(500)
        .create_async()
        .await;

    let (status, body) = post_payload(
        app(&server.url()),
        serde_json::json!({ "action": "opened", "number": 7 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    let json: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert!(json["error"].is_string());
}
