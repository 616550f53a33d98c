//! HTTP-level tests for the keyword service: API key gate, request decoding and the
//! response contract.

#![cfg(feature = "server")]

use axum::body::Body;
use axum::http::{HeaderValue, Request, StatusCode};
use http_body_util::BodyExt;
use keyword_sniffer::server::{build_router, AppState};
use keyword_sniffer::{ScoredCandidate, StopWordSet, DEFAULT_KEYWORD_EXTRACTOR_CONFIG};
use std::sync::Arc;
use tower::ServiceExt;

const TEST_API_KEY: &str = "test-api-key";

fn build_test_app() -> axum::Router {
    let state = AppState::new(
        StopWordSet::english(),
        *DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
        TEST_API_KEY,
    );

    build_router(Arc::new(state))
}

fn keywords_request(api_key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/keywords")
        .header("content-type", "application/json");

    if let Some(api_key) = api_key {
        builder = builder.header("X-API-Key", api_key);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(
        |_| serde_json::json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }),
    )
}

#[tokio::test]
async fn test_health_no_auth() {
    let app = build_test_app();

    let resp = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!({ "status": "Up" }));
}

#[tokio::test]
async fn test_health_subpath_no_auth() {
    let app = build_test_app();

    let resp = app
        .oneshot(Request::get("/health/live").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_keywords_missing_key() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(None, r#"{"text": "natural numbers"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "missing key in request header" })
    );
}

#[tokio::test]
async fn test_keywords_empty_key_is_missing() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(Some(""), r#"{"text": "natural numbers"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_keywords_invalid_key() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(
            Some("wrong-key"),
            r#"{"text": "natural numbers"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!({ "message": "Unauthorized" })
    );
}

#[tokio::test]
async fn test_keywords_auth_runs_before_decoding() {
    let app = build_test_app();

    // A malformed body with a bad key is rejected as unauthorized, not as a bad request
    let resp = app
        .oneshot(keywords_request(Some("wrong-key"), "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_keywords_ranked_response() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(
            Some(TEST_API_KEY),
            r#"{"text": "Compatibility of systems of linear constraints over the set of natural numbers"}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);

    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let results: Vec<ScoredCandidate> = serde_json::from_slice(&bytes).unwrap();

    let candidates: Vec<&str> = results
        .iter()
        .map(|scored_candidate| scored_candidate.candidate.as_str())
        .collect();
    assert_eq!(
        candidates,
        vec![
            "linear constraints",
            "natural numbers",
            "compatibility",
            "systems",
            "set"
        ]
    );
    assert_eq!(results[0].score, 4.0);
    assert_eq!(results[4].score, 1.0);
}

#[tokio::test]
async fn test_keywords_empty_text_is_empty_array() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(Some(TEST_API_KEY), r#"{"text": ""}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_keywords_missing_text_field() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(Some(TEST_API_KEY), r#"{"body": "natural numbers"}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = body_json(resp).await;
    assert!(body["message"].as_str().unwrap().contains("text"), "{}", body);
}

#[tokio::test]
async fn test_keywords_text_wrong_type() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(Some(TEST_API_KEY), r#"{"text": 42}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_keywords_invalid_json() {
    let app = build_test_app();

    let resp = app
        .oneshot(keywords_request(Some(TEST_API_KEY), "{not json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(resp).await["message"].is_string());
}

#[tokio::test]
async fn test_keywords_missing_content_type() {
    let app = build_test_app();

    let req = Request::builder()
        .method("POST")
        .uri("/keywords")
        .header("X-API-Key", TEST_API_KEY)
        .body(Body::from(r#"{"text": "natural numbers"}"#))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_keywords_accepts_documents_over_two_megabytes() {
    let app = build_test_app();

    let text = "borrow checker. ".repeat(160_000);
    let body = serde_json::json!({ "text": text }).to_string();
    assert!(body.len() > 2 * 1024 * 1024);

    let resp = app
        .oneshot(keywords_request(Some(TEST_API_KEY), &body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        body_json(resp).await,
        serde_json::json!([{ "candidate": "borrow checker", "score": 4.0 }])
    );
}

#[tokio::test]
async fn test_keywords_non_ascii_api_key() {
    let api_key = "clé-secrète";
    let state = AppState::new(
        StopWordSet::english(),
        *DEFAULT_KEYWORD_EXTRACTOR_CONFIG,
        api_key,
    );
    let app = build_router(Arc::new(state));

    let request_with_key = |key: &str| {
        Request::builder()
            .method("POST")
            .uri("/keywords")
            .header("content-type", "application/json")
            .header("X-API-Key", HeaderValue::from_bytes(key.as_bytes()).unwrap())
            .body(Body::from(r#"{"text": "natural numbers"}"#))
            .unwrap()
    };

    let resp = app
        .clone()
        .oneshot(request_with_key(api_key))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app.oneshot(request_with_key("clé-fausse")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_unknown_route() {
    let app = build_test_app();

    let resp = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
