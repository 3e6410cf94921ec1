//! End-to-end tests for the /chat route with the document resolver,
//! driven through the router without binding a socket.

use std::io::Write;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

use api::core::app_state::AppState;
use api::core::resolver::ChatResolver;
use api::router;
use faq_match::engine::{NO_MATCH_REPLY, PROCESSING_ERROR_REPLY};
use faq_match::{DocumentSource, MatchEngine};

const ORIGIN: &str = "https://civilbrain.ai";

fn document_app(text: &str) -> (Router, tempfile::NamedTempFile) {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{text}").unwrap();

    let engine = MatchEngine::new(DocumentSource::new(file.path()));
    let state = Arc::new(AppState {
        resolver: ChatResolver::Document(engine),
    });
    (router(state, ORIGIN).unwrap(), file)
}

fn chat_request(message: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(format!(r#"{{"message":"{message}"}}"#)))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn chat_returns_matched_reply() {
    let (app, _doc) = document_app("Hours: We are open 9 to 5\nLocation: Downtown");

    let response = app.oneshot(chat_request("hours")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json, serde_json::json!({ "reply": "We are open 9 to 5" }));
}

#[tokio::test]
async fn chat_merges_multiline_answers() {
    let (app, _doc) = document_app("Contact: Call us at\n555-1234\nPricing: $10");

    let response = app.oneshot(chat_request("contact")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["reply"], "Call us at 555-1234");
}

#[tokio::test]
async fn chat_returns_default_reply_when_nothing_matches() {
    let (app, _doc) = document_app("Hours: We are open 9 to 5");

    let response = app.oneshot(chat_request("zzzz")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["reply"], NO_MATCH_REPLY);
}

#[tokio::test]
async fn chat_returns_error_reply_when_document_is_gone() {
    let engine = MatchEngine::new(DocumentSource::new("/no/such/faq.txt"));
    let state = Arc::new(AppState {
        resolver: ChatResolver::Document(engine),
    });
    let app = router(state, ORIGIN).unwrap();

    // A broken document source is still a 200: the engine folds the failure
    // into its error default reply instead of surfacing a server error.
    let response = app.oneshot(chat_request("hours")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["reply"], PROCESSING_ERROR_REPLY);
}

#[tokio::test]
async fn relay_failure_is_server_error_with_fixed_message() {
    // Port 9 (discard) has no listener; the relay call fails at connect
    // time and must surface as a 500 with the fixed error string.
    let cfg = llm_relay::RelayConfig {
        api_url: "http://127.0.0.1:9".into(),
        api_key: "hf_test_token".into(),
        timeout_secs: Some(1),
    };
    let service = llm_relay::InferenceService::new(cfg).unwrap();
    let state = Arc::new(AppState {
        resolver: ChatResolver::Relay(service),
    });
    let app = router(state, ORIGIN).unwrap();

    let response = app.oneshot(chat_request("hello")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(
        json,
        serde_json::json!({ "error": "Failed to communicate with Hugging Face API" })
    );
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let (app, _doc) = document_app("Hours: 9 to 5");

    let request = Request::builder()
        .method("POST")
        .uri("/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"msg": 1}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn cors_preflight_reflects_configured_origin() {
    let (app, _doc) = document_app("Hours: 9 to 5");

    let request = Request::builder()
        .method("OPTIONS")
        .uri("/chat")
        .header(header::ORIGIN, ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some(ORIGIN)
    );
}
