//! Store plugin endpoint tests
//!
//! - POST /api/chat - user turn forwarded with the conversation
//! - GET/DELETE /api/messages - history bookkeeping
//! - PUT /api/system - system prompt goes first
//! - Upstream failures surface as 502
//! - Malformed bodies get the JSON error envelope

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{test_app, test_server};
use crate::mocks::{MockXaiApi, XaiTestData};

#[tokio::test]
async fn test_chat_returns_provider_body() {
    let mock = MockXaiApi::start().await;
    let reply = XaiTestData::chat_response("Hello there");
    mock.mock_chat_completion_success(reply.clone()).await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let response = server.post("/api/chat").json(&json!({"content": "Hi"})).await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), reply);
}

#[tokio::test]
async fn test_history_accumulates_and_is_resent() {
    let mock = MockXaiApi::start().await;
    mock.mock_chat_completion_success(XaiTestData::chat_response("pong")).await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    server
        .put("/api/system")
        .json(&json!({"content": "Answer in one word"}))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server.post("/api/chat").json(&json!({"content": "ping"})).await.assert_status_ok();
    server.post("/api/chat").json(&json!({"content": "again"})).await.assert_status_ok();

    let conversation = server.get("/api/messages").await.json::<Value>();
    assert_eq!(
        conversation,
        json!({
            "system": {"role": "system", "content": "Answer in one word"},
            "messages": [
                {"role": "user", "content": "ping"},
                {"role": "assistant", "content": "pong"},
                {"role": "user", "content": "again"},
                {"role": "assistant", "content": "pong"}
            ]
        })
    );

    let bodies = mock.received_bodies().await;
    assert_eq!(bodies.len(), 2);
    assert_eq!(
        bodies[1]["messages"],
        json!([
            {"role": "system", "content": "Answer in one word"},
            {"role": "user", "content": "ping"},
            {"role": "assistant", "content": "pong"},
            {"role": "user", "content": "again"}
        ])
    );
    assert_eq!(bodies[1]["model"], "grok-beta");
}

#[tokio::test]
async fn test_clear_messages() {
    let mock = MockXaiApi::start().await;
    mock.mock_chat_completion_success(XaiTestData::chat_response("ok")).await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    server.post("/api/chat").json(&json!({"content": "Hi"})).await.assert_status_ok();
    server.delete("/api/messages").await.assert_status(StatusCode::NO_CONTENT);

    let conversation = server.get("/api/messages").await.json::<Value>();
    assert_eq!(conversation, json!({"system": null, "messages": []}));
}

#[tokio::test]
async fn test_upstream_error_maps_to_bad_gateway() {
    let mock = MockXaiApi::start().await;
    mock.mock_chat_completion_error(401, "Incorrect API key provided").await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let response = server.post("/api/chat").json(&json!({"content": "Hi"})).await;

    response.assert_status(StatusCode::BAD_GATEWAY);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "UPSTREAM_ERROR");
    assert_eq!(body["error"]["upstream_status"], 401);

    // The failed turn is not kept
    let conversation = server.get("/api/messages").await.json::<Value>();
    assert_eq!(conversation["messages"], json!([]));
}

#[tokio::test]
async fn test_malformed_chat_body_is_rejected() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let response = server.post("/api/chat").json(&json!({"text": "Hi"})).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "INVALID_JSON");
    assert!(body["error"]["message"].as_str().unwrap().contains("content"));
    assert!(mock.received_requests().await.is_empty());
}

#[tokio::test]
async fn test_system_prompt_without_json_body_is_rejected() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let response = server.put("/api/system").text("Be brief").await;

    response.assert_status(StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(response.json::<Value>()["error"]["code"], "INVALID_JSON");

    let conversation = server.get("/api/messages").await.json::<Value>();
    assert_eq!(conversation["system"], Value::Null);
}
