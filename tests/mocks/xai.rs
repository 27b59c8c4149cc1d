//! Mock xAI API for testing
//!
//! Provides wiremock-based mocks for `POST /v1/chat/completions`.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::mocks::xai::{MockXaiApi, XaiTestData};
//!
//! #[tokio::test]
//! async fn test_with_xai_mock() {
//!     let mock = MockXaiApi::start().await;
//!     mock.mock_chat_completion_success(XaiTestData::chat_response("Hi")).await;
//!
//!     // Use mock.completions_url() as XAI_API_URL
//! }
//! ```

use serde_json::{json, Value};
use wiremock::{
    matchers::{body_partial_json, header, method, path},
    Mock, MockServer, Request, ResponseTemplate,
};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

/// Mock xAI API server wrapper
pub struct MockXaiApi {
    server: MockServer,
}

impl MockXaiApi {
    /// Start a new mock xAI server
    pub async fn start() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Full URL to use as `XAI_API_URL`
    pub fn completions_url(&self) -> String {
        format!("{}{}", self.server.uri(), COMPLETIONS_PATH)
    }

    /// Mock a 200 with `body`, only for requests carrying `api_key`
    pub async fn mock_chat_completion_for_key(&self, api_key: &str, body: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(header("Authorization", format!("Bearer {}", api_key).as_str()))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 with `body` for any request
    pub async fn mock_chat_completion_success(&self, body: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 only when the request body contains `expected`
    pub async fn mock_chat_completion_matching(&self, expected: Value, body: Value) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .and(body_partial_json(expected))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock an error status with the xAI error body shape
    pub async fn mock_chat_completion_error(&self, status: u16, message: &str) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(status).set_body_json(json!({
                "code": "Client specified an invalid argument",
                "error": message
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 whose body is not JSON
    pub async fn mock_chat_completion_garbage(&self) {
        Mock::given(method("POST"))
            .and(path(COMPLETIONS_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&self.server)
            .await;
    }

    /// Requests the server has received so far
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// JSON bodies of the requests received so far
    pub async fn received_bodies(&self) -> Vec<Value> {
        self.received_requests()
            .await
            .iter()
            .map(|r| serde_json::from_slice(&r.body).unwrap())
            .collect()
    }
}

/// Canned xAI response bodies
pub struct XaiTestData;

impl XaiTestData {
    /// A chat completion with one assistant choice
    pub fn chat_response(content: &str) -> Value {
        json!({
            "id": "0f9a7d3c-8b21-4c6e-9d1a-2f3b4c5d6e7f",
            "object": "chat.completion",
            "created": 1_730_000_000,
            "model": "grok-beta",
            "choices": [{
                "index": 0,
                "message": {"role": "assistant", "content": content, "refusal": null},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 12, "completion_tokens": 5, "total_tokens": 17},
            "system_fingerprint": "fp_test"
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_server_starts() {
        let mock = MockXaiApi::start().await;
        assert!(mock.completions_url().ends_with(COMPLETIONS_PATH));
    }

    #[tokio::test]
    async fn test_mock_records_bodies() {
        let mock = MockXaiApi::start().await;
        mock.mock_chat_completion_success(XaiTestData::chat_response("Hi")).await;

        reqwest::Client::new()
            .post(mock.completions_url())
            .json(&json!({"model": "grok-beta"}))
            .send()
            .await
            .unwrap();

        assert_eq!(mock.received_bodies().await, vec![json!({"model": "grok-beta"})]);
    }
}
