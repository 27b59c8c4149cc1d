//! Chat provider abstraction
//!
//! The store plugin talks to a `ChatProvider` rather than to `XaiClient`
//! directly, so another completions backend can be dropped in.

use async_trait::async_trait;
use serde_json::Value;

use crate::xai::models::ChatCompletionRequest;

/// A backend that answers chat completion requests
///
/// Implementations return the provider's response body untouched and
/// surface failures as the underlying `reqwest::Error`.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Provider name for logging and metrics
    fn name(&self) -> &'static str;

    /// Send one non-streaming chat completion request
    async fn chat_completion(&self, request: &ChatCompletionRequest)
        -> Result<Value, reqwest::Error>;
}
