//! xAI chat completion data models
//!
//! Messages are passed to the API verbatim; nothing here validates content.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DEFAULT_MODEL;

/// Role of a message participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Instructions or context for the model
    System,
    /// Message from the human
    User,
    /// Reply from the model
    Assistant,
}

/// A chat message with role and content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

/// Build a `{role: "system", content}` message
pub fn create_system_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::System, content)
}

/// Build a `{role: "user", content}` message
pub fn create_user_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::User, content)
}

/// Build a `{role: "assistant", content}` message
pub fn create_assistant_message(content: impl Into<String>) -> ChatMessage {
    ChatMessage::new(Role::Assistant, content)
}

/// Request body for `POST /v1/chat/completions`
///
/// Field order matches what goes on the wire: messages, model, stream, temperature.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletionRequest {
    pub messages: Vec<ChatMessage>,
    pub model: String,
    /// Always false; streaming is not supported by this client
    pub stream: bool,
    pub temperature: f32,
}

impl ChatCompletionRequest {
    /// Request with the default model (`grok-beta`) and temperature 0
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            model: DEFAULT_MODEL.to_string(),
            stream: false,
            temperature: 0.0,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }
}

/// Pull the first choice's assistant text out of a provider body.
///
/// The body is provider-defined, so this only looks for
/// `choices[0].message.content` and gives up quietly otherwise.
pub fn first_choice_content(body: &Value) -> Option<&str> {
    body.get("choices")?
        .get(0)?
        .get("message")?
        .get("content")?
        .as_str()
}
