//! Conversation store
//!
//! Holds the system prompt and message history the UI works with, and turns
//! a user turn into a chat completion request. Nothing is persisted.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, instrument, warn};

use crate::{
    error::AppResult,
    xai::{
        create_assistant_message, create_system_message, create_user_message,
        first_choice_content, ChatCompletionRequest, ChatMessage, ChatProvider,
    },
};

/// In-memory conversation state
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Conversation {
    pub system: Option<ChatMessage>,
    pub messages: Vec<ChatMessage>,
}

impl Conversation {
    /// Messages in the order they are sent: system prompt first
    pub fn to_messages(&self) -> Vec<ChatMessage> {
        self.system
            .iter()
            .chain(self.messages.iter())
            .cloned()
            .collect()
    }
}

/// Conversation store backed by a chat provider
pub struct ChatStore {
    provider: Arc<dyn ChatProvider>,
    model: String,
    temperature: f32,
    state: RwLock<Conversation>,
    /// Held for a whole turn so a reply lands right after its own question
    turn: Mutex<()>,
}

impl ChatStore {
    pub fn new(provider: Arc<dyn ChatProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
            state: RwLock::new(Conversation::default()),
            turn: Mutex::new(()),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Snapshot of the current conversation
    pub async fn conversation(&self) -> Conversation {
        self.state.read().await.clone()
    }

    /// History without the system prompt
    pub async fn history(&self) -> Vec<ChatMessage> {
        self.state.read().await.messages.clone()
    }

    /// Replace the system prompt; an empty prompt removes it
    pub async fn set_system_prompt(&self, content: impl Into<String>) {
        let content = content.into();
        let mut state = self.state.write().await;
        state.system = if content.is_empty() {
            None
        } else {
            Some(create_system_message(content))
        };
    }

    /// Drop the history, keeping the system prompt
    pub async fn clear(&self) {
        self.state.write().await.messages.clear();
    }

    /// Send a user turn with the whole conversation
    ///
    /// The assistant reply is appended when the body carries one. On failure
    /// the pending user message is taken back out and the error returned.
    /// Turns run one at a time: a second ask waits for the first reply, so it
    /// is sent with that reply already in the history. Reads of the
    /// conversation are not blocked while a request is in flight.
    #[instrument(skip(self, content), fields(provider = self.provider.name(), model = %self.model))]
    pub async fn ask(&self, content: impl Into<String>) -> AppResult<Value> {
        let user = create_user_message(content);
        let _turn = self.turn.lock().await;

        let messages = {
            let mut state = self.state.write().await;
            state.messages.push(user.clone());
            state.to_messages()
        };
        debug!(messages = messages.len(), "Sending conversation");

        let request = ChatCompletionRequest::new(messages)
            .with_model(self.model.as_str())
            .with_temperature(self.temperature);

        match self.provider.chat_completion(&request).await {
            Ok(body) => {
                match first_choice_content(&body) {
                    Some(reply) => {
                        let assistant = create_assistant_message(reply);
                        self.state.write().await.messages.push(assistant);
                    }
                    None => warn!("Response carried no assistant message"),
                }
                Ok(body)
            }
            Err(e) => {
                let mut state = self.state.write().await;
                if state.messages.last() == Some(&user) {
                    state.messages.pop();
                }
                Err(e.into())
            }
        }
    }
}
