//! State store plugin
//!
//! Makes the conversation store available over HTTP.

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{
    app::{MountContext, Plugin},
    error::{AppError, AppResult},
    routes::chat,
    store::ChatStore,
};

pub struct StorePlugin {
    store: Arc<ChatStore>,
}

impl StorePlugin {
    pub fn new(store: ChatStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

impl Plugin for StorePlugin {
    fn name(&self) -> &'static str {
        "store"
    }

    fn install(&self) -> AppResult<()> {
        if self.store.model().is_empty() {
            return Err(AppError::Plugin {
                plugin: self.name(),
                message: "model name is empty".to_string(),
            });
        }
        Ok(())
    }

    fn routes(&self, _ctx: &MountContext) -> Router {
        Router::new()
            .route(
                "/api/messages",
                get(chat::get_messages).delete(chat::clear_messages),
            )
            .route("/api/system", put(chat::set_system_prompt))
            .route("/api/chat", post(chat::chat))
            .with_state(self.store.clone())
    }
}
