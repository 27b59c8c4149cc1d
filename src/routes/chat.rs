//! Conversation endpoints
//!
//! Installed by the store plugin:
//! - `GET /api/messages` - Current conversation
//! - `DELETE /api/messages` - Clear history
//! - `PUT /api/system` - Set or remove the system prompt
//! - `POST /api/chat` - Send a user turn, returns the xAI body as-is

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::{
    error::AppResult,
    store::{ChatStore, Conversation},
};

/// Body of `POST /api/chat` and `PUT /api/system`
#[derive(Debug, Clone, Deserialize)]
pub struct ContentRequest {
    pub content: String,
}

pub async fn get_messages(State(store): State<Arc<ChatStore>>) -> Json<Conversation> {
    Json(store.conversation().await)
}

pub async fn clear_messages(State(store): State<Arc<ChatStore>>) -> StatusCode {
    store.clear().await;
    StatusCode::NO_CONTENT
}

pub async fn set_system_prompt(
    State(store): State<Arc<ChatStore>>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> AppResult<StatusCode> {
    let Json(request) = payload?;
    store.set_system_prompt(request.content).await;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn chat(
    State(store): State<Arc<ChatStore>>,
    payload: Result<Json<ContentRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload?;
    info!(model = %store.model(), content_len = request.content.len(), "Chat turn");
    let body = store.ask(request.content).await?;
    Ok(Json(body))
}
