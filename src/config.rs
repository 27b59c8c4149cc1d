//! Configuration management for grok-chat
//!
//! Configuration is loaded from environment variables.

use anyhow::{Context, Result};
use std::env;

/// Default xAI chat completions endpoint
pub const DEFAULT_XAI_API_URL: &str = "https://api.x.ai/v1/chat/completions";

/// Default model used when a caller does not name one
pub const DEFAULT_MODEL: &str = "grok-beta";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the application is mounted on
    pub mount_target: String,

    /// xAI chat completions endpoint
    pub xai_api_url: String,
    /// Bearer token for the xAI API.
    ///
    /// Not validated: an empty token is sent as-is and the API answers 401.
    pub xai_api_key: String,

    /// Model the store plugin asks with
    pub default_model: String,
    /// Temperature the store plugin asks with
    pub default_temperature: f32,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            mount_target: env::var("GROK_CHAT_MOUNT")
                .unwrap_or_else(|_| "127.0.0.1:5173".to_string()),

            xai_api_url: env::var("XAI_API_URL")
                .unwrap_or_else(|_| DEFAULT_XAI_API_URL.to_string()),
            xai_api_key: env::var("XAI_API_KEY").unwrap_or_default(),

            default_model: env::var("GROK_CHAT_MODEL")
                .unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            default_temperature: env::var("GROK_CHAT_TEMPERATURE")
                .unwrap_or_else(|_| "0".to_string())
                .parse()
                .context("Invalid GROK_CHAT_TEMPERATURE")?,
        })
    }

    /// Whether a bearer token was supplied
    pub fn has_api_key(&self) -> bool {
        !self.xai_api_key.is_empty()
    }
}
