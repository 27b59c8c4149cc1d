//! xAI API integration module
//!
//! Provides the chat completions client and the message types it sends.

pub mod client;
pub mod models;
pub mod provider;

pub use client::XaiClient;
pub use models::*;
pub use provider::ChatProvider;
