//! grok-chat - chat application with an xAI chat completions backend
//!
//! The application root, its plugins and router live in [`app`]; the xAI
//! client lives in [`xai`].

pub mod app;
pub mod config;
pub mod error;
pub mod plugins;
pub mod routes;
pub mod store;
pub mod xai;

pub use crate::app::{bootstrap, Application, ReloadEvent};
pub use crate::config::Config;
pub use crate::error::{AppError, AppResult};
pub use crate::store::ChatStore;
pub use crate::xai::{ChatProvider, XaiClient};
