//! Plugin interface
//!
//! Plugins are installed once and asked for their routes every time the
//! application mounts, so a remount picks up the current component registry.

use std::sync::Arc;

use axum::Router;

use crate::{app::component::Components, error::AppResult};

/// What a plugin sees when the application mounts
#[derive(Debug, Clone)]
pub struct MountContext {
    pub app_name: String,
    /// Mount target as configured, before the listener resolves it
    pub target: String,
    pub components: Arc<Components>,
}

/// An application plugin
pub trait Plugin: Send + Sync {
    /// Unique name; a second plugin with the same name is not installed
    fn name(&self) -> &'static str;

    /// Called once, when the plugin is installed
    fn install(&self) -> AppResult<()> {
        Ok(())
    }

    /// Routes this plugin contributes to the mounted application
    fn routes(&self, ctx: &MountContext) -> Router;
}
