//! UI component library plugin
//!
//! Serves the application shell and the registered component listing.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::{
    app::{MountContext, Plugin},
    routes::ui,
};

#[derive(Debug, Default)]
pub struct UiPlugin;

impl UiPlugin {
    pub fn new() -> Self {
        Self
    }
}

impl Plugin for UiPlugin {
    fn name(&self) -> &'static str {
        "ui"
    }

    fn routes(&self, ctx: &MountContext) -> Router {
        Router::new()
            .route("/", get(ui::index))
            .route("/api/components", get(ui::list_components))
            .with_state(Arc::new(ctx.clone()))
    }
}
