//! One-time application wiring

use std::sync::Arc;

use tracing::info;

use crate::{
    app::{icons, Application},
    config::Config,
    error::AppResult,
    plugins::{StorePlugin, UiPlugin},
    routes,
    store::ChatStore,
    xai::ChatProvider,
};

/// Modules whose reload remounts the application
pub const RELOADABLE_MODULES: [&str; 2] = ["app", "router"];

/// Build the application root: icons, store plugin, router, UI plugin
///
/// The result is ready to mount; mounting is left to the caller.
pub fn bootstrap(config: &Config, provider: Arc<dyn ChatProvider>) -> AppResult<Application> {
    let mut app = Application::new(env!("CARGO_PKG_NAME"));

    for (name, component) in icons::builtin() {
        app.component(name, component);
    }
    info!(components = app.components().len(), "Components registered");

    let store = ChatStore::new(
        provider,
        config.default_model.clone(),
        config.default_temperature,
    );
    app.use_plugin(StorePlugin::new(store))?;
    app.use_router(routes::create_router());
    app.use_plugin(UiPlugin::new())?;
    app.accept(RELOADABLE_MODULES);

    Ok(app)
}
