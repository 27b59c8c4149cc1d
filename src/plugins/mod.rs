//! Plugins installed at bootstrap

pub mod store;
pub mod ui;

pub use store::StorePlugin;
pub use ui::UiPlugin;
