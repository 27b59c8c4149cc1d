//! Application shell endpoints
//!
//! Installed by the UI plugin.

use std::sync::Arc;

use axum::{extract::State, response::Html, Json};

use crate::app::MountContext;

/// Shell page the browser loads
pub async fn index(State(ctx): State<Arc<MountContext>>) -> Html<String> {
    let icons: String = ctx
        .components
        .keys()
        .map(|name| format!(r#"<img src="/icons/{0}" alt="{0}" width="16" height="16">"#, name))
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{name}</title></head>
<body>
<div id="app" data-mount="{target}">
<nav>{icons}</nav>
<main id="chat"></main>
</div>
</body>
</html>
"#,
        name = ctx.app_name,
        target = ctx.target,
        icons = icons,
    ))
}

/// Export names of every registered component, sorted
pub async fn list_components(State(ctx): State<Arc<MountContext>>) -> Json<Vec<String>> {
    Json(ctx.components.keys().cloned().collect())
}
