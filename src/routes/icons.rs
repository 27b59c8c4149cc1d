//! Component asset endpoint
//!
//! Serves the markup of every component registered on the application.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

use crate::{
    app::component::Components,
    error::{AppError, AppResult},
};

/// Routes serving registered components under `/icons/:name`
pub fn icon_routes(components: Arc<Components>) -> Router {
    Router::new()
        .route("/icons/:name", get(get_icon))
        .with_state(components)
}

async fn get_icon(
    State(components): State<Arc<Components>>,
    Path(name): Path<String>,
) -> AppResult<Response> {
    let component = components
        .get(&name)
        .ok_or_else(|| AppError::NotFound(format!("Component not registered: {}", name)))?;

    Ok((
        [(header::CONTENT_TYPE, component.content_type())],
        component.body().to_string(),
    )
        .into_response())
}
