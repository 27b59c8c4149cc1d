//! Application bootstrap tests
//!
//! - Components, plugins and router wired once
//! - Router, icon and UI endpoints on the composed router
//! - Mount, hot reload and unmount over a real socket

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use grok_chat::ReloadEvent;

use crate::common::{constants, test_app, test_server};
use crate::mocks::MockXaiApi;

#[tokio::test]
async fn test_bootstrap_wiring() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());

    assert_eq!(app.name(), "grok-chat");
    assert_eq!(app.plugins(), vec!["store", "ui"]);
    assert!(app.has_router());
    assert!(app.components().contains_key("ChatDotRound"));
    assert!(app.components().contains_key("Promotion"));
    assert_eq!(app.accepted(), ["app".to_string(), "router".to_string()]);
    assert!(!app.is_mounted());
}

#[tokio::test]
async fn test_health_endpoints() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let health = server.get("/health").await.json::<Value>();
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["version"], env!("CARGO_PKG_VERSION"));

    server.get("/health/live").await.assert_status_ok();
}

#[tokio::test]
async fn test_icon_endpoint() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let response = server.get("/icons/ChatDotRound").await;
    response.assert_status_ok();
    assert_eq!(response.header("content-type"), "image/svg+xml");
    assert!(response.text().starts_with("<svg"));

    server
        .get("/icons/NoSuchIcon")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ui_endpoints() {
    let mock = MockXaiApi::start().await;
    let app = test_app(&mock.completions_url());
    let server = test_server(&app);

    let names = server.get("/api/components").await.json::<Vec<String>>();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert_eq!(names.len(), app.components().len());

    let page = server.get("/").await.text();
    assert!(page.contains(r#"id="app""#));
    assert!(page.contains(&format!(r#"data-mount="{}""#, constants::TEST_MOUNT_TARGET)));
    assert!(page.contains("/icons/Search"));
}

#[tokio::test]
async fn test_mount_reload_unmount() {
    let mock = MockXaiApi::start().await;
    let mut app = test_app(&mock.completions_url());

    let first = app.mount(constants::TEST_MOUNT_TARGET).await.unwrap();
    let live = reqwest::get(format!("http://{}/health/live", first)).await.unwrap();
    assert_eq!(live.status(), 200);

    // Unrelated module: stays mounted where it was
    assert!(!app.handle_reload(&ReloadEvent::new(["styles"])).await.unwrap());
    assert_eq!(app.mounted_addr(), Some(first));

    assert!(app.handle_reload(&ReloadEvent::new(["app"])).await.unwrap());
    let second = app.mounted_addr().unwrap();
    assert_eq!(app.live_instances(), 1);

    let live = reqwest::get(format!("http://{}/health/live", second)).await.unwrap();
    assert_eq!(live.status(), 200);
    if second != first {
        assert!(reqwest::get(format!("http://{}/health/live", first)).await.is_err());
    }

    assert!(app.unmount().await);
    assert_eq!(app.live_instances(), 0);
    assert!(reqwest::get(format!("http://{}/health/live", second)).await.is_err());
}
