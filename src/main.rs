//! grok-chat - chat application with an xAI chat completions backend
//!
//! Bootstraps the application, mounts it, remounts on SIGHUP and shuts down
//! on Ctrl+C or SIGTERM.

use std::sync::Arc;

use anyhow::Result;
use tokio::{signal, sync::mpsc};
use tracing::{info, warn};

use grok_chat::{bootstrap, routes, ChatProvider, Config, ReloadEvent, XaiClient};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grok_chat=info,tower_http=info".into()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting grok-chat");

    let config = Config::from_env()?;
    if !config.has_api_key() {
        warn!("XAI_API_KEY is not set, the xAI API will reject chat requests");
    }
    info!(xai_api_url = %config.xai_api_url, model = %config.default_model, "Configuration loaded");

    routes::metrics::init_metrics();

    let provider: Arc<dyn ChatProvider> = Arc::new(XaiClient::new(&config)?);
    let mut app = bootstrap(&config, provider)?;

    let addr = app.mount(&config.mount_target).await?;
    info!("Listening on {}", addr);

    let mut reloads = reload_events(app.accepted().to_vec());
    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            Some(event) = reloads.recv() => {
                app.handle_reload(&event).await?;
            }
        }
    }

    app.unmount().await;
    info!("grok-chat shutdown complete");
    Ok(())
}

/// Turn SIGHUP into reload events for `modules`
fn reload_events(modules: Vec<String>) -> mpsc::Receiver<ReloadEvent> {
    let (tx, rx) = mpsc::channel(8);

    #[cfg(unix)]
    tokio::spawn(async move {
        let mut hangup = match signal::unix::signal(signal::unix::SignalKind::hangup()) {
            Ok(s) => s,
            Err(e) => {
                warn!(error = %e, "Failed to install SIGHUP handler, hot reload disabled");
                return;
            }
        };
        while hangup.recv().await.is_some() {
            if tx.send(ReloadEvent::new(modules.clone())).await.is_err() {
                break;
            }
        }
    });

    #[cfg(not(unix))]
    drop((tx, modules));

    rx
}

/// Handle graceful shutdown signals
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            warn!("Received Ctrl+C, initiating shutdown");
        }
        _ = terminate => {
            warn!("Received SIGTERM, initiating shutdown");
        }
    }
}
