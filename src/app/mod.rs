//! Application root
//!
//! One `Application` owns the component registry, the installed plugins, the
//! attached router and at most one live mount. Mounting binds the mount target
//! and serves the composed router on it; unmounting stops that server.

pub mod bootstrap;
pub mod component;
pub mod icons;
pub mod plugin;

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::Router;
use tokio::{net::TcpListener, sync::oneshot, task::JoinHandle};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{debug, error, info, instrument, warn};

use crate::{
    error::{AppError, AppResult},
    routes::{icons::icon_routes, metrics},
};

pub use bootstrap::bootstrap;
pub use component::{Component, Components};
pub use plugin::{MountContext, Plugin};

/// Modules reported as changed by a hot-reload source
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReloadEvent {
    pub modules: Vec<String>,
}

impl ReloadEvent {
    pub fn new<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            modules: modules.into_iter().map(Into::into).collect(),
        }
    }
}

/// A live mount: the serving task and the way to stop it
struct Mount {
    addr: SocketAddr,
    shutdown: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

/// Counts one serving task for as long as it is held
///
/// Dropped when the task ends, including when it is aborted.
struct LiveInstance(Arc<AtomicUsize>);

impl LiveInstance {
    fn acquire(counter: Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }

    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl Drop for LiveInstance {
    fn drop(&mut self) {
        let remaining = self.0.fetch_sub(1, Ordering::SeqCst) - 1;
        metrics::set_live_instances(remaining);
    }
}

/// The application root
pub struct Application {
    name: String,
    components: Components,
    plugins: Vec<Box<dyn Plugin>>,
    router: Option<Router>,
    accepted: Vec<String>,
    target: Option<String>,
    mount: Option<Mount>,
    live: Arc<AtomicUsize>,
}

impl Application {
    /// Create a new, unmounted application root
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            components: Components::new(),
            plugins: Vec::new(),
            router: None,
            accepted: Vec::new(),
            target: None,
            mount: None,
            live: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register a component under its export name
    pub fn component(&mut self, name: impl Into<String>, component: Component) -> &mut Self {
        let name = name.into();
        if self.components.insert(name.clone(), component).is_some() {
            warn!(component = %name, "Component already registered, replacing it");
        }
        self
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    /// Install a plugin
    ///
    /// A plugin whose name is already installed is skipped.
    pub fn use_plugin(&mut self, plugin: impl Plugin + 'static) -> AppResult<&mut Self> {
        let name = plugin.name();
        if self.plugins.iter().any(|p| p.name() == name) {
            warn!(plugin = name, "Plugin has already been installed, skipping");
            return Ok(self);
        }

        plugin.install()?;
        info!(plugin = name, "Plugin installed");
        self.plugins.push(Box::new(plugin));
        Ok(self)
    }

    /// Names of installed plugins, in install order
    pub fn plugins(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Attach the router
    pub fn use_router(&mut self, router: Router) -> &mut Self {
        if self.router.replace(router).is_some() {
            warn!("Router already attached, replacing it");
        }
        self
    }

    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    /// Declare the modules whose reload triggers a remount
    pub fn accept<I, S>(&mut self, modules: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.accepted.extend(modules.into_iter().map(Into::into));
        self
    }

    pub fn accepted(&self) -> &[String] {
        &self.accepted
    }

    /// Compose the attached router, component routes and plugin routes
    pub fn build_router(&self, target: &str) -> Router {
        let ctx = MountContext {
            app_name: self.name.clone(),
            target: target.to_string(),
            components: Arc::new(self.components.clone()),
        };

        let mut router = self.router.clone().unwrap_or_default();
        router = router.merge(icon_routes(ctx.components.clone()));
        for plugin in &self.plugins {
            router = router.merge(plugin.routes(&ctx));
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        router
            .layer(CompressionLayer::new())
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Mount the application on `target`
    ///
    /// Mounting an already mounted application keeps the existing instance.
    #[instrument(skip(self), fields(app = %self.name))]
    pub async fn mount(&mut self, target: &str) -> AppResult<SocketAddr> {
        if let Some(mount) = self.live_mount() {
            warn!(addr = %mount.addr, "Application already mounted");
            return Ok(mount.addr);
        }
        if let Some(dead) = self.mount.take() {
            warn!(addr = %dead.addr, "Previous server has stopped, mounting again");
        }

        let router = self.build_router(target);

        let mount_error = |source| AppError::Mount {
            target: target.to_string(),
            source,
        };
        let listener = TcpListener::bind(target).await.map_err(mount_error)?;
        let addr = listener.local_addr().map_err(mount_error)?;

        let (shutdown, shutdown_rx) = oneshot::channel::<()>();
        let live = LiveInstance::acquire(self.live.clone());
        let count = live.count();

        let task = tokio::spawn(async move {
            let _live = live;
            let result = axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await;
            if let Err(e) = result {
                error!(error = %e, addr = %addr, "Application server failed");
            }
        });

        metrics::record_mount(count);
        info!(addr = %addr, "Application mounted");

        self.target = Some(target.to_string());
        self.mount = Some(Mount {
            addr,
            shutdown,
            task,
        });
        Ok(addr)
    }

    /// Stop serving and wait for the server to finish
    ///
    /// Returns `false` when nothing was mounted.
    #[instrument(skip(self), fields(app = %self.name))]
    pub async fn unmount(&mut self) -> bool {
        let Some(mount) = self.mount.take() else {
            warn!("Cannot unmount an application that is not mounted");
            return false;
        };

        let _ = mount.shutdown.send(());
        if let Err(e) = mount.task.await {
            error!(error = %e, "Application server task ended abnormally");
        }

        info!(addr = %mount.addr, "Application unmounted");
        true
    }

    /// Unmount and mount again on the same target
    pub async fn remount(&mut self) -> AppResult<SocketAddr> {
        let target = self.target.clone().ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!("Cannot remount an application that was never mounted"))
        })?;

        self.unmount().await;
        self.mount(&target).await
    }

    /// React to a hot-reload event
    ///
    /// Remounts when the event names an accepted module and the application
    /// is mounted. Returns whether a remount happened.
    pub async fn handle_reload(&mut self, event: &ReloadEvent) -> AppResult<bool> {
        info!(modules = ?event.modules, "hot update...");

        let accepted = event.modules.iter().any(|m| self.accepted.contains(m));
        if !accepted {
            debug!("No accepted module changed, keeping current mount");
            return Ok(false);
        }
        if !self.is_mounted() {
            debug!("Application not mounted, nothing to remount");
            return Ok(false);
        }

        self.remount().await?;
        Ok(true)
    }

    /// Whether a server is mounted and still running
    pub fn is_mounted(&self) -> bool {
        self.live_mount().is_some()
    }

    /// Address of the live mount, if any
    pub fn mounted_addr(&self) -> Option<SocketAddr> {
        self.live_mount().map(|m| m.addr)
    }

    fn live_mount(&self) -> Option<&Mount> {
        self.mount.as_ref().filter(|m| !m.task.is_finished())
    }

    /// Number of serving tasks still running for this application
    pub fn live_instances(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }
}

impl Drop for Application {
    fn drop(&mut self) {
        if let Some(mount) = self.mount.take() {
            let _ = mount.shutdown.send(());
        }
    }
}
