//! Static file server with live reload.
//!
//! One listener serves the project root, the live-reload script and the
//! live-reload socket. A watcher on the root broadcasts a page reload to
//! every connected tab whenever a file is written.

mod address;
mod config;
mod error;
mod listing;
mod livereload;
mod watcher;

pub use address::ListenAddress;
pub use config::{ServeConfig, DEFAULT_ADDRESS};
pub use error::ServerStartError;
pub use listing::directory_index;
pub use livereload::{
    LiveReloadMessage, ReloadEvent, ReloadHub, ENDPOINT_PATH, LIVERELOAD_SCRIPT, PROTOCOL,
    SCRIPT_PATH, SERVER_NAME,
};
pub use watcher::{is_write, ReloadBridge};

use axum::handler::Handler;
use axum::routing::get;
use axum::Router;
use std::fmt;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;
use tokio::sync::watch;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use url::Url;

/// Lifecycle of a [`Server`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Listener bound and watcher registered; not yet accepting.
    Starting,
    /// Accepting connections.
    Listening,
    /// A termination signal or listener error was received.
    Terminating,
    /// Listener, watcher and hub released.
    Stopped,
}

impl fmt::Display for ServerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Starting => "starting",
            Self::Listening => "listening",
            Self::Terminating => "terminating",
            Self::Stopped => "stopped",
        })
    }
}

/// Builds the router serving `root` with the live-reload routes.
///
/// Directories without an `index.html` get a generated listing.
pub fn router(root: &Path, hub: ReloadHub) -> Router {
    let listing = directory_index.with_state(root.to_path_buf());
    Router::new()
        .route(SCRIPT_PATH, get(livereload::script))
        .route(ENDPOINT_PATH, get(livereload::endpoint))
        .fallback_service(ServeDir::new(root).fallback(listing))
        .layer(TraceLayer::new_for_http())
        .with_state(hub)
}

/// A bound slide server.
pub struct Server {
    root: PathBuf,
    listener: TcpListener,
    local_addr: SocketAddr,
    url: Url,
    hub: ReloadHub,
    bridge: ReloadBridge,
    open_browser: bool,
    state: watch::Sender<ServerState>,
}

impl Server {
    /// Resolves the root, binds the listener and registers the watcher.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStartError`] if the root does not exist, the address
    /// cannot be bound, or the watcher cannot be registered.
    pub async fn bind(config: ServeConfig) -> Result<Self, ServerStartError> {
        let root = std::fs::canonicalize(config.root()).map_err(|e| ServerStartError::Root {
            path: config.root().display().to_string(),
            source: e,
        })?;

        let bind_address = config.address().bind_address();
        let listener =
            TcpListener::bind(&bind_address)
                .await
                .map_err(|e| ServerStartError::Bind {
                    address: bind_address.clone(),
                    source: e,
                })?;
        let local_addr = listener
            .local_addr()
            .map_err(|e| ServerStartError::Bind {
                address: bind_address,
                source: e,
            })?;

        let url = Url::parse(&format!(
            "http://{}:{}/",
            config.address().browser_host(),
            local_addr.port()
        ))?;

        let hub = ReloadHub::new();
        let bridge = ReloadBridge::start(&root, config.recursive_mode(), hub.clone())?;

        info!(root = %root.display(), address = %local_addr, "Server bound");
        Ok(Self {
            root,
            listener,
            local_addr,
            url,
            hub,
            bridge,
            open_browser: config.open_browser(),
            state: watch::Sender::new(ServerState::Starting),
        })
    }

    /// Returns the bound socket address.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Returns the URL opened in the browser.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Returns the served project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns a handle to the live-reload hub.
    pub fn reload_hub(&self) -> ReloadHub {
        self.hub.clone()
    }

    /// Returns the current lifecycle state.
    pub fn state(&self) -> ServerState {
        *self.state.borrow()
    }

    /// Follows lifecycle changes, including after the server is consumed by
    /// [`Server::run_until`].
    pub fn state_changes(&self) -> watch::Receiver<ServerState> {
        self.state.subscribe()
    }

    /// Serves until Ctrl-C or SIGTERM.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStartError::Serve`] if the listener fails.
    pub async fn run(self) -> Result<(), ServerStartError> {
        self.run_until(shutdown_signal()).await
    }

    /// Serves until `signal` completes.
    ///
    /// In-flight requests are not drained; the listener, watcher and hub are
    /// dropped as soon as the signal fires.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStartError::Serve`] if the listener fails.
    pub async fn run_until<F>(self, signal: F) -> Result<(), ServerStartError>
    where
        F: Future<Output = ()>,
    {
        if self.open_browser {
            open_browser(&self.url);
        }
        transition(&self.state, ServerState::Listening);

        let Self {
            root,
            listener,
            url,
            hub,
            bridge,
            state,
            ..
        } = self;
        let app = router(&root, hub.clone());
        info!(url = %url, "Serving slides");

        let result = tokio::select! {
            result = axum::serve(listener, app).into_future() => result.map_err(ServerStartError::Serve),
            () = signal => Ok(()),
        };

        transition(&state, ServerState::Terminating);
        bridge.stop().await;
        drop(hub);
        transition(&state, ServerState::Stopped);
        result
    }
}

fn transition(state: &watch::Sender<ServerState>, to: ServerState) {
    let from = state.send_replace(to);
    info!(from = %from, to = %to, "Server state changed");
}

/// Opens `url` in the default browser; failure is only logged.
fn open_browser(url: &Url) {
    if let Err(e) = open::that_detached(url.as_str()) {
        warn!(url = %url, error = %e, "Failed to open browser");
    }
}

/// Completes on Ctrl-C, or on SIGTERM where available.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
