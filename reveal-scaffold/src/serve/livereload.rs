//! Live-reload hub, browser script and WebSocket endpoint.
//!
//! Messages follow the LiveReload 7 protocol: the browser greets with a
//! `hello` command, the server answers with its own `hello`, then pushes a
//! `reload` command whenever the watcher reports a write.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

/// Path the client script is served at.
pub const SCRIPT_PATH: &str = "/livereload.js";

/// Path of the WebSocket endpoint.
pub const ENDPOINT_PATH: &str = "/livereload";

/// Protocol announced in `hello` replies.
pub const PROTOCOL: &str = "http://livereload.com/protocols/official-7";

/// Name announced in `hello` replies.
pub const SERVER_NAME: &str = "slide server";

/// Reload events buffered per client before older ones are dropped.
const RELOAD_CAPACITY: usize = 16;

/// Browser script that connects to [`ENDPOINT_PATH`] and reloads the page.
pub const LIVERELOAD_SCRIPT: &str = r#"(function () {
  var scheme = window.location.protocol === "https:" ? "wss://" : "ws://";
  var socket = new WebSocket(scheme + window.location.host + "/livereload");
  socket.onopen = function () {
    socket.send(JSON.stringify({
      command: "hello",
      protocols: ["http://livereload.com/protocols/official-7"]
    }));
  };
  socket.onmessage = function (event) {
    var message = JSON.parse(event.data);
    if (message.command === "reload") {
      window.location.reload();
    }
  };
})();
"#;

/// A command exchanged over the live-reload socket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum LiveReloadMessage {
    /// Handshake sent by both sides.
    Hello {
        /// Supported protocol URLs.
        #[serde(default)]
        protocols: Vec<String>,
        /// Server name, only sent by the server.
        #[serde(rename = "serverName", default, skip_serializing_if = "Option::is_none")]
        server_name: Option<String>,
    },

    /// Instructs the browser to reload.
    Reload {
        /// Path that changed.
        path: String,
        /// Whether stylesheets may be swapped in place; always false.
        #[serde(rename = "liveCSS")]
        live_css: bool,
    },

    /// Any other command (`info`, `url`, ...); ignored.
    #[serde(other)]
    Other,
}

impl LiveReloadMessage {
    /// The server's handshake reply.
    #[must_use]
    pub fn server_hello() -> Self {
        Self::Hello {
            protocols: vec![PROTOCOL.to_string()],
            server_name: Some(SERVER_NAME.to_string()),
        }
    }
}

/// A reload notification broadcast to every connected client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadEvent {
    /// Path that triggered the reload.
    pub path: String,
}

impl From<&ReloadEvent> for LiveReloadMessage {
    fn from(event: &ReloadEvent) -> Self {
        Self::Reload {
            path: event.path.clone(),
            live_css: false,
        }
    }
}

/// Registry of connected live-reload clients.
///
/// Registration and notification go through one broadcast channel, so
/// clients may connect while a reload is being sent.
#[derive(Debug, Clone)]
pub struct ReloadHub {
    sender: broadcast::Sender<ReloadEvent>,
}

impl Default for ReloadHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ReloadHub {
    /// Creates an empty hub.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(RELOAD_CAPACITY);
        Self { sender }
    }

    /// Registers a client.
    pub fn subscribe(&self) -> broadcast::Receiver<ReloadEvent> {
        self.sender.subscribe()
    }

    /// Broadcasts a reload to every client, returning how many were notified.
    pub fn reload(&self, path: impl Into<String>) -> usize {
        let event = ReloadEvent { path: path.into() };
        // No receivers is not an error: nobody has the page open yet.
        self.sender.send(event).unwrap_or(0)
    }

    /// Returns the number of connected clients.
    pub fn client_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Serves [`LIVERELOAD_SCRIPT`].
pub async fn script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        LIVERELOAD_SCRIPT,
    )
}

/// Upgrades a browser connection to a live-reload socket.
pub async fn endpoint(ws: WebSocketUpgrade, State(hub): State<ReloadHub>) -> Response {
    ws.on_upgrade(move |socket| serve_client(socket, hub))
}

async fn serve_client(mut socket: WebSocket, hub: ReloadHub) {
    let mut reloads = hub.subscribe();
    info!(clients = hub.client_count(), "Live-reload client connected");

    loop {
        tokio::select! {
            incoming = socket.recv() => match incoming {
                Some(Ok(Message::Text(text))) => {
                    if let Ok(LiveReloadMessage::Hello { .. }) = serde_json::from_str(text.as_str()) {
                        if send(&mut socket, &LiveReloadMessage::server_hello()).await.is_err() {
                            break;
                        }
                    }
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    debug!(error = %e, "Live-reload socket error");
                    break;
                }
            },
            event = reloads.recv() => match event {
                Ok(event) => {
                    if send(&mut socket, &LiveReloadMessage::from(&event)).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Live-reload client fell behind");
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    debug!("Live-reload client disconnected");
}

async fn send(socket: &mut WebSocket, message: &LiveReloadMessage) -> Result<(), axum::Error> {
    let text = encode(message)?;
    socket.send(Message::Text(text.into())).await
}

fn encode(message: &LiveReloadMessage) -> Result<String, axum::Error> {
    serde_json::to_string(message).map_err(axum::Error::new)
}
