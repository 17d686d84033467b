//! Filesystem watch to live-reload bridge.

use super::{ReloadHub, ServerStartError};
use notify::event::ModifyKind;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// A registered watcher and the task draining its events.
///
/// Dropping the watcher closes its event channel, which ends the task.
pub struct ReloadBridge {
    watcher: RecommendedWatcher,
    task: JoinHandle<()>,
}

impl ReloadBridge {
    /// Watches `root` and broadcasts a reload on `hub` for every write event.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns [`ServerStartError::Watch`] if the watcher cannot be created
    /// or the root cannot be registered.
    pub fn start(
        root: &Path,
        mode: RecursiveMode,
        hub: ReloadHub,
    ) -> Result<Self, ServerStartError> {
        let watch_error = |source| ServerStartError::Watch {
            path: root.display().to_string(),
            source,
        };

        let (tx, rx) = mpsc::unbounded_channel();
        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
            // The receiver is gone only while shutting down.
            let _ = tx.send(res);
        })
        .map_err(watch_error)?;
        watcher.watch(root, mode).map_err(watch_error)?;

        info!(root = %root.display(), ?mode, "Watching for changes");
        let task = tokio::spawn(forward_events(rx, root.to_path_buf(), hub));

        Ok(Self { watcher, task })
    }

    /// Stops watching and waits for the event task to finish.
    pub async fn stop(self) {
        let Self { watcher, task } = self;
        drop(watcher);
        if let Err(e) = task.await {
            warn!(error = %e, "Watch task ended abnormally");
        }
    }
}

/// Returns true for events that report file contents being written.
#[must_use]
pub fn is_write(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Any)
    )
}

async fn forward_events(
    mut events: mpsc::UnboundedReceiver<notify::Result<Event>>,
    root: PathBuf,
    hub: ReloadHub,
) {
    while let Some(event) = events.recv().await {
        match event {
            Ok(event) if is_write(&event.kind) => {
                let path = event
                    .paths
                    .first()
                    .map(|path| display_path(&root, path))
                    .unwrap_or_default();
                let clients = hub.reload(path.clone());
                debug!(path = %path, clients, "Broadcast reload");
            }
            Ok(_) => {}
            Err(e) => warn!(error = %e, "Watcher error"),
        }
    }
}

/// Path of `path` relative to `root`, falling back to the full path.
fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
