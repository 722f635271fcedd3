//! Filesystem watching and serialized regeneration.

use std::{
    future::Future,
    path::{Path, PathBuf},
    sync::Arc,
};

use eyre::{Context, Result};
use notify::{
    Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher,
    event::{ModifyKind, RenameMode},
};
use tokio::{
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tracing::{debug, error, info};

use crate::{ResolvedConfig, regenerate_all};

const VECTOR_SUFFIX: &str = ".svg";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WatchEventKind {
    Added,
    Changed,
    Removed,
}

/// A single-path filesystem change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchEvent {
    pub kind: WatchEventKind,
    pub path: PathBuf,
}

impl WatchEvent {
    pub fn new(kind: WatchEventKind, path: impl Into<PathBuf>) -> Self {
        Self {
            kind,
            path: path.into(),
        }
    }

    /// Split a `notify` event into per-path events.
    ///
    /// Renames become a removal of the old path and an addition of the new
    /// one. Access and unclassified events yield nothing.
    pub fn from_notify(event: &Event) -> Vec<WatchEvent> {
        let all = |kind: WatchEventKind| -> Vec<WatchEvent> {
            event
                .paths
                .iter()
                .map(|path| WatchEvent::new(kind, path))
                .collect()
        };

        match event.kind {
            EventKind::Create(_) => all(WatchEventKind::Added),
            EventKind::Remove(_) => all(WatchEventKind::Removed),
            EventKind::Modify(ModifyKind::Name(RenameMode::From)) => all(WatchEventKind::Removed),
            EventKind::Modify(ModifyKind::Name(RenameMode::To)) => all(WatchEventKind::Added),
            EventKind::Modify(ModifyKind::Name(RenameMode::Both)) => match event.paths.as_slice() {
                [from, to] => vec![
                    WatchEvent::new(WatchEventKind::Removed, from),
                    WatchEvent::new(WatchEventKind::Added, to),
                ],
                _ => all(WatchEventKind::Changed),
            },
            EventKind::Modify(_) => all(WatchEventKind::Changed),
            EventKind::Any | EventKind::Access(_) | EventKind::Other => Vec::new(),
        }
    }
}

/// Decides which paths may trigger a regeneration.
///
/// Only `.svg` paths and newly added directories under the icons root
/// qualify, so barrel writes never feed back into the watcher.
#[derive(Debug, Clone)]
pub struct WatchFilter {
    root: PathBuf,
    /// Watchers may report the root in resolved form (e.g. `/private/var` on macOS)
    canonical_root: Option<PathBuf>,
}

impl WatchFilter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let canonical_root = std::fs::canonicalize(&root).ok().filter(|c| *c != root);
        Self {
            root,
            canonical_root,
        }
    }

    pub fn accepts(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(VECTOR_SUFFIX) && self.relative(path).is_some()
    }

    /// Whether `event` is a directory created in or moved into the root.
    ///
    /// A directory moved in arrives as one event for the directory itself,
    /// with nothing reported for the files inside it.
    pub fn accepts_directory(&self, event: &WatchEvent) -> bool {
        event.kind == WatchEventKind::Added
            && self.relative(&event.path).is_some()
            && event.path.is_dir()
    }

    /// `path` relative to the icons root, if it lies inside it.
    pub fn relative<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.root).ok().or_else(|| {
            self.canonical_root
                .as_ref()
                .and_then(|root| path.strip_prefix(root).ok())
        })
    }
}

/// Result of asking the queue for a regeneration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOutcome {
    /// A run was scheduled
    Queued,
    /// A run was already pending and will cover this request
    Coalesced,
    /// The worker has stopped
    Closed,
}

/// Single-slot queue in front of a regeneration worker.
///
/// At most one run executes at a time and at most one more waits behind it;
/// any burst of requests in between collapses into that one trailing run.
#[derive(Debug, Clone)]
pub struct RegenerationQueue {
    tx: mpsc::Sender<()>,
}

impl RegenerationQueue {
    /// Start the worker task that invokes `runner` once per queued request.
    ///
    /// The worker exits once every queue handle has been dropped and the
    /// pending run, if any, has finished.
    pub fn spawn<F, Fut>(mut runner: F) -> (Self, JoinHandle<()>)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::channel::<()>(1);
        let worker = tokio::spawn(async move {
            while rx.recv().await.is_some() {
                runner().await;
            }
            debug!("regeneration worker stopped");
        });
        (Self { tx }, worker)
    }

    pub fn request(&self) -> RequestOutcome {
        match self.tx.try_send(()) {
            Ok(()) => RequestOutcome::Queued,
            Err(TrySendError::Full(())) => RequestOutcome::Coalesced,
            Err(TrySendError::Closed(())) => RequestOutcome::Closed,
        }
    }
}

/// Turns qualifying filesystem events into regeneration requests.
#[derive(Debug, Clone)]
pub struct WatchAdapter {
    filter: WatchFilter,
    queue: RegenerationQueue,
}

impl WatchAdapter {
    pub fn new(filter: WatchFilter, queue: RegenerationQueue) -> Self {
        Self { filter, queue }
    }

    /// Handle one event; returns whether it triggered a regeneration request.
    pub fn handle(&self, event: &WatchEvent) -> bool {
        let relative = self.filter.relative(&event.path).unwrap_or(&event.path);
        if self.filter.accepts(&event.path) {
            info!("SVG file changed: {}", relative.display());
        } else if self.filter.accepts_directory(event) {
            info!("Directory added: {}", relative.display());
        } else {
            return false;
        }

        match self.queue.request() {
            RequestOutcome::Queued => debug!(kind = ?event.kind, "regeneration queued"),
            RequestOutcome::Coalesced => debug!(kind = ?event.kind, "regeneration already pending"),
            RequestOutcome::Closed => {
                error!("Regeneration worker is not running; ignoring change");
                return false;
            }
        }
        true
    }
}

/// Keeps the icons-root watcher and its regeneration worker alive.
///
/// Dropping the handle stops watching and aborts the worker.
pub struct WatchHandle {
    watcher: Option<RecommendedWatcher>,
    worker: Option<JoinHandle<()>>,
}

impl WatchHandle {
    /// Watch the icons root recursively and regenerate on SVG changes.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start(config: Arc<ResolvedConfig>) -> Result<Self> {
        let root = config.icons_root().to_path_buf();

        let (queue, worker) = RegenerationQueue::spawn(move || {
            let config = Arc::clone(&config);
            async move {
                match regenerate_all(&config).await {
                    Ok(_) => info!("Barrel files regenerated"),
                    Err(e) => error!("Barrel regeneration failed: {:#}", e),
                }
            }
        });
        let adapter = WatchAdapter::new(WatchFilter::new(&root), queue);

        let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                for event in WatchEvent::from_notify(&event) {
                    adapter.handle(&event);
                }
            }
            Err(e) => error!("Watch error: {}", e),
        })
        .wrap_err("failed to create file watcher")?;

        watcher
            .watch(&root, RecursiveMode::Recursive)
            .wrap_err_with(|| format!("failed to watch '{}'", root.display()))?;
        info!("Watching for SVG changes in {}", root.display());

        Ok(Self {
            watcher: Some(watcher),
            worker: Some(worker),
        })
    }

    /// Stop watching and wait for an in-flight regeneration to finish.
    pub async fn shutdown(mut self) {
        // Dropping the watcher drops the adapter and with it the queue sender
        self.watcher.take();
        if let Some(worker) = self.worker.take() {
            let _ = worker.await;
        }
    }
}

impl Drop for WatchHandle {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.abort();
        }
    }
}
