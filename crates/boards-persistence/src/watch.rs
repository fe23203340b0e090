use boards_core::SyncResult;
use chrono::{DateTime, Utc};
use notify::{RecursiveMode, Watcher};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{broadcast, Mutex};

/// A snapshot file in the watched directory changed on disk.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub path: PathBuf,
    pub detected_at: DateTime<Utc>,
}

/// Watches the cloud-synced directory for snapshot changes.
///
/// Create, modify, and remove events for `.json` files are forwarded on a
/// broadcast channel; each subscriber decides how to react. The watcher
/// runs in a background task so the notify callback never blocks the
/// runtime.
pub struct DirectoryWatcher {
    tx: broadcast::Sender<ChangeEvent>,
    task_handle: Arc<Mutex<Option<tokio::task::JoinHandle<()>>>>,
}

impl DirectoryWatcher {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(32);
        Self {
            tx,
            task_handle: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn start_watching(&self, dir: PathBuf) -> SyncResult<()> {
        let tx = self.tx.clone();

        // Canonicalize so forwarded paths match OS event paths.
        let canonical_dir = tokio::fs::canonicalize(&dir).await?;

        let handle = tokio::spawn(async move {
            let result = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                match res {
                    Ok(event) => {
                        if !matches!(
                            event.kind,
                            notify::EventKind::Create(_)
                                | notify::EventKind::Modify(_)
                                | notify::EventKind::Remove(_)
                        ) {
                            return;
                        }
                        for path in event.paths {
                            if path.extension().and_then(|e| e.to_str()) == Some("json") {
                                let _ = tx.send(ChangeEvent {
                                    path,
                                    detected_at: Utc::now(),
                                });
                            }
                        }
                    }
                    Err(e) => {
                        tracing::warn!("directory watcher error: {}", e);
                    }
                }
            });

            match result {
                Ok(mut watcher) => {
                    if let Err(e) = watcher.watch(&canonical_dir, RecursiveMode::NonRecursive) {
                        tracing::error!("failed to watch {}: {}", canonical_dir.display(), e);
                    } else {
                        tracing::info!("watching {}", canonical_dir.display());
                        // Keep the watcher alive for the task's lifetime.
                        std::future::pending::<()>().await;
                    }
                }
                Err(e) => {
                    tracing::error!("failed to create watcher: {}", e);
                }
            }
        });

        let mut guard = self.task_handle.lock().await;
        if let Some(previous) = guard.replace(handle) {
            previous.abort();
        }
        Ok(())
    }

    pub async fn stop_watching(&self) {
        let mut guard = self.task_handle.lock().await;
        if let Some(handle) = guard.take() {
            handle.abort();
            tracing::info!("stopped directory watching");
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.tx.subscribe()
    }
}

impl Default for DirectoryWatcher {
    fn default() -> Self {
        Self::new()
    }
}
