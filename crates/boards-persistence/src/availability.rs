use async_trait::async_trait;
use boards_core::{SyncError, SyncResult};
use boards_domain::Board;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cache_store::CacheStore;

pub const DOWNLOAD_POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_DOWNLOAD_POLLS: u32 = 100;

/// Materialization state of a cloud-synced directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadStatus {
    Current,
    Downloaded,
    Requested,
    Downloading,
}

impl DownloadStatus {
    pub fn is_ready(self) -> bool {
        matches!(self, Self::Current | Self::Downloaded)
    }
}

/// A directory whose contents may be virtualized and need on-demand
/// download before they are locally readable.
#[async_trait]
pub trait SyncedDirectory: Send + Sync {
    fn path(&self) -> &Path;

    /// Ask the platform to materialize the directory's contents.
    async fn request_download(&self) -> SyncResult<()>;

    /// Read the directory's materialization status attribute. An error
    /// means the attribute itself is unreadable, not that the download
    /// failed.
    async fn download_status(&self) -> SyncResult<DownloadStatus>;
}

/// A plain on-disk directory: nothing is virtualized, so it is always
/// fully materialized.
#[derive(Debug, Clone)]
pub struct LocalSyncedDirectory {
    path: PathBuf,
}

impl LocalSyncedDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SyncedDirectory for LocalSyncedDirectory {
    fn path(&self) -> &Path {
        &self.path
    }

    async fn request_download(&self) -> SyncResult<()> {
        Ok(())
    }

    async fn download_status(&self) -> SyncResult<DownloadStatus> {
        Ok(DownloadStatus::Current)
    }
}

/// Make sure a synced directory is locally readable, then decode its
/// board snapshots.
///
/// Polls at a fixed interval while the download is pending, up to
/// `MAX_DOWNLOAD_POLLS` attempts. If the status attribute cannot be read
/// at all, falls back to whatever the local cache holds.
pub async fn ensure_available(
    directory: &dyn SyncedDirectory,
    cache: &CacheStore,
) -> SyncResult<Vec<Board>> {
    for attempt in 0..MAX_DOWNLOAD_POLLS {
        directory.request_download().await?;

        match directory.download_status().await {
            Ok(status) if status.is_ready() => {
                return Ok(CacheStore::load_all(directory.path()).await);
            }
            Ok(status) => {
                tracing::debug!(
                    "synced directory {} not ready ({:?}), attempt {}",
                    directory.path().display(),
                    status,
                    attempt + 1
                );
                tokio::time::sleep(DOWNLOAD_POLL_INTERVAL).await;
            }
            Err(e) => {
                tracing::warn!(
                    "cannot read download status for {}: {}; falling back to cache",
                    directory.path().display(),
                    e
                );
                return Ok(cache.load_cached().await);
            }
        }
    }
    Err(SyncError::DownloadTimeout {
        attempts: MAX_DOWNLOAD_POLLS,
    })
}
