use boards_core::{SyncError, SyncResult};
use boards_domain::Board;
use std::path::{Path, PathBuf};

use crate::store::AtomicWriter;

/// Reads and writes board snapshots under two shared directories: the
/// cache directory for remote-backed boards and the cloud-synced
/// directory for file-backed ones.
///
/// Writes are per-file atomic replaces; there is no cross-file
/// transaction. The remote store stays the source of truth for
/// remote-backed boards, so callers treat cache traffic as best-effort.
#[derive(Debug, Clone)]
pub struct CacheStore {
    cache_dir: PathBuf,
    synced_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: impl Into<PathBuf>, synced_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            synced_dir: synced_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    pub fn synced_dir(&self) -> &Path {
        &self.synced_dir
    }

    /// Where a board's snapshot lives: its own file for file-backed
    /// boards, `<cache-dir>/<remote-id>.json` otherwise.
    pub fn board_path(&self, board: &Board) -> PathBuf {
        match board.file_path() {
            Some(path) => path.to_path_buf(),
            None => {
                let id = board.notion_id().unwrap_or_default();
                self.cache_dir.join(format!("{id}.json"))
            }
        }
    }

    /// Serialize a board and overwrite its snapshot file.
    pub async fn persist(&self, board: &Board) -> SyncResult<()> {
        let path = self.board_path(board);
        let json = serde_json::to_vec_pretty(board)
            .map_err(|e| SyncError::Serialization(e.to_string()))?;
        AtomicWriter::write_atomic(&path, &json).await
    }

    /// Decode every `.json` snapshot in a directory. A file that fails to
    /// read or decode is skipped, never fatal to the batch; a missing
    /// directory yields no boards.
    pub async fn load_all(dir: &Path) -> Vec<Board> {
        let mut entries = match tokio::fs::read_dir(dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!("cannot list {}: {}", dir.display(), e);
                return Vec::new();
            }
        };

        let mut boards = Vec::new();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            let bytes = match AtomicWriter::read_all(&path).await {
                Ok(bytes) => bytes,
                Err(e) => {
                    tracing::debug!("skipping unreadable snapshot {}: {}", path.display(), e);
                    continue;
                }
            };
            match serde_json::from_slice::<Board>(&bytes) {
                Ok(board) => boards.push(board),
                Err(e) => {
                    tracing::debug!("skipping undecodable snapshot {}: {}", path.display(), e);
                }
            }
        }
        boards
    }

    pub async fn load_cached(&self) -> Vec<Board> {
        Self::load_all(&self.cache_dir).await
    }

    pub async fn load_synced(&self) -> Vec<Board> {
        Self::load_all(&self.synced_dir).await
    }

    /// Create a fresh file-backed board named `<title>.json` in the
    /// synced directory and persist it immediately.
    pub async fn create_local_board(&self, title: &str) -> SyncResult<Board> {
        let path = self.synced_dir.join(format!("{title}.json"));
        let board = Board::new_local(path, title);
        self.persist(&board).await?;
        Ok(board)
    }
}
