use boards_domain::{Board, BoardSort};
use boards_persistence::{ensure_available, DirectoryWatcher, SyncedDirectory};
use boards_remote::RemoteSession;
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};

use crate::context::SyncContext;

#[derive(Default)]
struct BoardsState {
    remote_boards: Vec<Board>,
    synced_boards: Vec<Board>,
    remote_loaded: bool,
    synced_loaded: bool,
}

/// Owns the known boards from both sources and publishes one coherent,
/// sorted collection.
///
/// All mutations of the shared collections go through one async lock, so
/// concurrent fetches never interleave partial writes; two fetches
/// racing to replace the same collection resolve last-write-wins.
/// Failed fetches leave the previous collection and its loaded flag
/// untouched, so callers can distinguish "not yet loaded" from "empty".
pub struct BoardSynchronizer {
    context: Arc<SyncContext>,
    cloud: Arc<dyn SyncedDirectory>,
    state: RwLock<BoardsState>,
    sort: RwLock<BoardSort>,
}

impl BoardSynchronizer {
    pub fn new(context: Arc<SyncContext>, cloud: Arc<dyn SyncedDirectory>, sort: BoardSort) -> Self {
        Self {
            context,
            cloud,
            state: RwLock::new(BoardsState::default()),
            sort: RwLock::new(sort),
        }
    }

    pub fn context(&self) -> &Arc<SyncContext> {
        &self.context
    }

    /// Fetch boards from both sources concurrently.
    ///
    /// The cloud task replaces the synced-origin collection; the remote
    /// task first surfaces cached snapshots as a low-latency placeholder,
    /// then replaces the remote-origin collection with the authoritative
    /// result and re-caches it. Neither task retries on failure.
    pub async fn fetch_all(&self) {
        tokio::join!(self.refresh_synced(), self.refresh_remote());
    }

    /// Re-run the cloud availability fetch and, on success, replace the
    /// synced-origin collection.
    pub async fn refresh_synced(&self) {
        match ensure_available(self.cloud.as_ref(), self.context.cache()).await {
            Ok(mut boards) => {
                self.sort.read().await.sort(&mut boards);
                let mut state = self.state.write().await;
                state.synced_boards = boards;
                state.synced_loaded = true;
            }
            Err(e) => {
                tracing::warn!("cloud board fetch failed: {}", e);
            }
        }
    }

    async fn refresh_remote(&self) {
        let sort = *self.sort.read().await;

        // Fast path: whatever the on-disk cache holds, before the remote
        // store answers. Loaded flag stays unset for the placeholder.
        let mut cached = self.context.cache().load_cached().await;
        sort.sort(&mut cached);
        self.state.write().await.remote_boards = cached;

        match self.context.remote().search_databases().await {
            Ok(databases) => {
                let mut boards: Vec<Board> = databases.iter().map(Board::from).collect();
                sort.sort(&mut boards);
                self.context.remember_databases(databases).await;
                {
                    let mut state = self.state.write().await;
                    state.remote_boards = boards.clone();
                    state.remote_loaded = true;
                }
                for board in &boards {
                    self.context.persist_best_effort(board).await;
                }
                tracing::info!("loaded {} remote boards", boards.len());
            }
            Err(e) => {
                tracing::warn!("remote board fetch failed: {}", e);
            }
        }
    }

    /// Current collection: remote-origin boards followed by synced-origin
    /// boards, each sorted independently.
    pub async fn boards(&self) -> Vec<Board> {
        let state = self.state.read().await;
        let mut boards = state.remote_boards.clone();
        boards.extend(state.synced_boards.iter().cloned());
        boards
    }

    pub async fn remote_boards(&self) -> Vec<Board> {
        self.state.read().await.remote_boards.clone()
    }

    pub async fn synced_boards(&self) -> Vec<Board> {
        self.state.read().await.synced_boards.clone()
    }

    pub async fn remote_loaded(&self) -> bool {
        self.state.read().await.remote_loaded
    }

    pub async fn synced_loaded(&self) -> bool {
        self.state.read().await.synced_loaded
    }

    pub async fn all_loaded(&self) -> bool {
        let state = self.state.read().await;
        state.remote_loaded && state.synced_loaded
    }

    pub async fn sort(&self) -> BoardSort {
        *self.sort.read().await
    }

    /// Change the ordering criterion and re-sort both collections in
    /// place.
    pub async fn set_sort(&self, sort: BoardSort) {
        *self.sort.write().await = sort;
        let mut state = self.state.write().await;
        sort.sort(&mut state.remote_boards);
        sort.sort(&mut state.synced_boards);
    }

    /// Create a fresh file-backed board in the synced directory and add
    /// it to the synced-origin collection.
    pub async fn create_local_board(&self, title: &str) -> boards_core::SyncResult<Board> {
        let board = self.context.cache().create_local_board(title).await?;
        self.state.write().await.synced_boards.push(board.clone());
        Ok(board)
    }

    /// Register the standing cloud watches: one subscription consumed
    /// once for the initial listing, one re-fetching on every subsequent
    /// update. Each handler coalesces events that arrive while its
    /// re-fetch is in flight instead of re-entering it.
    pub fn watch(self: Arc<Self>, watcher: &DirectoryWatcher) -> tokio::task::JoinHandle<()> {
        let gather_rx = watcher.subscribe();
        let update_rx = watcher.subscribe();

        let gather_sync = Arc::clone(&self);
        tokio::spawn(async move {
            let mut rx = gather_rx;
            if rx.recv().await.is_ok() {
                gather_sync.refresh_synced().await;
            }
        });

        let update_sync = self;
        tokio::spawn(async move {
            let mut rx = update_rx;
            loop {
                match rx.recv().await {
                    Ok(_) => {
                        update_sync.refresh_synced().await;
                        // Deliveries during the re-fetch were covered by
                        // it; start clean from the channel tail.
                        rx = rx.resubscribe();
                    }
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }

    /// Re-fetch everything whenever the remote session's credentials are
    /// swapped, so the board list reflects the new integration.
    pub fn watch_session(self: Arc<Self>, session: &RemoteSession) -> tokio::task::JoinHandle<()> {
        let mut rx = session.subscribe();
        let sync = self;
        tokio::spawn(async move {
            loop {
                match rx.recv().await {
                    Ok(_) => sync.fetch_all().await,
                    Err(broadcast::error::RecvError::Lagged(_)) => continue,
                    Err(broadcast::error::RecvError::Closed) => break,
                }
            }
        })
    }
}
