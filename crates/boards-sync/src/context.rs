use boards_core::{SyncError, SyncResult};
use boards_domain::Board;
use boards_persistence::CacheStore;
use boards_remote::{RemoteDatabase, RemoteStore};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Services the mutation operations need, constructed once at startup
/// and passed by reference to whatever owns boards.
///
/// Also keeps the databases from the most recent successful search;
/// schema updates need an existing database to attach to, and a missing
/// entry is the distinct `DatabaseNotFound` failure.
pub struct SyncContext {
    remote: Arc<dyn RemoteStore>,
    cache: CacheStore,
    databases: RwLock<Vec<RemoteDatabase>>,
}

impl SyncContext {
    pub fn new(remote: Arc<dyn RemoteStore>, cache: CacheStore) -> Self {
        Self {
            remote,
            cache,
            databases: RwLock::new(Vec::new()),
        }
    }

    pub fn remote(&self) -> &dyn RemoteStore {
        self.remote.as_ref()
    }

    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }

    pub async fn remember_databases(&self, databases: Vec<RemoteDatabase>) {
        *self.databases.write().await = databases;
    }

    /// Refresh one entry after a schema update echoed the new state back.
    pub(crate) async fn remember_database(&self, database: RemoteDatabase) {
        let mut databases = self.databases.write().await;
        if let Some(existing) = databases.iter_mut().find(|d| d.id == database.id) {
            *existing = database;
        } else {
            databases.push(database);
        }
    }

    pub async fn database(&self, id: &str) -> SyncResult<RemoteDatabase> {
        self.databases
            .read()
            .await
            .iter()
            .find(|d| d.id == id)
            .cloned()
            .ok_or_else(|| SyncError::DatabaseNotFound(id.to_string()))
    }

    /// Cache writes are defense-in-depth for remote-backed boards; a
    /// failure is logged, never surfaced.
    pub(crate) async fn persist_best_effort(&self, board: &Board) {
        if let Err(e) = self.cache.persist(board).await {
            tracing::warn!("failed to cache snapshot for '{}': {}", board.title, e);
        }
    }
}
