use async_trait::async_trait;
use boards_core::SyncResult;

use crate::types::{RemoteBlock, RemoteDatabase, RemotePage, SelectOption};

/// Operations the engine consumes from the structured-database service.
///
/// Implementations wrap the actual wire client; each call either returns
/// the mapped response or a typed `SyncError` carrying a human-readable
/// message. Query results are one page of the remote result set,
/// newest first.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// All databases shared with the integration.
    async fn search_databases(&self) -> SyncResult<Vec<RemoteDatabase>>;

    /// Pages of one database, newest first.
    async fn query_pages(&self, database_id: &str) -> SyncResult<Vec<RemotePage>>;

    /// Replace the full option list of the status property. The echoed
    /// database is authoritative for assigned option ids and colors.
    async fn update_database_schema(
        &self,
        database_id: &str,
        options: Vec<SelectOption>,
    ) -> SyncResult<RemoteDatabase>;

    /// Create a page under a database with an initial title and select.
    async fn create_page(
        &self,
        database_id: &str,
        title: &str,
        select: Option<SelectOption>,
    ) -> SyncResult<RemotePage>;

    /// Push a page's title and select in one properties update.
    async fn update_page_properties(
        &self,
        page_id: &str,
        title: &str,
        select: Option<SelectOption>,
    ) -> SyncResult<()>;

    async fn delete_block(&self, block_id: &str) -> SyncResult<()>;

    /// Child blocks of a page, used for description rendering.
    async fn list_block_children(&self, block_id: &str) -> SyncResult<Vec<RemoteBlock>>;
}
