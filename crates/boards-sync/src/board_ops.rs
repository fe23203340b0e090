//! Board mutations, mediated to whichever store backs the board.
//!
//! Every operation is confirm-then-apply: in-memory state changes only
//! after the backing store accepted the write, so a failure leaves the
//! board exactly as it was. File-backed persistence errors propagate
//! (the file is the source of truth); cache writes for remote-backed
//! boards are best-effort.

use boards_core::SyncResult;
use boards_domain::{Backing, Board, Column, Item};
use boards_remote::{column_select_option, SelectOption};
use futures::future::join_all;

use crate::context::SyncContext;

impl SyncContext {
    /// Load a remote-backed board's items and their descriptions.
    ///
    /// File-backed boards are a no-op: their snapshot already holds every
    /// item. The query returns newest-first; display order is the
    /// reverse. Description fetches fan out concurrently, one per item,
    /// and an individual failure neither aborts the others nor blocks
    /// the final snapshot.
    pub async fn fetch_items(&self, board: &mut Board) -> SyncResult<()> {
        let Backing::Remote { id } = &board.backing else {
            return Ok(());
        };
        let id = id.clone();

        let pages = self.remote().query_pages(&id).await?;
        let mut items: Vec<Item> = pages.iter().map(Item::from).collect();
        items.reverse();
        board.items = items;
        board.items_loaded = true;
        self.persist_best_effort(board).await;

        let results = join_all(
            board
                .items
                .iter_mut()
                .map(|item| self.fetch_description(item)),
        )
        .await;
        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            tracing::debug!("{failed} description fetches failed for '{}'", board.title);
        }
        self.persist_best_effort(board).await;
        Ok(())
    }

    /// Append a column. Remote-backed boards push the full select-option
    /// list (existing options plus the new name) as one schema update and
    /// take the echoed schema as authoritative, since the server assigns
    /// the new option's id and color.
    pub async fn create_column(&self, board: &mut Board, name: &str) -> SyncResult<()> {
        match &board.backing {
            Backing::Remote { id } => {
                let id = id.clone();
                self.database(&id).await?;

                let mut options: Vec<SelectOption> = board
                    .columns
                    .iter()
                    .filter_map(column_select_option)
                    .collect();
                options.push(SelectOption::for_new_column(name));

                let updated = self.remote().update_database_schema(&id, options).await?;
                board.columns = updated.select_options.iter().map(Column::from).collect();
                self.remember_database(updated).await;
                self.persist_best_effort(board).await;
            }
            Backing::Local { .. } => {
                board.columns.push(Column::local(name));
                self.cache().persist(board).await?;
            }
        }
        Ok(())
    }

    /// Remove a column by identity. Items that referenced it are
    /// cascade-cleared so nothing points at a column missing from the
    /// board's sequence.
    pub async fn delete_column(&self, board: &mut Board, column: &Column) -> SyncResult<()> {
        match &board.backing {
            Backing::Remote { id } => {
                let id = id.clone();
                self.database(&id).await?;

                let options: Vec<SelectOption> = board
                    .columns
                    .iter()
                    .filter(|c| c.id() != column.id())
                    .filter_map(column_select_option)
                    .collect();

                let updated = self.remote().update_database_schema(&id, options).await?;
                board.columns = updated.select_options.iter().map(Column::from).collect();
                clear_column_references(board, column);
                self.remember_database(updated).await;
                self.persist_best_effort(board).await;
            }
            Backing::Local { .. } => {
                board.columns.retain(|c| c.id() != column.id());
                clear_column_references(board, column);
                self.cache().persist(board).await?;
            }
        }
        Ok(())
    }

    /// Add a card with an initial title and column selection.
    pub async fn create_item(
        &self,
        board: &mut Board,
        title: &str,
        column: Option<&Column>,
    ) -> SyncResult<()> {
        match &board.backing {
            Backing::Remote { id } => {
                let id = id.clone();
                let select = column.and_then(column_select_option);
                let page = self.remote().create_page(&id, title, select).await?;
                board.items.push(Item::from(&page));
                self.persist_best_effort(board).await;
            }
            Backing::Local { .. } => {
                board.items.push(Item::new_local(title, column.cloned()));
                self.cache().persist(board).await?;
            }
        }
        Ok(())
    }
}

fn clear_column_references(board: &mut Board, column: &Column) {
    for item in &mut board.items {
        if item.column.as_ref().is_some_and(|c| c.id() == column.id()) {
            item.column = None;
        }
    }
}
