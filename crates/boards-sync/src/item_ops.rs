//! Item mutations. Items without a remote identifier live entirely
//! inside their board's snapshot, so every operation here is a no-op for
//! them; the owning board persists the snapshot afterwards.

use boards_core::SyncResult;
use boards_domain::Item;
use boards_remote::{column_select_option, RemoteBlock};

use crate::context::SyncContext;

impl SyncContext {
    /// Populate an item's description and child-item titles from its
    /// child blocks.
    ///
    /// Nested pages contribute their titles; headings and paragraphs
    /// contribute their plain text, one line each. Both fields are
    /// replaced wholesale.
    pub async fn fetch_description(&self, item: &mut Item) -> SyncResult<()> {
        let Some(id) = item.notion_id.clone() else {
            return Ok(());
        };

        let blocks = self.remote().list_block_children(&id).await?;

        let mut child_item_titles = Vec::new();
        let mut description = String::new();
        for block in blocks {
            match block {
                RemoteBlock::ChildPage { title } => child_item_titles.push(title),
                RemoteBlock::Heading { text } | RemoteBlock::Paragraph { text } => {
                    description.push_str(&text);
                    description.push('\n');
                }
                RemoteBlock::Other => {}
            }
        }

        item.child_item_titles = child_item_titles;
        item.description = description;
        Ok(())
    }

    /// Push the item's current title and column selection to the remote
    /// store. This is the single write path for renames and moves;
    /// callers invoke it explicitly after mutating the item in memory.
    pub async fn update_item_properties(&self, item: &Item) -> SyncResult<()> {
        let Some(id) = item.notion_id.as_deref() else {
            return Ok(());
        };
        let select = item.column.as_ref().and_then(column_select_option);
        self.remote()
            .update_page_properties(id, &item.title, select)
            .await
    }

    /// Delete the item's remote node. The caller removes the item from
    /// its board's collection afterwards.
    pub async fn delete_item(&self, item: &Item) -> SyncResult<()> {
        let Some(id) = item.notion_id.as_deref() else {
            return Ok(());
        };
        self.remote().delete_block(id).await
    }
}
