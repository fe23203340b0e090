use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::column::Column;
use crate::item::Item;

pub type DatabaseId = String;

/// Which store owns a board. Exactly one variant per board: the remote
/// database is the source of truth for `Remote`, the snapshot file on disk
/// for `Local`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Backing {
    Remote { id: DatabaseId },
    Local { path: PathBuf },
}

impl Backing {
    pub fn remote_id(&self) -> Option<&str> {
        match self {
            Self::Remote { id } => Some(id),
            Self::Local { .. } => None,
        }
    }

    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::Remote { .. } => None,
            Self::Local { path } => Some(path),
        }
    }
}

/// A kanban database, remote-backed or file-backed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    pub backing: Backing,
    pub modified_date: DateTime<Utc>,
    pub web_url: Option<String>,
    pub icon_url: Option<String>,
    pub title: String,
    pub columns: Vec<Column>,
    pub items: Vec<Item>,
    /// False for a remote-backed board until its first successful item
    /// fetch; file-backed and decoded boards carry their items already.
    pub items_loaded: bool,
}

impl Board {
    /// A fresh file-backed board with no columns or items yet.
    pub fn new_local(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            backing: Backing::Local { path: path.into() },
            modified_date: Utc::now(),
            web_url: None,
            icon_url: None,
            title: title.into(),
            columns: Vec::new(),
            items: Vec::new(),
            items_loaded: true,
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self.backing, Backing::Remote { .. })
    }

    pub fn notion_id(&self) -> Option<&str> {
        self.backing.remote_id()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.backing.file_path()
    }

    pub fn column_by_id(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id() == id)
    }
}

/// Raw persisted form. The backing variant flattens into the nullable
/// `notionID`/`fileURL` pair; `itemsLoaded` is not persisted and decodes
/// to true since a snapshot embeds its items.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BoardSnapshot {
    #[serde(rename = "notionID")]
    notion_id: Option<String>,
    modified_date: DateTime<Utc>,
    #[serde(rename = "webURL")]
    web_url: Option<String>,
    #[serde(rename = "fileURL")]
    file_url: Option<PathBuf>,
    title: String,
    #[serde(rename = "iconURL")]
    icon_url: Option<String>,
    columns: Vec<Column>,
    items: Vec<Item>,
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = String;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        let backing = match (snapshot.notion_id, snapshot.file_url) {
            (Some(id), None) => Backing::Remote { id },
            (None, Some(path)) => Backing::Local { path },
            (Some(_), Some(_)) => {
                return Err("board snapshot has both notionID and fileURL".to_string())
            }
            (None, None) => {
                return Err("board snapshot has neither notionID nor fileURL".to_string())
            }
        };
        Ok(Self {
            backing,
            modified_date: snapshot.modified_date,
            web_url: snapshot.web_url,
            icon_url: snapshot.icon_url,
            title: snapshot.title,
            columns: snapshot.columns,
            items: snapshot.items,
            items_loaded: true,
        })
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        let (notion_id, file_url) = match board.backing {
            Backing::Remote { id } => (Some(id), None),
            Backing::Local { path } => (None, Some(path)),
        };
        Self {
            notion_id,
            modified_date: board.modified_date,
            web_url: board.web_url,
            file_url,
            title: board.title,
            icon_url: board.icon_url,
            columns: board.columns,
            items: board.items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::column::ColumnColor;

    fn remote_board() -> Board {
        Board {
            backing: Backing::Remote { id: "db-1".into() },
            modified_date: "2022-05-01T00:00:00Z".parse().unwrap(),
            web_url: Some("https://example.com/db-1".into()),
            icon_url: None,
            title: "Chores".into(),
            columns: vec![
                Column::new(Some("opt-1".into()), "Todo", Some(ColumnColor::Red)),
                Column::new(Some("opt-2".into()), "Done", None),
            ],
            items: vec![Item::new_local("Sweep", None)],
            items_loaded: false,
        }
    }

    #[test]
    fn test_local_board_never_has_remote_id() {
        let board = Board::new_local("/tmp/Chores.json", "Chores");
        assert!(board.notion_id().is_none());
        assert!(board.file_path().is_some());
        assert!(board.items_loaded);
    }

    #[test]
    fn test_round_trip_preserves_fields_and_forces_items_loaded() {
        let board = remote_board();
        assert!(!board.items_loaded);

        let json = serde_json::to_string(&board).unwrap();
        let decoded: Board = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.title, board.title);
        assert_eq!(decoded.columns, board.columns);
        assert_eq!(decoded.items, board.items);
        assert_eq!(decoded.backing, board.backing);
        assert!(decoded.items_loaded);
    }

    #[test]
    fn test_snapshot_keys() {
        let json = serde_json::to_value(remote_board()).unwrap();
        assert_eq!(json["notionID"], "db-1");
        assert!(json["fileURL"].is_null());
        assert_eq!(json["webURL"], "https://example.com/db-1");
        assert_eq!(json["modifiedDate"], "2022-05-01T00:00:00Z");
        assert!(json["iconURL"].is_null());
    }

    #[test]
    fn test_decode_rejects_ambiguous_backing() {
        let both = serde_json::json!({
            "notionID": "db-1",
            "modifiedDate": "2022-05-01T00:00:00Z",
            "webURL": null,
            "fileURL": "/tmp/x.json",
            "title": "Bad",
            "iconURL": null,
            "columns": [],
            "items": []
        });
        assert!(serde_json::from_value::<Board>(both).is_err());

        let neither = serde_json::json!({
            "notionID": null,
            "modifiedDate": "2022-05-01T00:00:00Z",
            "webURL": null,
            "fileURL": null,
            "title": "Bad",
            "iconURL": null,
            "columns": [],
            "items": []
        });
        assert!(serde_json::from_value::<Board>(neither).is_err());
    }
}
