use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::column::Column;

/// One card on a board.
///
/// `description` and `child_item_titles` stay empty until the optional
/// description fetch populates them; `column` holds the owning column by
/// value and is only meaningful while a matching column is still part of
/// the board's column sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(rename = "notionID")]
    pub notion_id: Option<String>,
    pub url: Option<String>,
    pub created_date: DateTime<Utc>,
    pub title: String,
    pub column: Option<Column>,
    pub description: String,
    pub child_item_titles: Vec<String>,
}

impl Item {
    /// A card that exists only in a file-backed board.
    pub fn new_local(title: impl Into<String>, column: Option<Column>) -> Self {
        Self {
            notion_id: None,
            url: None,
            created_date: Utc::now(),
            title: title.into(),
            column,
            description: String::new(),
            child_item_titles: Vec::new(),
        }
    }

    pub fn is_remote(&self) -> bool {
        self.notion_id.is_some()
    }
}
