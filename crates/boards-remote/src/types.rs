use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name of the select property that holds a board's columns on the
/// remote schema.
pub const STATUS_PROPERTY: &str = "Status";

/// One select option of the status property. `id` is `None` only for an
/// option the server has not assigned an identifier to yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: Option<String>,
    pub name: String,
    pub color: Option<String>,
}

impl SelectOption {
    /// An option to append to a schema update; the server assigns the id
    /// and color when it echoes the updated schema back.
    pub fn for_new_column(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            color: None,
        }
    }
}

/// A database surfaced by the search operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteDatabase {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub icon_url: Option<String>,
    pub last_edited_time: DateTime<Utc>,
    /// Options of the status property, in schema order.
    pub select_options: Vec<SelectOption>,
}

/// A page returned by a database query or page creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemotePage {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub created_time: DateTime<Utc>,
    pub select: Option<SelectOption>,
}

/// A child block of a page, reduced to the kinds the engine consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RemoteBlock {
    ChildPage { title: String },
    Heading { text: String },
    Paragraph { text: String },
    /// Any block kind the engine does not render.
    Other,
}
