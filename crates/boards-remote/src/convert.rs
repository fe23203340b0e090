//! Mappings between remote DTOs and domain entities.

use boards_domain::{Backing, Board, Column, ColumnColor, Item};

use crate::types::{RemoteDatabase, RemotePage, SelectOption};

impl From<&SelectOption> for Column {
    fn from(option: &SelectOption) -> Self {
        let color = option
            .color
            .as_deref()
            .and_then(ColumnColor::from_name);
        Column::new(option.id.clone(), option.name.clone(), color)
    }
}

impl From<&RemoteDatabase> for Board {
    fn from(database: &RemoteDatabase) -> Self {
        Board {
            backing: Backing::Remote {
                id: database.id.clone(),
            },
            modified_date: database.last_edited_time,
            web_url: database.url.clone(),
            icon_url: database.icon_url.clone(),
            title: database.title.clone(),
            columns: database.select_options.iter().map(Column::from).collect(),
            items: Vec::new(),
            items_loaded: false,
        }
    }
}

impl From<&RemotePage> for Item {
    fn from(page: &RemotePage) -> Self {
        Item {
            notion_id: Some(page.id.clone()),
            url: page.url.clone(),
            created_date: page.created_time,
            title: page.title.clone(),
            column: page.select.as_ref().map(Column::from),
            description: String::new(),
            child_item_titles: Vec::new(),
        }
    }
}

/// A column's select option for schema and page updates. Only columns the
/// server already knows (those with a remote id) produce one; a fresh
/// column goes out via `SelectOption::for_new_column` instead.
pub fn column_select_option(column: &Column) -> Option<SelectOption> {
    let id = column.notion_id.clone()?;
    Some(SelectOption {
        id: Some(id),
        name: column.name.clone(),
        color: Some(column.color().as_str().to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_board_from_database() {
        let database = RemoteDatabase {
            id: "db-1".into(),
            title: "Chores".into(),
            url: Some("https://example.com/db-1".into()),
            icon_url: None,
            last_edited_time: Utc::now(),
            select_options: vec![
                SelectOption {
                    id: Some("opt-1".into()),
                    name: "Todo".into(),
                    color: Some("red".into()),
                },
                SelectOption {
                    id: Some("opt-2".into()),
                    name: "Done".into(),
                    color: Some("not-a-color".into()),
                },
            ],
        };

        let board = Board::from(&database);
        assert_eq!(board.notion_id(), Some("db-1"));
        assert!(board.file_path().is_none());
        assert!(!board.items_loaded);
        assert_eq!(board.columns.len(), 2);
        assert_eq!(board.columns[0].color_name, Some(ColumnColor::Red));
        // Colors outside the palette are dropped, not errors.
        assert_eq!(board.columns[1].color_name, None);
    }

    #[test]
    fn test_item_from_page() {
        let page = RemotePage {
            id: "page-1".into(),
            title: "Sweep".into(),
            url: None,
            created_time: Utc::now(),
            select: Some(SelectOption {
                id: Some("opt-1".into()),
                name: "Todo".into(),
                color: Some("red".into()),
            }),
        };

        let item = Item::from(&page);
        assert_eq!(item.notion_id.as_deref(), Some("page-1"));
        assert_eq!(item.column.as_ref().map(|c| c.id()), Some("opt-1"));
        assert!(item.description.is_empty());
        assert!(item.child_item_titles.is_empty());
    }

    #[test]
    fn test_select_option_requires_remote_id() {
        let local = Column::local("Todo");
        assert!(column_select_option(&local).is_none());

        let remote = Column::new(Some("opt-1".into()), "Todo", None);
        let option = column_select_option(&remote).unwrap();
        assert_eq!(option.id.as_deref(), Some("opt-1"));
        assert_eq!(option.color.as_deref(), Some("default"));
    }
}
