//! Shared test doubles for the synchronization tests.

use async_trait::async_trait;
use boards_core::{SyncError, SyncResult};
use boards_remote::{RemoteBlock, RemoteDatabase, RemotePage, RemoteStore, SelectOption};
use chrono::{DateTime, Utc};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();
}

pub fn date(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid test date")
}

pub fn database(id: &str, title: &str, modified: &str, options: Vec<SelectOption>) -> RemoteDatabase {
    RemoteDatabase {
        id: id.to_string(),
        title: title.to_string(),
        url: Some(format!("https://example.com/{id}")),
        icon_url: None,
        last_edited_time: date(modified),
        select_options: options,
    }
}

pub fn option(id: &str, name: &str, color: &str) -> SelectOption {
    SelectOption {
        id: Some(id.to_string()),
        name: name.to_string(),
        color: Some(color.to_string()),
    }
}

pub fn page(id: &str, title: &str, created: &str, select: Option<SelectOption>) -> RemotePage {
    RemotePage {
        id: id.to_string(),
        title: title.to_string(),
        url: None,
        created_time: date(created),
        select,
    }
}

/// In-memory stand-in for the structured-database service. Pages are
/// stored newest first, matching the real query order.
#[derive(Default)]
pub struct FakeRemote {
    pub databases: Mutex<Vec<RemoteDatabase>>,
    pub pages: Mutex<HashMap<String, Vec<RemotePage>>>,
    pub blocks: Mutex<HashMap<String, Vec<RemoteBlock>>>,
    pub failing_block_children: Mutex<HashSet<String>>,
    pub fail_search: AtomicBool,
    pub deleted_blocks: Mutex<Vec<String>>,
    pub property_updates: Mutex<Vec<(String, String, Option<SelectOption>)>>,
    next_id: AtomicU32,
}

impl FakeRemote {
    pub fn with_databases(databases: Vec<RemoteDatabase>) -> Self {
        Self {
            databases: Mutex::new(databases),
            ..Default::default()
        }
    }

    fn assign_id(&self, prefix: &str) -> String {
        let n = self.next_id.fetch_add(1, Ordering::SeqCst);
        format!("{prefix}-{n}")
    }
}

#[async_trait]
impl RemoteStore for FakeRemote {
    async fn search_databases(&self) -> SyncResult<Vec<RemoteDatabase>> {
        if self.fail_search.load(Ordering::SeqCst) {
            return Err(SyncError::Network("connection refused".into()));
        }
        Ok(self.databases.lock().unwrap().clone())
    }

    async fn query_pages(&self, database_id: &str) -> SyncResult<Vec<RemotePage>> {
        Ok(self
            .pages
            .lock()
            .unwrap()
            .get(database_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn update_database_schema(
        &self,
        database_id: &str,
        options: Vec<SelectOption>,
    ) -> SyncResult<RemoteDatabase> {
        let mut databases = self.databases.lock().unwrap();
        let database = databases
            .iter_mut()
            .find(|d| d.id == database_id)
            .ok_or_else(|| SyncError::api("database does not exist"))?;

        // The server assigns ids and colors to options that lack them.
        database.select_options = options
            .into_iter()
            .map(|mut option| {
                if option.id.is_none() {
                    option.id = Some(self.assign_id("opt"));
                }
                if option.color.is_none() {
                    option.color = Some("default".to_string());
                }
                option
            })
            .collect();
        Ok(database.clone())
    }

    async fn create_page(
        &self,
        database_id: &str,
        title: &str,
        select: Option<SelectOption>,
    ) -> SyncResult<RemotePage> {
        let page = RemotePage {
            id: self.assign_id("page"),
            title: title.to_string(),
            url: None,
            created_time: Utc::now(),
            select,
        };
        self.pages
            .lock()
            .unwrap()
            .entry(database_id.to_string())
            .or_default()
            .insert(0, page.clone());
        Ok(page)
    }

    async fn update_page_properties(
        &self,
        page_id: &str,
        title: &str,
        select: Option<SelectOption>,
    ) -> SyncResult<()> {
        self.property_updates
            .lock()
            .unwrap()
            .push((page_id.to_string(), title.to_string(), select));
        Ok(())
    }

    async fn delete_block(&self, block_id: &str) -> SyncResult<()> {
        self.deleted_blocks.lock().unwrap().push(block_id.to_string());
        Ok(())
    }

    async fn list_block_children(&self, block_id: &str) -> SyncResult<Vec<RemoteBlock>> {
        if self.failing_block_children.lock().unwrap().contains(block_id) {
            return Err(SyncError::api("blocks unavailable"));
        }
        Ok(self
            .blocks
            .lock()
            .unwrap()
            .get(block_id)
            .cloned()
            .unwrap_or_default())
    }
}
