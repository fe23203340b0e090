pub mod availability;
pub mod cache_store;
pub mod store;
pub mod watch;

pub use availability::{
    ensure_available, DownloadStatus, LocalSyncedDirectory, SyncedDirectory,
    DOWNLOAD_POLL_INTERVAL, MAX_DOWNLOAD_POLLS,
};
pub use cache_store::CacheStore;
pub use store::AtomicWriter;
pub use watch::{ChangeEvent, DirectoryWatcher};
