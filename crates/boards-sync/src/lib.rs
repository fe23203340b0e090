pub mod board_ops;
pub mod context;
pub mod item_ops;
pub mod synchronizer;

pub use context::SyncContext;
pub use synchronizer::BoardSynchronizer;
