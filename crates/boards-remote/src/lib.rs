pub mod convert;
pub mod session;
pub mod store;
pub mod types;

pub use convert::column_select_option;
pub use session::{RemoteSession, SessionEvent};
pub use store::RemoteStore;
pub use types::{RemoteBlock, RemoteDatabase, RemotePage, SelectOption, STATUS_PROPERTY};
