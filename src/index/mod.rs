//! Tag index construction and SQLite persistence

mod builder;
mod repository;
mod schema;
mod sqlite;
mod sync;

pub use builder::{TagIndex, build_index};
pub use repository::{StoreError, StoreResult, TagRepository, WriteReport};
pub use sqlite::{TagStore, Transaction, with_transaction};
pub use sync::{SyncError, SyncReport, sync_index, sync_tags};
