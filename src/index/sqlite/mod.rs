//! SQLite-backed tag store implementation.

mod connection;
mod repo_impl;
mod transaction;


use rusqlite::Connection;

pub use transaction::{Transaction, with_transaction};

// ===========================================
// TagStore Struct
// ===========================================

/// SQLite-backed tag membership store.
///
/// Owns the connection exclusively for the duration of a run; concurrent
/// writers against the same file are not guarded against.
pub struct TagStore {
    pub(crate) conn: Connection,
}
