//! Connection management for TagStore.

use super::TagStore;
use crate::index::{StoreError, StoreResult};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

impl TagStore {
    // ===========================================
    // In-Memory Connection
    // ===========================================

    /// Opens an empty in-memory tag store.
    ///
    /// This is useful for testing and for dry runs that don't need persistence.
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    // ===========================================
    // File-Based Connection
    // ===========================================

    /// Opens or creates a tag store at the given path.
    ///
    /// Creates parent directories if they don't exist. Existing tables,
    /// including ones unrelated to tags, are left as they are.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let conn = Connection::open(path)?;
        log::debug!("opened tag store at {}", path.display());
        Ok(Self { conn })
    }

    // ===========================================
    // Connection Accessors
    // ===========================================

    /// Returns a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ===========================================
    // Maintenance
    // ===========================================

    /// Reclaims space left by deleted and rewritten rows.
    ///
    /// Runs `VACUUM`, which SQLite refuses inside a transaction, so this must
    /// only be called once the write transaction has closed.
    pub fn compact(&mut self) -> StoreResult<()> {
        self.conn.execute_batch("VACUUM")?;
        log::debug!("compacted tag store");
        Ok(())
    }
}
