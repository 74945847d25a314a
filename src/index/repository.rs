//! TagRepository trait and result types.

use crate::domain::TagName;
use crate::index::TagIndex;
use std::path::PathBuf;
use thiserror::Error;

// ===========================================
// StoreError Type
// ===========================================

/// Errors that can occur during tag store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An I/O error occurred.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two different headers of one tag compress to the same note id.
    #[error("note id {key} of tag '{tag}' is shared by '{first}' and '{second}'")]
    KeyCollision {
        tag: String,
        key: String,
        first: String,
        second: String,
    },

    /// A write failed inside a transaction, which was rolled back.
    #[error("transaction rolled back: {source}")]
    Transaction {
        #[source]
        source: Box<StoreError>,
    },
}

impl StoreError {
    /// Wraps an error raised inside a transaction scope.
    pub(crate) fn transaction(source: StoreError) -> Self {
        StoreError::Transaction {
            source: Box::new(source),
        }
    }

    /// Returns true if this error caused a rollback.
    pub fn is_rolled_back(&self) -> bool {
        matches!(self, StoreError::Transaction { .. })
    }
}

/// Result type for tag store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// ===========================================
// WriteReport
// ===========================================

/// Summary of a committed index write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteReport {
    /// Number of tag tables rewritten.
    pub tags: usize,
    /// Number of rows inserted across all tag tables.
    pub rows: usize,
    /// Number of repeated headers skipped.
    pub duplicates: usize,
    /// Whether the post-commit `VACUUM` succeeded. The tables are committed
    /// either way.
    pub compacted: bool,
}

// ===========================================
// TagRepository Trait
// ===========================================

/// Storage for the tag membership index.
pub trait TagRepository {
    /// Replaces the tables of every tag in `index` with the index's content.
    ///
    /// All tags are written in one transaction; either every table is
    /// rewritten or none is. Tables of tags missing from `index` are left
    /// untouched. A failed compaction after the commit does not fail the
    /// write; it is reported through [`WriteReport::compacted`].
    fn write_index(&mut self, index: &TagIndex) -> StoreResult<WriteReport>;

    /// Returns the note ids stored for a tag, sorted.
    ///
    /// Returns an empty list if the tag has no table.
    fn note_ids(&self, tag: &TagName) -> StoreResult<Vec<String>>;

    /// Returns the number of rows stored for a tag.
    fn row_count(&self, tag: &TagName) -> StoreResult<usize>;

    /// Returns the names of all tag tables, sorted.
    fn tag_tables(&self) -> StoreResult<Vec<String>>;
}
