//! End-to-end synchronization: notebooks in, tag tables out.

use crate::index::{StoreError, TagIndex, TagRepository, TagStore, WriteReport, build_index};
use crate::infra::{ExtractError, extract_cells};
use std::path::Path;
use thiserror::Error;

/// Errors that can abort a sync run.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Extraction failed; the store was not touched.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Writing failed; the store keeps its pre-run content.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of a successful sync run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncReport {
    /// Number of note cells extracted.
    pub notes: usize,
    /// Write statistics.
    pub write: WriteReport,
}

/// Rebuilds the tag tables of the store at `db_path` from the notebooks
/// under `notes_dir`.
///
/// All cells are extracted before the store is opened, so a malformed note
/// aborts the run without touching the store.
///
/// # Errors
///
/// Returns `SyncError::Extract` if any cell cannot be extracted and
/// `SyncError::Store` if the store cannot be opened or the write was rolled
/// back.
pub fn sync_tags(notes_dir: &Path, db_path: &Path) -> Result<SyncReport, SyncError> {
    let index = build_index(extract_cells(notes_dir)?)?;
    log::info!(
        "extracted {} note(s) across {} tag(s) from {}",
        index.note_count(),
        index.len(),
        notes_dir.display()
    );

    let mut store = TagStore::open(db_path)?;
    sync_index(&index, &mut store)
}

/// Writes an already built index into a repository.
pub fn sync_index<R: TagRepository>(index: &TagIndex, store: &mut R) -> Result<SyncReport, SyncError> {
    let write = store.write_index(index)?;
    Ok(SyncReport {
        notes: index.note_count(),
        write,
    })
}
