//! Directory scanning for notebook files.

use crate::infra::notebook::ExtractError;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// File extension of note documents.
const NOTEBOOK_EXTENSION: &str = "ipynb";

impl ExtractError {
    /// Creates an appropriate ExtractError from an io::Error.
    pub(crate) fn from_io(path: &Path, error: io::Error) -> Self {
        match error.kind() {
            io::ErrorKind::NotFound => ExtractError::NotFound { path: path.into() },
            _ => ExtractError::Io {
                path: path.into(),
                source: error,
            },
        }
    }
}

/// Lists all notebook files under a directory, in sorted path order.
///
/// Hidden files and directories (e.g. `.ipynb_checkpoints`) are skipped.
/// Returned paths include `dir` as prefix.
///
/// # Errors
///
/// Returns `ExtractError::NotFound` if the directory doesn't exist,
/// `ExtractError::NotADirectory` if the path is a file, and
/// `ExtractError::Io` if a directory entry cannot be read.
pub fn scan_notebooks(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    if !dir.exists() {
        return Err(ExtractError::NotFound {
            path: dir.to_path_buf(),
        });
    }
    if !dir.is_dir() {
        return Err(ExtractError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(dir)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(dir).to_path_buf();
            ExtractError::Io {
                path,
                source: e
                    .into_io_error()
                    .unwrap_or_else(|| io::Error::other("filesystem loop detected")),
            }
        })?;
        if entry.file_type().is_file() && has_notebook_extension(&entry) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|s| s.starts_with('.'))
}

fn has_notebook_extension(entry: &DirEntry) -> bool {
    entry
        .path()
        .extension()
        .is_some_and(|e| e == NOTEBOOK_EXTENSION)
}
