//! Cell extraction from Jupyter notebooks.
//!
//! Every markdown cell of every notebook is one note. The first line of the
//! cell source is the note header and `metadata.tags` carries the note's
//! tags. Code and raw cells are skipped.

use crate::domain::{NoteCell, ParseTagError, TagName, parse_header};
use crate::infra::fs::scan_notebooks;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::vec;
use thiserror::Error;

/// Errors raised while extracting note cells.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("notes directory not found: {path}")]
    NotFound { path: PathBuf },

    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid notebook JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A cell lacks its header line or its tag metadata.
    #[error("malformed cell #{index} in {path}: {reason}")]
    MalformedCell {
        path: PathBuf,
        index: usize,
        reason: String,
    },

    #[error("cell #{index} in {path} has an invalid tag: {source}")]
    InvalidTag {
        path: PathBuf,
        index: usize,
        #[source]
        source: ParseTagError,
    },
}

#[derive(Debug, Deserialize)]
struct RawNotebook {
    cells: Vec<RawCell>,
}

#[derive(Debug, Deserialize)]
struct RawCell {
    #[serde(default)]
    cell_type: Option<String>,
    #[serde(default)]
    source: Option<RawSource>,
    #[serde(default)]
    metadata: Option<Value>,
}

/// nbformat allows the source as a list of lines or as one string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSource {
    Lines(Vec<String>),
    Text(String),
}

impl RawCell {
    /// A cell without `cell_type` is read as markdown.
    fn is_note(&self) -> bool {
        self.cell_type.as_deref().is_none_or(|t| t == "markdown")
    }
}

impl RawSource {
    fn first_line(&self) -> Option<&str> {
        match self {
            RawSource::Lines(lines) => lines.first().map(String::as_str),
            RawSource::Text(text) => text.lines().next(),
        }
    }
}

/// Parses the cells of one notebook document.
///
/// # Errors
///
/// Only markdown cells are parsed; cell indexes in errors count every cell
/// of the notebook.
///
/// Returns `ExtractError::Json` if the document is not a notebook,
/// `ExtractError::MalformedCell` for the first note cell without a header or
/// without a `metadata.tags` string array, and `ExtractError::InvalidTag`
/// for the first tag that cannot be used as a tag name.
pub fn parse_notebook(path: &Path, content: &str) -> Result<Vec<NoteCell>, ExtractError> {
    let notebook: RawNotebook =
        serde_json::from_str(content).map_err(|source| ExtractError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    notebook
        .cells
        .iter()
        .enumerate()
        .filter(|(_, cell)| cell.is_note())
        .map(|(index, cell)| parse_cell(path, index, cell))
        .collect()
}

fn parse_cell(path: &Path, index: usize, cell: &RawCell) -> Result<NoteCell, ExtractError> {
    let malformed = |reason: &str| ExtractError::MalformedCell {
        path: path.to_path_buf(),
        index,
        reason: reason.to_string(),
    };

    let first_line = cell
        .source
        .as_ref()
        .and_then(RawSource::first_line)
        .ok_or_else(|| malformed("cell has no source lines"))?;
    let header = parse_header(first_line).ok_or_else(|| malformed("cell header is empty"))?;

    let raw_tags = cell
        .metadata
        .as_ref()
        .and_then(|m| m.get("tags"))
        .ok_or_else(|| malformed("cell has no metadata.tags"))?
        .as_array()
        .ok_or_else(|| malformed("metadata.tags is not an array"))?;

    let mut tags = Vec::with_capacity(raw_tags.len());
    for raw in raw_tags {
        let name = raw
            .as_str()
            .ok_or_else(|| malformed("metadata.tags contains a non-string value"))?;
        let tag = TagName::new(name).map_err(|source| ExtractError::InvalidTag {
            path: path.to_path_buf(),
            index,
            source,
        })?;
        tags.push(tag);
    }

    Ok(NoteCell::new(header, tags))
}

/// Lazy sequence of note cells read from a directory of notebooks.
///
/// Notebooks are read one at a time, in sorted path order, as the sequence
/// is consumed.
pub struct CellExtractor {
    files: vec::IntoIter<PathBuf>,
    current: vec::IntoIter<NoteCell>,
}

impl CellExtractor {
    /// Creates an extractor over all notebooks under `notes_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be scanned.
    pub fn open(notes_dir: &Path) -> Result<Self, ExtractError> {
        let files = scan_notebooks(notes_dir)?;
        log::debug!(
            "found {} notebook(s) under {}",
            files.len(),
            notes_dir.display()
        );
        Ok(Self {
            files: files.into_iter(),
            current: Vec::new().into_iter(),
        })
    }

    fn load(path: &Path) -> Result<Vec<NoteCell>, ExtractError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ExtractError::from_io(path, e))?;
        let cells = parse_notebook(path, &content)?;
        log::trace!("read {} cell(s) from {}", cells.len(), path.display());
        Ok(cells)
    }
}

impl Iterator for CellExtractor {
    type Item = Result<NoteCell, ExtractError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(cell) = self.current.next() {
                return Some(Ok(cell));
            }
            let path = self.files.next()?;
            match Self::load(&path) {
                Ok(cells) => self.current = cells.into_iter(),
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// Returns a lazy cell sequence over all notebooks under `notes_dir`.
pub fn extract_cells(notes_dir: &Path) -> Result<CellExtractor, ExtractError> {
    CellExtractor::open(notes_dir)
}
