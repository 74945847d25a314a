//! Tag index construction from extracted note cells.

use crate::domain::{NoteCell, TagName};
use std::collections::BTreeMap;

/// In-memory mapping from tag to the headers of the notes carrying it.
///
/// Every note belongs to the reserved `all_notes` tag. Within a tag, headers
/// keep extraction order and are not de-duplicated. Tags iterate in name
/// order, so two builds from the same cells produce identical writes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    tags: BTreeMap<TagName, Vec<String>>,
}

impl TagIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the index extended with one cell.
    ///
    /// The header is appended to each of the cell's tags and to `all_notes`,
    /// once per cell even if the cell lists `all_notes` explicitly.
    pub fn with_cell(mut self, cell: &NoteCell) -> Self {
        for tag in cell.tags().iter().filter(|t| !t.is_all_notes()) {
            self.tags
                .entry(tag.clone())
                .or_default()
                .push(cell.header().to_string());
        }
        self.tags
            .entry(TagName::all_notes())
            .or_default()
            .push(cell.header().to_string());
        self
    }

    /// Returns the headers recorded for a tag.
    pub fn get(&self, tag: &TagName) -> Option<&[String]> {
        self.tags.get(tag).map(Vec::as_slice)
    }

    /// Iterates over tags and their headers in tag name order.
    pub fn iter(&self) -> impl Iterator<Item = (&TagName, &[String])> {
        self.tags.iter().map(|(tag, headers)| (tag, headers.as_slice()))
    }

    /// Returns the tags present in the index, in name order.
    pub fn tags(&self) -> impl Iterator<Item = &TagName> {
        self.tags.keys()
    }

    /// Returns the number of distinct tags, `all_notes` included.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no cell has been added.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Returns the number of cells folded into the index.
    pub fn note_count(&self) -> usize {
        self.tags
            .get(&TagName::all_notes())
            .map_or(0, Vec::len)
    }
}

/// Folds a cell sequence into a [`TagIndex`].
///
/// Stops at the first extraction error and returns it unchanged; no partial
/// index escapes.
///
/// # Errors
///
/// Returns the first error yielded by `cells`.
pub fn build_index<I, E>(cells: I) -> Result<TagIndex, E>
where
    I: IntoIterator<Item = Result<NoteCell, E>>,
{
    cells
        .into_iter()
        .try_fold(TagIndex::new(), |index, cell| Ok(index.with_cell(&cell?)))
}
