//! Note cells: the unit of extraction.

use super::tag::TagName;

/// One note: a header line and the tags attached to it.
///
/// Tags form a set; repeated tags on the same cell are collapsed, keeping the
/// first occurrence's position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCell {
    header: String,
    tags: Vec<TagName>,
}

impl NoteCell {
    /// Creates a cell from an already-derived header and its tags.
    pub fn new(header: impl Into<String>, tags: impl IntoIterator<Item = TagName>) -> Self {
        let mut unique: Vec<TagName> = Vec::new();
        for tag in tags {
            if !unique.contains(&tag) {
                unique.push(tag);
            }
        }
        Self {
            header: header.into(),
            tags: unique,
        }
    }

    /// Returns the note header.
    pub fn header(&self) -> &str {
        &self.header
    }

    /// Returns the cell's tags, without the implicit `all_notes`.
    pub fn tags(&self) -> &[TagName] {
        &self.tags
    }
}

/// Derives a note header from the first content line of a cell.
///
/// Strips the line terminator and any leading `#` or whitespace markup.
/// Returns `None` if nothing is left.
///
/// # Examples
///
/// ```
/// use tagdex::domain::parse_header;
///
/// assert_eq!(parse_header("## Bagging\n"), Some("Bagging".to_string()));
/// assert_eq!(parse_header("##\n"), None);
/// ```
pub fn parse_header(line: &str) -> Option<String> {
    let header = line
        .trim_end_matches(['\n', '\r'])
        .trim_start_matches(|c: char| c == '#' || c.is_whitespace());
    if header.is_empty() {
        None
    } else {
        Some(header.to_string())
    }
}
