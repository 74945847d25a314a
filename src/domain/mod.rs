//! Core types: NoteCell, TagName, NoteKey

mod cell;
mod note_key;
mod tag;

pub use cell::{NoteCell, parse_header};
pub use note_key::{NoteKey, compress};
pub use tag::{ALL_NOTES, MAX_TAG_LEN, ParseTagError, TagName};
