//! Validated tag names that double as SQLite table names.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum length of a tag name, in bytes.
pub const MAX_TAG_LEN: usize = 64;

/// Name of the reserved tag every note belongs to.
pub const ALL_NOTES: &str = "all_notes";

/// Suffix of the unique index attached to each tag table.
const INDEX_SUFFIX: &str = "_index";

/// A tag attached to a note cell.
///
/// Each tag is materialized as its own table in the tag store, so the name
/// must be safe to use as a SQL identifier. Tags are normalized to lowercase
/// because SQLite table names are case-insensitive: `Draft` and `draft` would
/// otherwise fight over the same table.
///
/// # Validation Rules
/// - Non-empty after normalization, at most [`MAX_TAG_LEN`] bytes
/// - Only ASCII alphanumeric characters and underscores
/// - Must not start with a digit
/// - Must not start with the `sqlite_` prefix SQLite reserves for itself
/// - Must not end with `_index`, the suffix of the per-tag unique indexes
///
/// # Examples
///
/// ```
/// use tagdex::domain::TagName;
///
/// let tag = TagName::new("Deep_Learning").unwrap();
/// assert_eq!(tag.as_str(), "deep_learning");
///
/// assert!(TagName::new("drop table").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TagName(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone)]
pub struct ParseTagError(String);

impl fmt::Display for ParseTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ParseTagError {}

impl TagName {
    /// Creates a new TagName from a string.
    ///
    /// The input is trimmed, lowercased and validated.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if the normalized tag is empty, too long,
    /// contains characters outside `[a-z0-9_]`, starts with a digit or uses
    /// the reserved `sqlite_` prefix, or ends with the `_index` suffix.
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if normalized.len() > MAX_TAG_LEN {
            return Err(ParseTagError(format!(
                "invalid tag '{}': longer than {} characters",
                normalized, MAX_TAG_LEN
            )));
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must contain only alphanumeric characters and underscores",
                normalized
            )));
        }

        if normalized.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags cannot start with a digit",
                normalized
            )));
        }

        if normalized.starts_with("sqlite_") {
            return Err(ParseTagError(format!(
                "invalid tag '{}': the sqlite_ prefix is reserved",
                normalized
            )));
        }

        // Tables and indexes share one namespace in SQLite.
        if normalized.ends_with(INDEX_SUFFIX) {
            return Err(ParseTagError(format!(
                "invalid tag '{}': the {} suffix is reserved for tag indexes",
                normalized, INDEX_SUFFIX
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the reserved tag carried by every note.
    pub fn all_notes() -> Self {
        Self(ALL_NOTES.to_string())
    }

    /// Returns true if this is the reserved `all_notes` tag.
    pub fn is_all_notes(&self) -> bool {
        self.0 == ALL_NOTES
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the unique index guarding the tag's `note_id` column.
    pub fn index_name(&self) -> String {
        format!("{}{}", self.0, INDEX_SUFFIX)
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TagName(\"{}\")", self.0)
    }
}

impl FromStr for TagName {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for TagName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for TagName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
