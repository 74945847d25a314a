//! Compact note identifiers derived from note headers.

use sha2::{Digest, Sha256};
use std::fmt;

/// Number of digest bytes kept in a [`NoteKey`].
const KEY_BYTES: usize = 8;

/// Short, stable identifier of a note, used as the `note_id` storage key.
///
/// Stores a 16-character lowercase hex string: the first 8 bytes of the
/// SHA-256 digest of the note header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NoteKey {
    hex: String,
}

impl NoteKey {
    /// Returns the key as a lowercase hex string.
    pub fn as_str(&self) -> &str {
        &self.hex
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex)
    }
}

/// Compresses a note header into its storage key.
///
/// Deterministic: the same header always yields the same key, across runs
/// and machines.
///
/// # Examples
///
/// ```
/// use tagdex::domain::compress;
///
/// let key = compress("Bias-variance tradeoff");
/// assert_eq!(key.as_str().len(), 16);
/// assert_eq!(key, compress("Bias-variance tradeoff"));
/// ```
pub fn compress(header: &str) -> NoteKey {
    let mut hasher = Sha256::new();
    hasher.update(header.as_bytes());
    let digest = hasher.finalize();
    let hex = digest[..KEY_BYTES]
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();
    NoteKey { hex }
}
