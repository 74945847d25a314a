//! Per-tag table schema.
//!
//! Each tag owns a table named after it with a single `note_id` column and
//! a unique index `<tag>_index` on that column.

use crate::domain::TagName;
use rusqlite::Connection;

/// Quotes a SQL identifier.
///
/// Tag names are validated to `[a-z0-9_]` before they get here, the quoting
/// only keeps keywords such as `order` or `group` usable as tags.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Creates the table and unique index for a tag if they don't exist.
///
/// Never drops an existing table. Idempotent.
pub(crate) fn ensure_tag_table(conn: &Connection, tag: &TagName) -> rusqlite::Result<()> {
    let table = quote_ident(tag.as_str());
    let index = quote_ident(&tag.index_name());
    conn.execute_batch(&format!(
        "CREATE TABLE IF NOT EXISTS {table} (note_id TEXT);
         CREATE UNIQUE INDEX IF NOT EXISTS {index} ON {table} (note_id);"
    ))
}

/// Returns true if a table exists for the tag.
pub(crate) fn tag_table_exists(conn: &Connection, tag: &TagName) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT EXISTS (SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1)",
        [tag.as_str()],
        |row| row.get(0),
    )
}
