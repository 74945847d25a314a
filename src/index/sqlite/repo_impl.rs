//! TagRepository trait implementation for TagStore.

use super::TagStore;
use super::transaction::{Transaction, with_transaction};
use crate::domain::{NoteKey, TagName, compress};
use crate::index::schema::{ensure_tag_table, quote_ident, tag_table_exists};
use crate::index::{StoreError, StoreResult, TagIndex, TagRepository, WriteReport};
use std::collections::HashMap;

// ===========================================
// Key Resolution
// ===========================================

/// Note ids of one tag, ready for insertion.
struct TagKeys {
    keys: Vec<NoteKey>,
    duplicates: usize,
}

/// Compresses the headers of a tag and drops repeats.
///
/// A header seen twice is skipped. Two different headers sharing one key
/// are a collision and fail the write.
fn resolve_keys<F>(tag: &TagName, headers: &[String], compress: &F) -> StoreResult<TagKeys>
where
    F: Fn(&str) -> NoteKey,
{
    let mut seen: HashMap<NoteKey, &str> = HashMap::with_capacity(headers.len());
    let mut keys = Vec::with_capacity(headers.len());
    let mut duplicates = 0;

    for header in headers {
        let key = compress(header);
        match seen.get(&key) {
            None => {
                seen.insert(key.clone(), header);
                keys.push(key);
            }
            Some(first) if *first == header.as_str() => duplicates += 1,
            Some(first) => {
                return Err(StoreError::KeyCollision {
                    tag: tag.to_string(),
                    key: key.to_string(),
                    first: first.to_string(),
                    second: header.clone(),
                });
            }
        }
    }

    Ok(TagKeys { keys, duplicates })
}

// ===========================================
// Tag Table Rewrite
// ===========================================

/// Replaces the rows of one tag table inside an open transaction.
fn rewrite_tag<F>(
    tx: &Transaction<'_>,
    tag: &TagName,
    headers: &[String],
    compress: &F,
) -> StoreResult<TagKeys>
where
    F: Fn(&str) -> NoteKey,
{
    let resolved = resolve_keys(tag, headers, compress)?;
    let table = quote_ident(tag.as_str());

    ensure_tag_table(tx.conn(), tag)?;
    tx.execute(&format!("DELETE FROM {table}"), [])?;

    let mut stmt = tx
        .conn()
        .prepare(&format!("INSERT INTO {table} (note_id) VALUES (?1)"))?;
    for key in &resolved.keys {
        stmt.execute([key.as_str()])?;
    }

    log::debug!(
        "tag '{}': {} note(s), {} duplicate(s) skipped",
        tag,
        resolved.keys.len(),
        resolved.duplicates
    );
    Ok(resolved)
}

/// Turns the outcome of the post-commit compaction into a report flag.
///
/// The write is already committed, so a failure is only logged.
pub(super) fn finish_compaction(result: StoreResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::warn!("tag tables committed but compaction failed: {err}");
            false
        }
    }
}

impl TagStore {
    /// Writes `index` with a custom header-to-key transform.
    ///
    /// Same contract as [`TagRepository::write_index`].
    pub fn write_index_with<F>(&mut self, index: &TagIndex, compress: F) -> StoreResult<WriteReport>
    where
        F: Fn(&str) -> NoteKey,
    {
        let mut report = with_transaction(&self.conn, |tx| {
            let mut report = WriteReport::default();
            for (tag, headers) in index.iter() {
                let written = rewrite_tag(tx, tag, headers, &compress)?;
                report.tags += 1;
                report.rows += written.keys.len();
                report.duplicates += written.duplicates;
            }
            Ok(report)
        })?;

        report.compacted = finish_compaction(self.compact());
        log::info!(
            "wrote {} tag table(s), {} row(s)",
            report.tags,
            report.rows
        );
        Ok(report)
    }
}

impl TagRepository for TagStore {
    fn write_index(&mut self, index: &TagIndex) -> StoreResult<WriteReport> {
        self.write_index_with(index, compress)
    }

    fn note_ids(&self, tag: &TagName) -> StoreResult<Vec<String>> {
        if !tag_table_exists(&self.conn, tag)? {
            return Ok(Vec::new());
        }
        let mut stmt = self.conn.prepare(&format!(
            "SELECT note_id FROM {} ORDER BY note_id",
            quote_ident(tag.as_str())
        ))?;
        let ids = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(ids)
    }

    fn row_count(&self, tag: &TagName) -> StoreResult<usize> {
        if !tag_table_exists(&self.conn, tag)? {
            return Ok(0);
        }
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", quote_ident(tag.as_str())),
            [],
            |row| row.get(0),
        )?;
        Ok(count as usize)
    }

    fn tag_tables(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT m.name FROM sqlite_master AS m
             JOIN pragma_table_info(m.name) AS p
             WHERE m.type = 'table' AND p.name = 'note_id'
             ORDER BY m.name",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<String>, _>>()?;
        Ok(names)
    }
}
