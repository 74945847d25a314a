//! Sync command handler.

use anyhow::{Context, Result};
use std::path::Path;

use crate::index::{SyncReport, sync_tags};

pub fn handle_sync(notes_dir: &Path, db_path: &Path) -> Result<()> {
    println!("Syncing tags from {}...", notes_dir.display());

    let report = sync_tags(notes_dir, db_path)
        .with_context(|| format!("failed to sync tags into {}", db_path.display()))?;

    println!("{}", summary_line(&report));
    if report.write.duplicates > 0 {
        eprintln!("  skipped {} duplicate note(s)", report.write.duplicates);
    }
    if !report.write.compacted {
        eprintln!("  warning: tag tables were written but the store was not compacted");
    }

    Ok(())
}

/// One-line human summary of a sync run.
pub fn summary_line(report: &SyncReport) -> String {
    format!(
        "Indexed {} notes into {} tag tables ({} rows)",
        report.notes, report.write.tags, report.write.rows
    )
}
