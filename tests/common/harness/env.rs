//! Isolated test environment with temp directory.

// Allow dead code since not every test binary uses every helper
#![allow(dead_code)]

use super::{TagdexCommand, TestNotebook};
use std::path::{Path, PathBuf};
use tagdex::domain::{TagName, compress};
use tagdex::index::{TagRepository, TagStore};
use tempfile::TempDir;

/// Isolated test environment with a temporary notes directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// The tag store lives next to the notes directory, not inside it.
pub struct TestEnv {
    temp_dir: TempDir,
    notes_dir: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment with an empty notes directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let notes_dir = temp_dir.path().join("notes");
        std::fs::create_dir(&notes_dir).expect("Failed to create notes directory");
        Self {
            temp_dir,
            notes_dir,
        }
    }

    /// Returns the path to the notes directory.
    pub fn notes_dir(&self) -> &Path {
        &self.notes_dir
    }

    /// Returns the path of the tag store.
    pub fn db_path(&self) -> PathBuf {
        self.temp_dir.path().join("tags.db")
    }

    /// Returns a directory usable as `XDG_CONFIG_HOME`.
    pub fn config_home(&self) -> PathBuf {
        self.temp_dir.path().join("config")
    }

    /// Writes a notebook into the notes directory.
    pub fn add_notebook(&self, name: &str, notebook: &TestNotebook) -> PathBuf {
        let path = self.notes_dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create notebook directory");
        }
        std::fs::write(&path, notebook.to_json()).expect("Failed to write notebook");
        path
    }

    /// Writes a raw file into the notes directory.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.notes_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Opens the tag store.
    pub fn store(&self) -> TagStore {
        TagStore::open(&self.db_path()).expect("Failed to open tag store")
    }

    /// Returns the stored note ids of a tag, sorted.
    pub fn stored_ids(&self, tag: &str) -> Vec<String> {
        let tag = TagName::new(tag).expect("Invalid tag");
        self.store().note_ids(&tag).expect("Failed to read tag table")
    }

    /// Creates a TagdexCommand configured for this test environment.
    pub fn cmd(&self) -> TagdexCommand {
        TagdexCommand::new()
            .config_home(&self.config_home())
            .notes(&self.notes_dir)
            .db(&self.db_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Sorted note ids of the given headers.
pub fn ids(headers: &[&str]) -> Vec<String> {
    let mut ids: Vec<String> = headers.iter().map(|h| compress(h).to_string()).collect();
    ids.sort();
    ids
}
