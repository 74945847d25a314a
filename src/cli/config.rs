//! Configuration file support.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application configuration loaded from config file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default notes directory
    pub notes_dir: Option<PathBuf>,

    /// Default tag store location
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the default config file location.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file.
    ///
    /// Returns default config if the file doesn't exist.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read config file: {}", config_path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", config_path.display()))
    }

    /// Returns the path to the config file.
    ///
    /// Default: `~/.config/tagdex/config.toml`
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tagdex")
            .join("config.toml")
    }

    /// Resolve the notes directory, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--notes` argument
    /// 2. Config file `notes_dir` setting
    /// 3. Current working directory
    pub fn notes_dir(&self, cli_dir: Option<&PathBuf>) -> PathBuf {
        cli_dir
            .cloned()
            .or_else(|| self.notes_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Resolve the tag store path, with CLI argument taking precedence.
    ///
    /// Precedence order:
    /// 1. CLI `--db` argument
    /// 2. Config file `db_path` setting
    /// 3. `.index/tags.db` inside the notes directory
    pub fn db_path(&self, cli_db: Option<&PathBuf>, notes_dir: &Path) -> PathBuf {
        cli_db
            .cloned()
            .or_else(|| self.db_path.clone())
            .unwrap_or_else(|| default_db_path(notes_dir))
    }
}

/// Returns the default tag store path for a notes directory.
pub fn default_db_path(notes_dir: &Path) -> PathBuf {
    notes_dir.join(".index").join("tags.db")
}
