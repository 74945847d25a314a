//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since this is a test utility with methods for future tests
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `tagdex` binary.
pub struct TagdexCommand {
    args: Vec<String>,
    config_home: Option<PathBuf>,
}

impl TagdexCommand {
    /// Creates a new command for the `tagdex` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            config_home: None,
        }
    }

    /// Sets the `--notes` option.
    pub fn notes(self, path: &Path) -> Self {
        self.args(["--notes".to_string(), path.to_string_lossy().to_string()])
    }

    /// Sets the `--db` option.
    pub fn db(self, path: &Path) -> Self {
        self.args(["--db".to_string(), path.to_string_lossy().to_string()])
    }

    /// Points the config file lookup at an isolated directory.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.config_home = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("tagdex").expect("Failed to find tagdex binary");
        cmd.args(&self.args).env_remove("RUST_LOG");
        if let Some(home) = &self.config_home {
            cmd.env("XDG_CONFIG_HOME", home);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }
}

impl Default for TagdexCommand {
    fn default() -> Self {
        Self::new()
    }
}
