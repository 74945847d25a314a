//! Test harness for CLI integration tests.
//!
//! Provides isolated test environments, programmatic notebook creation,
//! and CLI assertion helpers using `assert_cmd`.

mod command;
mod env;
mod note;

// Re-export main types for external use
#[allow(unused_imports)]
pub use command::TagdexCommand;
#[allow(unused_imports)]
pub use env::{TestEnv, ids};
#[allow(unused_imports)]
pub use note::TestNotebook;
