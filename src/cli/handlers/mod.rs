//! Command handlers for the CLI.

mod sync;

pub use sync::{handle_sync, summary_line};
