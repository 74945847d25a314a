//! tagdex - tag membership index for notebook collections

pub mod cli;
pub mod domain;
pub mod index;
pub mod infra;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use cli::{Cli, config::Config, handlers::handle_sync};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let notes_dir = config.notes_dir(cli.notes_dir.as_ref());
    let db_path = config.db_path(cli.db_path.as_ref(), &notes_dir);
    log::debug!(
        "notes: {}, store: {}",
        notes_dir.display(),
        db_path.display()
    );

    handle_sync(&notes_dir, &db_path)
}

/// Installs the logger. `RUST_LOG` overrides the verbosity flag.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
