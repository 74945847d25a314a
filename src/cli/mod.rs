//! CLI argument definitions and handlers

pub mod config;
pub mod handlers;

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// tagdex - rebuild the tag membership index of a notebook collection
#[derive(Parser, Debug)]
#[command(name = "tagdex", version, about, long_about = None)]
pub struct Cli {
    /// Directory of .ipynb notes (overrides config file)
    #[arg(short = 'n', long = "notes")]
    pub notes_dir: Option<PathBuf>,

    /// Path of the SQLite tag store (overrides config file)
    #[arg(long = "db")]
    pub db_path: Option<PathBuf>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}
