//! Notebook scanning and cell extraction

mod fs;
mod notebook;

pub use fs::scan_notebooks;
pub use notebook::{CellExtractor, ExtractError, extract_cells, parse_notebook};
