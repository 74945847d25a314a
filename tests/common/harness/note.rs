//! Builder for test notebooks.

// Allow dead code since not every test binary uses every builder method
#![allow(dead_code)]

use serde_json::{Value, json};

/// Builder for Jupyter notebooks whose cells are notes.
#[derive(Debug, Default)]
pub struct TestNotebook {
    cells: Vec<Value>,
}

impl TestNotebook {
    /// Creates an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a markdown note cell with a `## header` line and the given tags.
    pub fn note(self, header: &str, tags: &[&str]) -> Self {
        self.raw_cell(json!({
            "cell_type": "markdown",
            "metadata": { "tags": tags },
            "source": [format!("## {header}\n"), "Some body text.\n"],
        }))
    }

    /// Adds a cell without `metadata.tags`.
    pub fn untagged_note(self, header: &str) -> Self {
        self.raw_cell(json!({
            "cell_type": "markdown",
            "metadata": {},
            "source": [format!("## {header}\n")],
        }))
    }

    /// Adds an arbitrary cell.
    pub fn raw_cell(mut self, cell: Value) -> Self {
        self.cells.push(cell);
        self
    }

    /// Serializes the notebook in nbformat 4 layout.
    pub fn to_json(&self) -> String {
        json!({
            "cells": self.cells,
            "metadata": {},
            "nbformat": 4,
            "nbformat_minor": 2,
        })
        .to_string()
    }
}
