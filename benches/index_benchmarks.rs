//! Benchmarks for tag index operations.
//!
//! Run with: cargo bench --bench index_benchmarks

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use serde_json::json;
use std::fs;
use tagdex::index::{TagIndex, TagRepository, TagStore, build_index};
use tagdex::infra::extract_cells;
use tempfile::TempDir;

// =============================================================================
// Test Data Generation
// =============================================================================

/// Tags to assign to notes
const TAGS: &[&str] = &[
    "statistics",
    "machine_learning",
    "deep_learning",
    "nlp",
    "python",
    "sql",
    "visualization",
    "optimization",
];

/// Cells per generated notebook
const CELLS_PER_NOTEBOOK: usize = 50;

/// Deterministic tag subset for the note at `index`.
fn tags_for(index: usize) -> Vec<&'static str> {
    TAGS.iter()
        .enumerate()
        .filter(|(i, _)| (index + i) % 3 == 0)
        .map(|(_, t)| *t)
        .collect()
}

/// Create a temporary directory holding `count` notes spread over notebooks
fn create_test_notebooks(count: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let cells: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "cell_type": "markdown",
                "metadata": { "tags": tags_for(i) },
                "source": [format!("## Note {i}\n"), "Body text.\n"],
            })
        })
        .collect();

    for (n, chunk) in cells.chunks(CELLS_PER_NOTEBOOK).enumerate() {
        let notebook = json!({ "cells": chunk, "metadata": {}, "nbformat": 4 });
        fs::write(
            dir.path().join(format!("notes_{n:04}.ipynb")),
            notebook.to_string(),
        )
        .expect("Failed to write notebook");
    }

    dir
}

fn load_index(dir: &TempDir) -> TagIndex {
    build_index(extract_cells(dir.path()).expect("Failed to scan")).expect("Failed to build")
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");

    for size in [100, 1000, 5000] {
        let dir = create_test_notebooks(size);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter(|| load_index(&dir));
        });
    }

    group.finish();
}

fn bench_write_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_index");

    for size in [100, 1000, 5000] {
        let dir = create_test_notebooks(size);
        let index = load_index(&dir);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("notes", size), &size, |b, _| {
            b.iter(|| {
                let mut store = TagStore::open_in_memory().unwrap();
                store.write_index(&index).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_rewrite_existing(c: &mut Criterion) {
    let dir = create_test_notebooks(1000);
    let index = load_index(&dir);
    let mut store = TagStore::open_in_memory().unwrap();
    store.write_index(&index).unwrap();

    c.bench_function("rewrite_existing_1000", |b| {
        b.iter(|| store.write_index(&index).unwrap())
    });
}

// =============================================================================
// Criterion Groups
// =============================================================================

criterion_group!(
    index_benches,
    bench_build_index,
    bench_write_index,
    bench_rewrite_existing,
);

criterion_main!(index_benches);
