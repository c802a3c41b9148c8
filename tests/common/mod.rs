//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use csvpad::TableDocument;
use tempfile::TempDir;

/// Write `content` to `name` inside a fresh temp dir
///
/// The returned `TempDir` must be kept alive for the file to exist.
pub fn temp_csv(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Path to a file that does not exist yet inside a fresh temp dir
pub fn temp_path(name: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    (dir, path)
}

/// Read a file back as text
pub fn read(path: &PathBuf) -> String {
    fs::read_to_string(path).unwrap()
}

/// Build a document from string slices
pub fn doc(headers: &[&str], rows: &[&[&str]]) -> TableDocument {
    let mut doc = TableDocument::with_headers(headers);
    doc.insert_row(0, rows.len());
    for (r, row) in rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            doc.set_cell(r, c, *value);
        }
    }
    doc
}

/// Assert every data row has exactly `column_count()` cells
pub fn assert_rectangular(doc: &TableDocument) {
    let width = doc.column_count();
    if !doc.headers().is_empty() {
        assert_eq!(doc.headers().len(), width, "header width mismatch");
    }
    for (i, row) in doc.rows().iter().enumerate() {
        assert_eq!(row.len(), width, "row {} has width {}, expected {}", i, row.len(), width);
    }
}
