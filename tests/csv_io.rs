//! CSV load/save tests
//!
//! Files on disk through `load_from_csv` and `save_to_csv`: quoting,
//! byte order marks, ragged input and failure behavior.

mod common;

use std::fs;

use common::{doc, read, temp_csv, temp_path};
use csvpad::csv::CsvError;
use csvpad::util::FileOpenError;
use csvpad::TableDocument;

// ========================================================================
// Loading
// ========================================================================

#[test]
fn test_load_simple_file() {
    let (_dir, path) = temp_csv("simple.csv", "ID,Name\n1,Alice\n2,Bob\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.headers(), ["ID", "Name"]);
    assert_eq!(d.row_count(), 2);
    assert_eq!(d.get_cell(1, 1), "Bob");
}

#[test]
fn test_load_strips_bom() {
    let (_dir, path) = temp_csv("bom.csv", "\u{feff}ID,Name\r\n1,Alice\r\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.get_header(0), "ID");
    assert_eq!(d.get_cell(0, 1), "Alice");
}

#[test]
fn test_load_ragged_rows_are_padded() {
    let (_dir, path) = temp_csv("ragged.csv", "a,b,c\n1,2,3,4,5\n6\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.column_count(), 5);
    assert_eq!(d.headers(), ["a", "b", "c", "", ""]);
    assert_eq!(d.get_cell(0, 4), "5");
    assert_eq!(d.row(1).unwrap(), ["6", "", "", "", ""]);
}

#[test]
fn test_load_empty_file() {
    let (_dir, path) = temp_csv("empty.csv", "");
    let mut d = doc(&["old"], &[&["data"]]);
    d.load_from_csv(&path).unwrap();

    assert!(d.is_empty());
    assert_eq!(d.column_count(), 0);
}

#[test]
fn test_load_keeps_blank_lines_as_empty_rows() {
    let (_dir, path) = temp_csv("blank.csv", "a,b\n1,2\n\n3,4\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.row_count(), 3);
    assert_eq!(d.row(1).unwrap(), ["", ""]);
    assert_eq!(d.get_cell(2, 0), "3");
}

#[test]
fn test_load_leading_blank_line_becomes_blank_headers() {
    let (_dir, path) = temp_csv("lead.csv", "\nA,B\n1,2\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.headers(), ["", ""]);
    assert_eq!(d.row_count(), 2);
    assert_eq!(d.row(0).unwrap(), ["A", "B"]);
}

#[test]
fn test_blank_rows_survive_load_and_save() {
    let (_dir, path) = temp_csv("survive.csv", "a,b\r\n1,2\r\n\r\n3,4\r\n");
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();
    assert!(d.set_cell(2, 1, "x"));
    d.save_to_csv(&path, None).unwrap();

    assert_eq!(read(&path), "a,b\r\n1,2\r\n,\r\n3,x\r\n");
}

#[test]
fn test_load_quoted_fields() {
    let (_dir, path) = temp_csv(
        "quoted.csv",
        "name,note\n\"Smith, J\",\"said \"\"hi\"\"\"\nx,\"two\nlines\"\n",
    );
    let mut d = TableDocument::new();
    d.load_from_csv(&path).unwrap();

    assert_eq!(d.row_count(), 2);
    assert_eq!(d.get_cell(0, 0), "Smith, J");
    assert_eq!(d.get_cell(0, 1), "said \"hi\"");
    assert_eq!(d.get_cell(1, 1), "two\nlines");
}

#[test]
fn test_load_missing_file_leaves_document_untouched() {
    let (dir, _) = temp_path("unused.csv");
    let mut d = doc(&["a"], &[&["1"]]);
    let before = d.clone();

    let err = d.load_from_csv(dir.path().join("missing.csv")).unwrap_err();
    assert!(matches!(
        err,
        CsvError::Open {
            source: FileOpenError::NotFound,
            ..
        }
    ));
    assert_eq!(d, before);
}

#[test]
fn test_load_directory_fails() {
    let (dir, _) = temp_path("unused.csv");
    let mut d = TableDocument::new();

    let err = d.load_from_csv(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        CsvError::Open {
            source: FileOpenError::IsDirectory,
            ..
        }
    ));
}

#[test]
fn test_load_invalid_utf8_leaves_document_untouched() {
    let (_dir, path) = temp_path("latin1.csv");
    fs::write(&path, b"name\n\xe9t\xe9\n").unwrap();
    let mut d = doc(&["a"], &[&["1"]]);
    let before = d.clone();

    let err = d.load_from_csv(&path).unwrap_err();
    assert!(matches!(err, CsvError::Decode { .. }));
    assert_eq!(d, before);
}

// ========================================================================
// Saving
// ========================================================================

#[test]
fn test_save_uses_crlf_and_no_bom() {
    let (_dir, path) = temp_path("out.csv");
    let d = doc(&["ID", "Name"], &[&["1", "Alice"]]);
    d.save_to_csv(&path, None).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes, b"ID,Name\r\n1,Alice\r\n");
}

#[test]
fn test_save_quotes_only_when_needed() {
    let (_dir, path) = temp_path("quoted.csv");
    let d = doc(&["plain", "special"], &[&["abc", "a,b"], &["q\"x", "line\nbreak"]]);
    d.save_to_csv(&path, None).unwrap();

    assert_eq!(
        read(&path),
        "plain,special\r\nabc,\"a,b\"\r\n\"q\"\"x\",\"line\nbreak\"\r\n"
    );
}

#[test]
fn test_save_then_load_preserves_content() {
    let (_dir, path) = temp_path("round.csv");
    let original = doc(
        &["ID", "Text", "Notes"],
        &[
            &["1", "comma, inside", "quote \" inside"],
            &["2", "multi\nline", ""],
            &["3", "", "trailing"],
        ],
    );
    original.save_to_csv(&path, None).unwrap();

    let mut loaded = TableDocument::new();
    loaded.load_from_csv(&path).unwrap();
    assert_eq!(loaded, original);
}

#[test]
fn test_save_headers_only_document() {
    let (_dir, path) = temp_path("new.csv");
    let d = TableDocument::with_headers(&["A", "B", "C"]);
    d.save_to_csv(&path, None).unwrap();

    assert_eq!(read(&path), "A,B,C\r\n");
}

#[test]
fn test_save_with_column_order() {
    let (_dir, path) = temp_path("ordered.csv");
    let d = doc(&["a", "b", "c"], &[&["1", "2", "3"]]);
    d.save_to_csv(&path, Some(&[2, 0, 1])).unwrap();

    assert_eq!(read(&path), "c,a,b\r\n3,1,2\r\n");
    // The document itself keeps its stored order
    assert_eq!(d.headers(), ["a", "b", "c"]);
}

#[test]
fn test_save_with_partial_column_order_drops_columns() {
    let (_dir, path) = temp_path("subset.csv");
    let d = doc(&["a", "b", "c"], &[&["1", "2", "3"]]);
    d.save_to_csv(&path, Some(&[1])).unwrap();

    assert_eq!(read(&path), "b\r\n2\r\n");
}

#[test]
fn test_save_with_empty_column_order_keeps_stored_order() {
    let (_dir, path) = temp_path("plain.csv");
    let d = doc(&["a", "b"], &[&["1", "2"]]);
    d.save_to_csv(&path, Some(&[])).unwrap();

    assert_eq!(read(&path), "a,b\r\n1,2\r\n");
}

#[test]
fn test_invalid_column_order_does_not_touch_file() {
    let (_dir, path) = temp_csv("keep.csv", "original\n");
    let d = doc(&["a", "b"], &[&["1", "2"]]);

    let err = d.save_to_csv(&path, Some(&[0, 5])).unwrap_err();
    assert!(matches!(
        err,
        CsvError::InvalidColumnOrder {
            index: 5,
            columns: 2
        }
    ));
    assert_eq!(read(&path), "original\n");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let (dir, _) = temp_path("unused.csv");
    let d = doc(&["a"], &[]);

    let err = d
        .save_to_csv(dir.path().join("no/such/dir/out.csv"), None)
        .unwrap_err();
    assert!(matches!(err, CsvError::Io { .. }));
}

#[test]
fn test_write_csv_to_buffer() {
    let d = doc(&["x", "y"], &[&["1", "2"]]);
    let mut buf = Vec::new();
    d.write_csv(&mut buf, Some(&[1, 0])).unwrap();

    assert_eq!(String::from_utf8(buf).unwrap(), "y,x\r\n2,1\r\n");
}
