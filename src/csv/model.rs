//! Table document model
//!
//! A header row plus data rows, all held as owned strings. Every public
//! mutation leaves the grid rectangular: each row is exactly
//! `column_count()` cells wide.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use super::error::CsvError;
use super::parser::{max_width, padded, parse_table, write_records, ParseError};
use super::render::render_view;
use crate::util::validate_file_for_opening;

/// Widest a document may grow through edits
///
/// Loading a wider file is allowed; only growth past this is refused.
pub const MAX_COLUMNS: usize = 16_384;

/// In-memory CSV table
///
/// Cell values are opaque text. Structural edits report invalid indices by
/// returning `false` and leave the document untouched in that case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableDocument {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableDocument {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given headers and no rows
    pub fn with_headers<S: AsRef<str>>(headers: &[S]) -> Self {
        let mut doc = Self::new();
        doc.reset_with_headers(headers);
        doc
    }

    /// Replace all content with the given headers and zero data rows
    pub fn reset_with_headers<S: AsRef<str>>(&mut self, headers: &[S]) {
        self.headers = headers.iter().map(|h| h.as_ref().to_string()).collect();
        self.rows.clear();
    }

    /// Stored header row (may be empty)
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All data rows
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// A single data row, if it exists
    pub fn row(&self, row: usize) -> Option<&[String]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    ///
    /// The header row decides when present, otherwise the first data row.
    pub fn column_count(&self) -> usize {
        if !self.headers.is_empty() {
            return self.headers.len();
        }
        self.rows.first().map_or(0, Vec::len)
    }

    /// True when there are neither headers nor rows
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }

    // === Cells ===

    /// Get cell value, or `""` when out of bounds
    pub fn get_cell(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map_or("", String::as_str)
    }

    /// Set cell value
    ///
    /// Fails when `row` does not exist or `col` would grow the grid past
    /// [`MAX_COLUMNS`]. A `col` past the current width widens the whole grid
    /// with empty cells so it stays rectangular.
    pub fn set_cell(&mut self, row: usize, col: usize, value: impl Into<String>) -> bool {
        if row >= self.rows.len() {
            return false;
        }
        let Some(width) = self.grown_width(col) else {
            return false;
        };

        self.widen_to(width);

        self.rows[row][col] = value.into();
        true
    }

    /// Empty a cell; same bounds rules as [`set_cell`](Self::set_cell)
    pub fn clear_cell(&mut self, row: usize, col: usize) -> bool {
        self.set_cell(row, col, String::new())
    }

    // === Headers ===

    /// Header label for a column
    ///
    /// Falls back to a 1-based `"Column N"` placeholder when no header is
    /// stored for `col`.
    pub fn get_header(&self, col: usize) -> String {
        match self.headers.get(col) {
            Some(header) => header.clone(),
            None => format!("Column {}", col + 1),
        }
    }

    /// Set a header label, growing the header row (and rows) as needed
    ///
    /// Fails only when `col` would grow the grid past [`MAX_COLUMNS`].
    pub fn set_header(&mut self, col: usize, value: impl Into<String>) -> bool {
        let Some(width) = self.grown_width(col) else {
            return false;
        };

        self.materialize_headers();
        if self.headers.len() < width {
            self.headers.resize(width, String::new());
        }
        self.widen_to(width);

        self.headers[col] = value.into();
        true
    }

    // === Rows ===

    /// Insert `count` empty rows at `at`
    ///
    /// `at == row_count()` appends. Anything further out fails.
    pub fn insert_row(&mut self, at: usize, count: usize) -> bool {
        if at > self.rows.len() {
            return false;
        }

        let cols = self.column_count();
        let blank_rows = (0..count).map(|_| vec![String::new(); cols]);
        self.rows.splice(at..at, blank_rows);

        tracing::debug!(at, count, rows = self.rows.len(), "inserted rows");
        true
    }

    /// Remove up to `count` rows starting at `at`
    ///
    /// Fails when `at` is not an existing row. Removing past the end simply
    /// removes what exists.
    pub fn remove_row(&mut self, at: usize, count: usize) -> bool {
        if at >= self.rows.len() {
            return false;
        }

        let end = at.saturating_add(count).min(self.rows.len());
        self.rows.drain(at..end);

        tracing::debug!(at, count, rows = self.rows.len(), "removed rows");
        true
    }

    // === Columns ===

    /// Insert `count` empty columns at `at`
    ///
    /// Positions past the last column append. When the document has no
    /// headers, blank headers are created first so the header row matches
    /// the data width. Fails when the result would exceed [`MAX_COLUMNS`].
    pub fn insert_column(&mut self, at: usize, count: usize) -> bool {
        let fits = self
            .column_count()
            .checked_add(count)
            .is_some_and(|width| width <= MAX_COLUMNS);
        if count > 0 && !fits {
            return false;
        }

        self.materialize_headers();

        insert_blanks(&mut self.headers, at, count);
        for row in &mut self.rows {
            insert_blanks(row, at, count);
        }

        tracing::debug!(at, count, columns = self.column_count(), "inserted columns");
        true
    }

    /// Remove up to `count` columns at `at`
    ///
    /// Stops quietly once `at` is past the last column.
    pub fn remove_column(&mut self, at: usize, count: usize) -> bool {
        for _ in 0..count {
            let mut removed = false;

            if at < self.headers.len() {
                self.headers.remove(at);
                removed = true;
            }
            for row in &mut self.rows {
                if at < row.len() {
                    row.remove(at);
                    removed = true;
                }
            }

            if !removed {
                break;
            }
        }

        tracing::debug!(at, count, columns = self.column_count(), "removed columns");
        true
    }

    /// Move column `from` so that it ends up at index `to`
    pub fn move_column(&mut self, from: usize, to: usize) -> bool {
        let width = self.column_count();
        if from == to || from >= width || to >= width {
            return false;
        }

        if !self.headers.is_empty() {
            move_cell(&mut self.headers, from, to);
        }
        for row in &mut self.rows {
            move_cell(row, from, to);
        }

        tracing::debug!(from, to, "moved column");
        true
    }

    // === CSV I/O ===

    /// Parse CSV text into a new document
    pub fn from_csv_str(content: &str) -> Result<Self, ParseError> {
        let (headers, rows) = parse_table(content)?;
        Ok(Self { headers, rows })
    }

    /// Replace the document with the contents of a CSV file
    ///
    /// On any error the current content is left as it was.
    pub fn load_from_csv(&mut self, path: impl AsRef<Path>) -> Result<(), CsvError> {
        let path = path.as_ref();

        validate_file_for_opening(path).map_err(|source| CsvError::Open {
            path: path.to_path_buf(),
            source,
        })?;

        let bytes = fs::read(path).map_err(|source| CsvError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let content = String::from_utf8(bytes).map_err(|source| CsvError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        let (headers, rows) = parse_table(&content).map_err(|source| CsvError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        self.headers = headers;
        self.rows = rows;

        tracing::debug!(
            path = %path.display(),
            rows = self.row_count(),
            columns = self.column_count(),
            "loaded CSV"
        );
        Ok(())
    }

    /// Write the document to a CSV file
    ///
    /// `column_order[i]` names the source column written at position `i`.
    /// The order is checked before the file is touched.
    pub fn save_to_csv(
        &self,
        path: impl AsRef<Path>,
        column_order: Option<&[usize]>,
    ) -> Result<(), CsvError> {
        let path = path.as_ref();
        let order = self.checked_order(column_order)?;

        let file = File::create(path).map_err(|source| CsvError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_records_to(file, order)
            .map_err(|source| CsvError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        tracing::debug!(
            path = %path.display(),
            rows = self.row_count(),
            reordered = order.is_some(),
            "saved CSV"
        );
        Ok(())
    }

    /// Serialize the document as CSV into any writer
    pub fn write_csv<W: Write>(
        &self,
        writer: W,
        column_order: Option<&[usize]>,
    ) -> Result<(), CsvError> {
        let order = self.checked_order(column_order)?;
        self.write_records_to(writer, order)?;
        Ok(())
    }

    /// Plain-text table for terminal display
    pub fn render_view(&self, max_rows: usize, max_column_width: usize) -> String {
        render_view(self, max_rows, max_column_width)
    }

    /// Validate a column order against the normalized width
    ///
    /// An empty order means "as stored".
    fn checked_order<'a>(
        &self,
        column_order: Option<&'a [usize]>,
    ) -> Result<Option<&'a [usize]>, CsvError> {
        let Some(order) = column_order.filter(|o| !o.is_empty()) else {
            return Ok(None);
        };

        let columns = max_width(&self.headers, &self.rows);
        if let Some(&index) = order.iter().find(|&&i| i >= columns) {
            return Err(CsvError::InvalidColumnOrder { index, columns });
        }
        Ok(Some(order))
    }

    fn write_records_to<W: Write>(&self, writer: W, order: Option<&[usize]>) -> csv::Result<()> {
        let width = max_width(&self.headers, &self.rows);

        // Nothing a CSV file could hold; an empty record would read back as
        // one empty field.
        if width == 0 {
            return write_records(writer, std::iter::empty::<Vec<&str>>());
        }

        let records = std::iter::once(project(&self.headers, width, order))
            .chain(self.rows.iter().map(|row| project(row, width, order)));
        write_records(writer, records)
    }

    /// Width needed to address `col`, or `None` past [`MAX_COLUMNS`]
    fn grown_width(&self, col: usize) -> Option<usize> {
        let width = self.column_count();
        if col < width {
            return Some(width);
        }
        col.checked_add(1).filter(|&w| w <= MAX_COLUMNS)
    }

    /// Give a header-less document blank headers matching the data width
    fn materialize_headers(&mut self) {
        if self.headers.is_empty() {
            self.headers = vec![String::new(); self.column_count()];
        }
    }

    /// Pad rows (and a non-empty header row) to at least `width` cells
    fn widen_to(&mut self, width: usize) {
        if !self.headers.is_empty() && self.headers.len() < width {
            self.headers.resize(width, String::new());
        }
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
    }
}

/// Insert `count` empty cells at `at`, clamped to the end
fn insert_blanks(cells: &mut Vec<String>, at: usize, count: usize) {
    let at = at.min(cells.len());
    cells.splice(at..at, (0..count).map(|_| String::new()));
}

/// Pad a record to `width` and apply a column order
fn project<'a>(cells: &'a [String], width: usize, order: Option<&[usize]>) -> Vec<&'a str> {
    let cells = padded(cells, width);
    match order {
        Some(order) => order.iter().map(|&i| cells[i]).collect(),
        None => cells,
    }
}

fn move_cell(cells: &mut Vec<String>, from: usize, to: usize) {
    if from >= cells.len() {
        return;
    }
    let cell = cells.remove(from);
    let to = to.min(cells.len());
    cells.insert(to, cell);
}
