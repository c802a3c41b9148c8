//! Plain-text table rendering
//!
//! Renders a document for terminal output with:
//! - Header line and a dash rule underneath
//! - Cells truncated with "..." past the column width limit
//! - A trailer for hidden rows and a totals line

use super::model::TableDocument;

/// Shown instead of a table when the document holds nothing
pub const EMPTY_VIEW: &str = "No data loaded.";

const ELLIPSIS: &str = "...";
const SEPARATOR: &str = " | ";

/// Truncate text with "..." if longer than `max_chars`
///
/// Limits too small to fit any text before the ellipsis cut hard instead.
pub fn truncate_text(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else if max_chars <= ELLIPSIS.len() {
        s.chars().take(max_chars).collect()
    } else {
        let mut result: String = s.chars().take(max_chars - ELLIPSIS.len()).collect();
        result.push_str(ELLIPSIS);
        result
    }
}

/// Render the first `max_rows` rows of a document as an aligned table
pub fn render_view(doc: &TableDocument, max_rows: usize, max_column_width: usize) -> String {
    if doc.is_empty() {
        return EMPTY_VIEW.to_string();
    }

    let columns = doc.column_count();
    let shown_rows = max_rows.min(doc.row_count());

    let headers: Vec<String> = (0..columns)
        .map(|c| truncate_text(&doc.get_header(c), max_column_width))
        .collect();

    let rows: Vec<Vec<String>> = (0..shown_rows)
        .map(|r| {
            (0..columns)
                .map(|c| truncate_text(doc.get_cell(r, c), max_column_width))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..columns)
        .map(|c| {
            let header = headers[c].chars().count();
            let widest_cell = rows
                .iter()
                .map(|row| row[c].chars().count())
                .max()
                .unwrap_or(0);
            header.max(widest_cell).min(max_column_width)
        })
        .collect();

    let mut lines = Vec::with_capacity(shown_rows + 4);

    let header_line = format_line(&headers, &widths);
    let rule = "-".repeat(header_line.chars().count());
    lines.push(header_line);
    lines.push(rule);

    for row in &rows {
        lines.push(format_line(row, &widths));
    }

    if doc.row_count() > max_rows {
        lines.push(format!("... ({} more rows)", doc.row_count() - max_rows));
    }

    lines.push(format!(
        "\nTotal: {} rows, {} columns",
        doc.row_count(),
        columns
    ));

    lines.join("\n")
}

/// Left-align each cell to its column width and join with separators
fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}
