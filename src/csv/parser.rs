//! CSV parsing and writing using the csv crate
//!
//! RFC 4180 compliant reading with support for quoted fields, escaped
//! quotes and embedded newlines. Ragged records are widened, never
//! truncated.

use std::io::{Cursor, Write};

/// UTF-8 byte order mark as it appears after decoding
const BOM: char = '\u{feff}';

/// Error type for CSV parsing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<u64>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Strip a leading byte order mark, if present
fn strip_bom(content: &str) -> &str {
    content.strip_prefix(BOM).unwrap_or(content)
}

/// Parse CSV content into raw records
///
/// Records keep whatever field count the source gave them. A blank line is
/// an empty record; the csv reader skips those, so they are recovered from
/// the bytes between consecutive records.
fn parse_records(content: &str) -> Result<Vec<Vec<String>>, ParseError> {
    let bytes = content.as_bytes();
    let cursor = Cursor::new(bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut records = Vec::new();
    let mut seen_record = false;

    for (record_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                let start = record.position().map_or(0, |p| p.byte() as usize);
                let blanks = blank_lines_before(bytes, start, !seen_record);
                records.extend(std::iter::repeat_with(Vec::new).take(blanks));

                records.push(record.iter().map(str::to_string).collect());
                seen_record = true;
            }
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(record_num as u64 + 1);
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line),
                });
            }
        }
    }

    // Line breaks after the last record, less its own terminator
    let trailing = line_breaks(trailing_break_run(bytes, bytes.len()));
    let trailing = if seen_record {
        trailing.saturating_sub(1)
    } else {
        trailing
    };
    records.extend(std::iter::repeat_with(Vec::new).take(trailing));

    Ok(records)
}

fn is_line_break(b: u8) -> bool {
    b == b'\n' || b == b'\r'
}

/// Count line breaks, with CRLF counting once
fn line_breaks(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .enumerate()
        .filter(|&(i, &b)| b == b'\n' || (b == b'\r' && bytes.get(i + 1) != Some(&b'\n')))
        .count()
}

/// The run of line-break bytes ending at `end`
fn trailing_break_run(bytes: &[u8], end: usize) -> &[u8] {
    let run_start = bytes[..end]
        .iter()
        .rposition(|&b| !is_line_break(b))
        .map_or(0, |i| i + 1);
    &bytes[run_start..end]
}

/// Blank lines between the previous record and the one read from `from`
///
/// `from` is where the reader resumed, somewhere inside the break run that
/// precedes the record. A record never ends in a raw line break (quoted
/// fields end with `"`), so the whole run sits between the two records and
/// its first break terminates the previous one.
fn blank_lines_before(bytes: &[u8], from: usize, first: bool) -> usize {
    let from = from.min(bytes.len());
    let content_start = from
        + bytes[from..]
            .iter()
            .take_while(|&&b| is_line_break(b))
            .count();

    let breaks = line_breaks(trailing_break_run(bytes, content_start));
    if first {
        breaks
    } else {
        breaks.saturating_sub(1)
    }
}

/// Parse CSV content into a header row and data rows
///
/// The first record becomes the header row, even when it is blank. Empty
/// input yields an empty header row and no data. Everything is right-padded
/// to the widest record.
pub fn parse_table(content: &str) -> Result<(Vec<String>, Vec<Vec<String>>), ParseError> {
    let mut records = parse_records(strip_bom(content))?.into_iter();

    let mut headers = records.next().unwrap_or_default();
    let mut rows: Vec<Vec<String>> = records.collect();

    let width = max_width(&headers, &rows);
    pad_to_width(&mut headers, width);
    for row in &mut rows {
        pad_to_width(row, width);
    }

    Ok((headers, rows))
}

/// Widest record across the header row and all data rows
pub fn max_width(headers: &[String], rows: &[Vec<String>]) -> usize {
    rows.iter()
        .map(Vec::len)
        .chain(std::iter::once(headers.len()))
        .max()
        .unwrap_or(0)
}

/// Right-pad a record with empty strings
pub fn pad_to_width(cells: &mut Vec<String>, width: usize) {
    if cells.len() < width {
        cells.resize(width, String::new());
    }
}

/// Borrow a record as `width` fields, padding with empty strings
pub fn padded(cells: &[String], width: usize) -> Vec<&str> {
    cells
        .iter()
        .map(String::as_str)
        .chain(std::iter::repeat(""))
        .take(width)
        .collect()
}

/// Write records as CSV
///
/// Fields are quoted only when they contain a comma, a quote or a line
/// break. Records end with CRLF. No byte order mark is written.
pub fn write_records<W, R, S>(writer: W, records: impl IntoIterator<Item = R>) -> csv::Result<()>
where
    W: Write,
    R: IntoIterator<Item = S>,
    S: AsRef<[u8]>,
{
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    for record in records {
        writer.write_record(record)?;
    }

    writer.flush()?;
    Ok(())
}
