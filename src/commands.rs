//! Command execution for the CLI
//!
//! Each command builds a short-lived `TableDocument`, applies one operation
//! and, for edits, writes the file back. The returned string is the report
//! shown to the user on success.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::cli::Command;
use crate::config::Config;
use crate::csv::{CsvError, TableDocument};

/// Why a command did not complete
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Invalid row position {0}")]
    InvalidRow(i64),

    #[error("Invalid column position {0}")]
    InvalidColumn(i64),

    #[error("Invalid cell position ({row}, {col})")]
    InvalidCell { row: i64, col: i64 },

    #[error("Error {action} file '{}': {}", .file.display(), .source.user_message())]
    File {
        action: &'static str,
        file: PathBuf,
        source: CsvError,
    },

    #[error("{0}")]
    Config(String),
}

impl CommandError {
    fn on_file(action: &'static str, file: &Path) -> impl FnOnce(CsvError) -> Self {
        let file = file.to_path_buf();
        move |source| CommandError::File {
            action,
            file,
            source,
        }
    }
}

/// Run a command, returning its success report
///
/// `config_file` is where `config` reads and writes settings; `None` when no
/// config directory could be resolved.
pub fn execute(
    command: &Command,
    config: &Config,
    config_file: Option<&Path>,
) -> Result<String, CommandError> {
    let _span = tracing::debug_span!("command", file = ?command.file()).entered();
    tracing::debug!(?command, "executing command");

    match command {
        Command::View { file, rows, width } => view_file(
            file,
            rows.unwrap_or(config.view.max_rows),
            width.unwrap_or(config.view.max_column_width),
        ),

        Command::New { file } => create_new_file(file, &config.default_headers),

        Command::Edit {
            file,
            row,
            col,
            value,
        } => load_and_edit(file, |doc| {
            let (r, c) = cell_index(*row, *col)?;
            if !doc.set_cell(r, c, value.as_str()) {
                return Err(CommandError::InvalidCell { row: *row, col: *col });
            }
            Ok(format!("Set cell ({row}, {col}) = '{value}'"))
        }),

        Command::InsertRow { file, row } => load_and_edit(file, |doc| {
            let r = index(*row).ok_or(CommandError::InvalidRow(*row))?;
            if !doc.insert_row(r, 1) {
                return Err(CommandError::InvalidRow(*row));
            }
            Ok(format!("Inserted row at position {row}"))
        }),

        Command::DeleteRow { file, row } => load_and_edit(file, |doc| {
            let r = index(*row).ok_or(CommandError::InvalidRow(*row))?;
            if !doc.remove_row(r, 1) {
                return Err(CommandError::InvalidRow(*row));
            }
            Ok(format!("Deleted row at position {row}"))
        }),

        Command::InsertCol { file, col, header } => load_and_edit(file, |doc| {
            let c = index(*col).ok_or(CommandError::InvalidColumn(*col))?;
            if !doc.insert_column(c, 1) {
                return Err(CommandError::InvalidColumn(*col));
            }
            match header.as_deref().filter(|h| !h.is_empty()) {
                Some(header) => {
                    // Insertion past the end appends, so label the column
                    // where it actually landed.
                    let landed = c.min(doc.column_count() - 1);
                    doc.set_header(landed, header);
                    Ok(format!(
                        "Inserted column at position {col} with header '{header}'"
                    ))
                }
                None => Ok(format!("Inserted column at position {col}")),
            }
        }),

        Command::DeleteCol { file, col } => load_and_edit(file, |doc| {
            let c = index(*col).ok_or(CommandError::InvalidColumn(*col))?;
            if !doc.remove_column(c, 1) {
                return Err(CommandError::InvalidColumn(*col));
            }
            Ok(format!("Deleted column at position {col}"))
        }),

        Command::MoveCol { file, from, to } => move_column_in_file(file, *from, *to),

        Command::Header { file, col, header } => load_and_edit(file, |doc| {
            let c = index(*col).ok_or(CommandError::InvalidColumn(*col))?;
            if !doc.set_header(c, header.as_str()) {
                return Err(CommandError::InvalidColumn(*col));
            }
            Ok(format!("Set header for column {col} = '{header}'"))
        }),

        Command::Clear { file, row, col } => load_and_edit(file, |doc| {
            let (r, c) = cell_index(*row, *col)?;
            if !doc.clear_cell(r, c) {
                return Err(CommandError::InvalidCell { row: *row, col: *col });
            }
            Ok(format!("Cleared cell ({row}, {col})"))
        }),

        Command::Reorder { file, order } => reorder_file(file, order),

        Command::Config { init: true } => init_config(config, config_file),
        Command::Config { init: false } => show_config(config, config_file),
    }
}

fn load(file: &Path, action: &'static str) -> Result<TableDocument, CommandError> {
    let mut doc = TableDocument::new();
    doc.load_from_csv(file)
        .map_err(CommandError::on_file(action, file))?;
    Ok(doc)
}

/// Save an edited document and append the "updated" line to `report`
fn save_edited(
    doc: &TableDocument,
    file: &Path,
    column_order: Option<&[usize]>,
    report: String,
) -> Result<String, CommandError> {
    doc.save_to_csv(file, column_order)
        .map_err(CommandError::on_file("processing", file))?;

    Ok(format!(
        "{report}\nFile '{}' updated successfully",
        file.display()
    ))
}

/// Load a CSV file, apply one edit, and save it back
///
/// The file is only rewritten when the edit succeeds.
fn load_and_edit<F>(file: &Path, edit: F) -> Result<String, CommandError>
where
    F: FnOnce(&mut TableDocument) -> Result<String, CommandError>,
{
    let mut doc = load(file, "processing")?;
    let report = edit(&mut doc)?;
    save_edited(&doc, file, None, report)
}

fn view_file(file: &Path, max_rows: usize, max_column_width: usize) -> Result<String, CommandError> {
    let doc = load(file, "viewing")?;

    Ok(format!(
        "File: {}\n{}",
        file.display(),
        doc.render_view(max_rows, max_column_width)
    ))
}

fn create_new_file(file: &Path, headers: &[String]) -> Result<String, CommandError> {
    let doc = TableDocument::with_headers(headers);
    doc.save_to_csv(file, None)
        .map_err(CommandError::on_file("creating", file))?;

    Ok(format!(
        "Created new file '{}' with default headers\nHeaders: {}",
        file.display(),
        headers.join(", ")
    ))
}

/// Move a column, leaving the file alone when it is already in place
fn move_column_in_file(file: &Path, from: i64, to: i64) -> Result<String, CommandError> {
    let f = index(from).ok_or(CommandError::InvalidColumn(from))?;
    let t = index(to).ok_or(CommandError::InvalidColumn(to))?;

    let mut doc = load(file, "processing")?;
    let columns = doc.column_count();
    if f >= columns {
        return Err(CommandError::InvalidColumn(from));
    }
    if t >= columns {
        return Err(CommandError::InvalidColumn(to));
    }

    if f == t {
        return Ok(format!("Column {from} is already at position {to}"));
    }
    if !doc.move_column(f, t) {
        return Err(CommandError::InvalidColumn(from));
    }
    save_edited(&doc, file, None, format!("Moved column {from} to position {to}"))
}

fn reorder_file(file: &Path, order: &[usize]) -> Result<String, CommandError> {
    let doc = load(file, "processing")?;

    let shown = order
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(",");
    save_edited(&doc, file, Some(order), format!("Reordered columns as {shown}"))
}

fn show_config(config: &Config, config_file: Option<&Path>) -> Result<String, CommandError> {
    let config_line = match config_file {
        Some(path) if path.exists() => path.display().to_string(),
        Some(path) => format!("{} (not created, using defaults)", path.display()),
        None => "(no config directory)".to_string(),
    };
    let log_line = match crate::config_paths::latest_log_file() {
        Some(path) => path.display().to_string(),
        None => "(none yet)".to_string(),
    };
    let yaml = config.to_yaml().map_err(CommandError::Config)?;

    Ok(format!(
        "Config file: {config_line}\nLog file: {log_line}\n\n{}",
        yaml.trim_end()
    ))
}

fn init_config(config: &Config, config_file: Option<&Path>) -> Result<String, CommandError> {
    let path = config_file
        .ok_or_else(|| CommandError::Config("No config directory available".to_string()))?;
    if path.exists() {
        return Err(CommandError::Config(format!(
            "Config file '{}' already exists",
            path.display()
        )));
    }

    config.save_to(path).map_err(CommandError::Config)?;
    Ok(format!("Wrote config to '{}'", path.display()))
}

/// Convert a user-supplied position, rejecting negatives
fn index(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}

fn cell_index(row: i64, col: i64) -> Result<(usize, usize), CommandError> {
    match (index(row), index(col)) {
        (Some(r), Some(c)) => Ok((r, c)),
        _ => Err(CommandError::InvalidCell { row, col }),
    }
}
