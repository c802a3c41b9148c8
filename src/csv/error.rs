//! Errors raised by CSV load/save

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

use super::parser::ParseError;
use crate::util::FileOpenError;

/// Failure while moving a table between disk and memory
///
/// Structural edits never produce these; they report bounds problems by
/// returning `false` instead.
#[derive(Error, Debug)]
pub enum CsvError {
    /// The file failed pre-flight validation (missing, directory, too large)
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: FileOpenError,
    },

    /// Reading or creating the file failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not valid UTF-8
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: FromUtf8Error,
    },

    /// File content is not valid CSV
    #[error("{}: {source}", path.display())]
    Parse { path: PathBuf, source: ParseError },

    /// Serializing records to a file failed
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: csv::Error },

    /// Serializing records to an arbitrary writer failed
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    /// A column order referenced a column that does not exist
    #[error("column order index {index} is out of range ({columns} columns)")]
    InvalidColumnOrder { index: usize, columns: usize },
}

impl CsvError {
    /// Message for end users
    ///
    /// Open failures use the friendlier wording from [`FileOpenError`]; the
    /// rest fall back to `Display`.
    pub fn user_message(&self) -> String {
        match self {
            CsvError::Open { path, source } => source.user_message(&path.display().to_string()),
            other => other.to_string(),
        }
    }
}
