//! Command-line argument parsing
//!
//! Every subcommand works on a file directly. Editing commands load the
//! file, apply one operation and write it back; nothing is kept between
//! invocations.
//!
//! Positions are 0-based and parsed as signed numbers so that a negative
//! position is reported as invalid rather than rejected as a parse error.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

/// Edit CSV files from the command line
#[derive(Parser, Debug)]
#[command(
    name = "csvpad",
    version,
    about = "Edit CSV files from the command line",
    after_help = "Examples:
  csvpad view data.csv                        # View CSV file
  csvpad edit data.csv 0 1 \"New Value\"        # Edit cell and save
  csvpad insert-row data.csv 5                # Insert row and save
  csvpad delete-row data.csv 3                # Delete row and save
  csvpad insert-col data.csv 2 \"New Column\"   # Insert column and save
  csvpad delete-col data.csv 4                # Delete column and save
  csvpad move-col data.csv 4 0                # Move column and save
  csvpad header data.csv 1 \"Updated Header\"   # Set header and save
  csvpad clear data.csv 2 3                   # Clear cell and save
  csvpad reorder data.csv 2,0,1               # Rewrite with columns reordered
  csvpad new output.csv                       # Create new sheet
  csvpad config --init                        # Write default config file"
)]
pub struct CliArgs {
    /// Use this config file instead of the default location
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// View CSV file
    View {
        /// CSV file to view
        file: PathBuf,
        /// Maximum rows to display (default from config, 20)
        #[arg(long)]
        rows: Option<usize>,
        /// Maximum column width (default from config, 20)
        #[arg(long)]
        width: Option<usize>,
    },

    /// Edit cell value and save file
    #[command(allow_negative_numbers = true)]
    Edit {
        /// CSV file to edit
        file: PathBuf,
        /// Row index (0-based)
        row: i64,
        /// Column index (0-based)
        col: i64,
        /// New cell value
        value: String,
    },

    /// Insert new row and save file
    #[command(allow_negative_numbers = true)]
    InsertRow {
        /// CSV file to modify
        file: PathBuf,
        /// Row position to insert at (0-based)
        row: i64,
    },

    /// Delete row and save file
    #[command(allow_negative_numbers = true)]
    DeleteRow {
        /// CSV file to modify
        file: PathBuf,
        /// Row index to delete (0-based)
        row: i64,
    },

    /// Insert new column and save file
    #[command(allow_negative_numbers = true)]
    InsertCol {
        /// CSV file to modify
        file: PathBuf,
        /// Column position to insert at (0-based)
        col: i64,
        /// Optional header for new column
        header: Option<String>,
    },

    /// Delete column and save file
    #[command(allow_negative_numbers = true)]
    DeleteCol {
        /// CSV file to modify
        file: PathBuf,
        /// Column index to delete (0-based)
        col: i64,
    },

    /// Move a column to a new position and save file
    #[command(allow_negative_numbers = true)]
    MoveCol {
        /// CSV file to modify
        file: PathBuf,
        /// Column index to move (0-based)
        from: i64,
        /// Destination column index (0-based)
        to: i64,
    },

    /// Set column header and save file
    #[command(allow_negative_numbers = true)]
    Header {
        /// CSV file to modify
        file: PathBuf,
        /// Column index (0-based)
        col: i64,
        /// New header text
        header: String,
    },

    /// Clear cell and save file
    #[command(allow_negative_numbers = true)]
    Clear {
        /// CSV file to modify
        file: PathBuf,
        /// Row index (0-based)
        row: i64,
        /// Column index (0-based)
        col: i64,
    },

    /// Rewrite file with columns in the given order
    Reorder {
        /// CSV file to modify
        file: PathBuf,
        /// Comma-separated source column indices, e.g. 2,0,1
        #[arg(value_delimiter = ',', required = true)]
        order: Vec<usize>,
    },

    /// Create new CSV file with default headers
    New {
        /// CSV file to create
        file: PathBuf,
    },

    /// Show the config file, latest log file and effective settings
    Config {
        /// Write the effective settings to the config file if it is missing
        #[arg(long)]
        init: bool,
    },
}

impl Command {
    /// CSV file the command operates on, if any
    pub fn file(&self) -> Option<&Path> {
        let file = match self {
            Command::View { file, .. }
            | Command::Edit { file, .. }
            | Command::InsertRow { file, .. }
            | Command::DeleteRow { file, .. }
            | Command::InsertCol { file, .. }
            | Command::DeleteCol { file, .. }
            | Command::MoveCol { file, .. }
            | Command::Header { file, .. }
            | Command::Clear { file, .. }
            | Command::Reorder { file, .. }
            | Command::New { file } => file,
            Command::Config { .. } => return None,
        };
        Some(file.as_path())
    }
}
