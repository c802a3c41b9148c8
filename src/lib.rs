//! csvpad - CSV table editing
//!
//! This crate provides the table document model (load, edit, save, render)
//! and the command-line front end built on top of it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod csv;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use commands::{execute, CommandError};
pub use config::Config;
pub use crate::csv::{CsvError, TableDocument};
