//! Utility modules

pub mod file_validation;

pub use file_validation::{validate_file_for_opening, FileOpenError};
