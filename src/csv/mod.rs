//! CSV table editing core
//!
//! Loads a CSV file into a header row plus data rows, applies structural
//! edits, and writes the grid back out.
//!
//! # Architecture
//!
//! Front ends (the CLI in `commands`) hold a `TableDocument` and re-query it
//! after every mutation. The document never calls back into them.
//!
//! ```text
//! TableDocument
//! ├── headers: Vec<String>
//! ├── rows: Vec<Vec<String>>   (each exactly column_count() wide)
//! ├── parser  (BOM stripping, RFC 4180 read, CRLF write)
//! └── render  (plain-text view)
//! ```

mod error;
mod model;
mod parser;
pub mod render;

pub use error::CsvError;
pub use model::{TableDocument, MAX_COLUMNS};
pub use parser::ParseError;
