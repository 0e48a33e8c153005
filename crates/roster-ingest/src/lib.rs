//! Roster export ingestion.
//!
//! Reads a CSV roster export into raw text rows for the normalization engine.
//! The first row is the header; every row must have the header's width.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use roster_ingest::read_roster_csv;
//!
//! let table = read_roster_csv(Path::new("input.csv"))?;
//! println!("{} columns", table.width());
//! ```

mod error;
mod reader;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{
    MAX_ROSTER_FILE_SIZE, check_file_size, check_file_size_with_limit, read_roster_csv,
    read_roster_str, validate_encoding,
};
pub use table::CsvTable;
