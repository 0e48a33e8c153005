//! Error types for roster ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a roster export.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, limit is {max_size}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// File uses an encoding other than UTF-8.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to tokenize CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// A record has a different number of cells than the header.
    #[error("{path}: line {line} has {found} cells, header has {expected}")]
    UnequalRowLength {
        path: PathBuf,
        line: u64,
        expected: u64,
        found: u64,
    },

    /// CSV file is empty or has no header row.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/input.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/input.csv");
    }

    #[test]
    fn test_unequal_row_display() {
        let err = IngestError::UnequalRowLength {
            path: PathBuf::from("input.csv"),
            line: 3,
            expected: 5,
            found: 4,
        };
        assert_eq!(err.to_string(), "input.csv: line 3 has 4 cells, header has 5");
    }
}
