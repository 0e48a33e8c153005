//! Error types for roster building.

use thiserror::Error;

/// Structural failures that abort a roster build.
///
/// Bad contact cells and unknown columns are not errors; they are skipped
/// during row interpretation.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum RosterError {
    /// Input had no rows at all, so there is no header to decode.
    #[error("input has no header row")]
    MissingHeader,

    /// A data row does not have one cell per header column.
    #[error("row {row} has {found} cells, header has {expected}")]
    RowWidth {
        /// 1-based position in the input (the header is row 1).
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Result type for roster building.
pub type Result<T> = std::result::Result<T, RosterError>;
