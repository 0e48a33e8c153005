//! Header decoding.
//!
//! Each header cell encodes a field type followed by free-form tags, e.g.
//! `"email Responsável, Pai"` decodes to field `email` with tags
//! `["Responsável", "Pai"]`. Commas are dropped before splitting on
//! whitespace. Cells whose first token is outside the vocabulary decode to
//! an inert column.

use roster_model::{Column, FieldType};
use tracing::debug;

/// Decoded header row. Computed once per run and shared by every row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Header {
    columns: Vec<Column>,
}

impl Header {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Positions and raw names of columns no row step will act on.
    pub fn ignored(&self) -> impl Iterator<Item = (usize, &str)> {
        self.columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.field.is_ignored())
            .map(|(idx, column)| (idx, column.name.as_str()))
    }

    /// Whether any column carries the given field type.
    pub fn has_field(&self, field: FieldType) -> bool {
        self.columns.iter().any(|column| column.field == field)
    }
}

/// Decode a single header cell into a column.
pub fn decode_header_cell(cell: &str) -> Column {
    let stripped: String = cell.chars().filter(|c| *c != ',').collect();
    let mut tokens = stripped.split_whitespace().map(str::to_string);
    let name = tokens.next().unwrap_or_default();
    Column::new(name, tokens.collect())
}

/// Decode the header row, one column per cell.
pub fn decode_header<S: AsRef<str>>(cells: &[S]) -> Header {
    let columns: Vec<Column> = cells
        .iter()
        .map(|cell| decode_header_cell(cell.as_ref()))
        .collect();
    let header = Header::new(columns);
    for (idx, name) in header.ignored() {
        debug!(column = idx, name, "ignoring unrecognized header column");
    }
    header
}
