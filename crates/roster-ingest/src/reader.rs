//! CSV file reading into raw rows.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};
use crate::table::CsvTable;

/// Maximum file size for roster loading (500 MB default).
pub const MAX_ROSTER_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// Label used in errors for input that did not come from a file.
const IN_MEMORY_SOURCE: &str = "<input>";

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_ROSTER_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Read a roster export from disk.
///
/// Every record must have the same number of cells as the header; the first
/// record is returned as the header row.
pub fn read_roster_csv(path: &Path) -> Result<CsvTable> {
    check_file_size(path)?;
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let table = parse_rows(BufReader::new(file), path)?;
    debug!(
        path = %path.display(),
        rows = table.rows().len(),
        columns = table.width(),
        "read roster csv"
    );
    Ok(table)
}

/// Read a roster export already held in memory.
pub fn read_roster_str(content: &str) -> Result<CsvTable> {
    parse_rows(content.as_bytes(), Path::new(IN_MEMORY_SOURCE))
}

fn parse_rows<R: Read>(input: R, path: &Path) -> Result<CsvTable> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(false)
        .from_reader(input);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| csv_error(path, &e))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    let Some(first) = rows.first_mut() else {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    };
    // Skip BOM if present
    if let Some(cell) = first.first_mut()
        && let Some(stripped) = cell.strip_prefix('\u{feff}')
    {
        *cell = stripped.to_string();
    }

    Ok(CsvTable::new(rows))
}

fn csv_error(path: &Path, err: &csv::Error) -> IngestError {
    let path: PathBuf = path.to_path_buf();
    match err.kind() {
        csv::ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => IngestError::UnequalRowLength {
            path,
            line: pos.as_ref().map_or(0, csv::Position::line),
            expected: *expected_len,
            found: *len,
        },
        _ => IngestError::CsvParse {
            path,
            message: err.to_string(),
        },
    }
}
