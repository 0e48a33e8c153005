//! Roster processing pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: Read the CSV export into raw rows
//! 2. **Build**: Decode the header, interpret and merge every row
//! 3. **Output**: Write the roster as pretty-printed JSON
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{trace, warn};

use roster_core::{Roster, RosterBuild, build_roster};
use roster_ingest::{CsvTable, read_roster_csv, read_roster_str};
use roster_model::RosterOptions;

use crate::logging::redact_value;

/// Path value that selects stdin or stdout.
pub const STDIO_PATH: &str = "-";

// ============================================================================
// Stage 1: Ingest
// ============================================================================

/// Read the roster export from a file, or from stdin when `input` is `-`.
pub fn ingest(input: &Path) -> Result<CsvTable> {
    if is_stdio(input) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("read roster from stdin")?;
        return read_roster_str(&content).context("parse roster from stdin");
    }
    read_roster_csv(input).with_context(|| format!("read roster {}", input.display()))
}

// ============================================================================
// Stage 2: Build
// ============================================================================

/// Decode, interpret, and merge all rows of the table.
pub fn build(table: CsvTable, options: &RosterOptions) -> Result<RosterBuild> {
    let build = build_roster(table.into_rows(), options).context("build roster")?;
    for (column, name) in build.header.ignored() {
        warn!(column, name, "header column ignored");
    }
    for person in build.roster.records() {
        trace!(
            eid = redact_value(&person.id),
            fullname = redact_value(&person.fullname),
            classes = person.classes.len(),
            addresses = person.addresses.len(),
            "roster record"
        );
    }
    Ok(build)
}

// ============================================================================
// Stage 3: Output
// ============================================================================

/// Where the serialized roster goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(PathBuf),
}

impl OutputTarget {
    /// Resolve the output target from CLI arguments.
    ///
    /// Without an explicit output, file input writes next to itself with a
    /// `.json` extension and stdin input writes to stdout.
    pub fn resolve(input: &Path, output: Option<&Path>) -> Self {
        match output {
            Some(path) if is_stdio(path) => Self::Stdout,
            Some(path) => Self::File(path.to_path_buf()),
            None if is_stdio(input) => Self::Stdout,
            None => Self::File(input.with_extension("json")),
        }
    }
}

/// Serialize the roster as JSON with 2-space indentation.
pub fn render_json(roster: &Roster) -> Result<String> {
    let mut json = serde_json::to_string_pretty(roster).context("serialize roster")?;
    json.push('\n');
    Ok(json)
}

/// Write the roster, returning the file path when one was written.
pub fn output(roster: &Roster, target: &OutputTarget) -> Result<Option<PathBuf>> {
    let json = render_json(roster)?;
    match target {
        OutputTarget::Stdout => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(json.as_bytes())
                .and_then(|()| stdout.flush())
                .context("write roster to stdout")?;
            Ok(None)
        }
        OutputTarget::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir {}", parent.display()))?;
            }
            fs::write(path, json).with_context(|| format!("write roster {}", path.display()))?;
            Ok(Some(path.clone()))
        }
    }
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}
