use std::path::PathBuf;

use roster_core::RosterStats;

#[derive(Debug)]
pub struct ConvertResult {
    pub input: PathBuf,
    /// Written roster file; `None` for stdout or dry runs.
    pub output: Option<PathBuf>,
    pub stats: RosterStats,
    pub dry_run: bool,
    /// Whether the JSON went to stdout, which leaves no room for the summary.
    pub to_stdout: bool,
}
