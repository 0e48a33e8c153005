//! CLI argument definitions for the roster normalizer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "roster",
    version,
    about = "Roster normalizer - Convert a CSV roster export into deduplicated JSON records",
    long_about = "Convert a CSV roster export into one JSON record per person.\n\n\
                  Header cells name a field type followed by tags (e.g. \"phone Work\").\n\
                  Rows sharing an eid are merged; phones are canonicalized to E.164\n\
                  digits and invalid contacts are dropped."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module path in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow names, ids, and contact values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a roster CSV export into a JSON roster.
    Convert(ConvertArgs),

    /// Show how each header cell is decoded.
    Headers(HeadersArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Roster CSV export (`-` reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output JSON path (default: <INPUT> with a .json extension, `-` for stdout).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Build and report without writing the roster.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Merge rows with an empty eid into a single record.
    ///
    /// By default each row without an eid becomes its own record.
    #[arg(long = "merge-empty-ids")]
    pub merge_empty_ids: bool,
}

#[derive(Parser)]
pub struct HeadersArgs {
    /// Roster CSV export (`-` reads stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
