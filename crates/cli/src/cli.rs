//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use contracts::{FloatKind, TimeUnit};
use std::path::PathBuf;

/// Sensor Merge - align an IMU log with a ground-truth log
#[derive(Parser, Debug)]
#[command(
    name = "sensor-merge",
    author,
    version,
    about = "Merge two time-stamped sensor logs into one row-aligned table",
    long_about = "Reads two delimited sensor logs (for example IMU and ground truth), \
                  detects their header blocks, estimates their sampling frequencies and \n\
                  merges them row by row by repeating the slower stream."
)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, env = "SENSOR_MERGE_VERBOSE")]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log output format
    #[arg(
        long,
        value_enum,
        default_value = "pretty",
        global = true,
        env = "SENSOR_MERGE_LOG_FORMAT"
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ingest both streams, merge them and write the result
    Merge(MergeArgs),

    /// Ingest one stream and report its shape and frequency
    Inspect(InspectArgs),

    /// Validate configuration file without running
    Validate(ValidateArgs),
}

/// Arguments for the `merge` command
#[derive(Parser, Debug, Clone)]
pub struct MergeArgs {
    /// Path to configuration file (TOML or JSON)
    #[arg(short, long, env = "SENSOR_MERGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Longer (higher rate) input stream
    #[arg(long)]
    pub left: Option<PathBuf>,

    /// Shorter input stream, repeated to match the left one
    #[arg(long)]
    pub right: Option<PathBuf>,

    /// Output file for the merged table
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Name of the left stream (used for generated labels)
    #[arg(long, default_value = "left")]
    pub left_name: String,

    /// Name of the right stream (used for generated labels)
    #[arg(long, default_value = "right")]
    pub right_name: String,

    /// Field separator of the left stream
    #[arg(long)]
    pub left_sep: Option<char>,

    /// Field separator of the right stream
    #[arg(long)]
    pub right_sep: Option<char>,

    /// Field separator of the output file
    #[arg(long)]
    pub out_sep: Option<char>,

    /// Timestamp unit of both streams (s, ms, us, ns)
    #[arg(long)]
    pub unit: Option<TimeUnit>,

    /// Numeric width of both streams (float32, float64)
    #[arg(long)]
    pub numeric_type: Option<FloatKind>,

    /// Digits after the decimal point in the output file
    #[arg(long)]
    pub precision: Option<usize>,

    /// Parse column labels from line 0 of both inputs
    #[arg(long)]
    pub header: bool,

    /// Ingest, estimate and merge, but do not write any sink
    #[arg(long)]
    pub dry_run: bool,

    /// Print the run summary as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `inspect` command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// Input stream to inspect
    pub path: PathBuf,

    /// Field separator
    #[arg(long, default_value_t = contracts::default_separator())]
    pub sep: char,

    /// Timestamp unit (s, ms, us, ns)
    #[arg(long, default_value = "s")]
    pub unit: TimeUnit,

    /// Column holding timestamps
    #[arg(long, default_value = "0")]
    pub timestamp_column: usize,

    /// Numeric width (float32, float64)
    #[arg(long, default_value = "float64")]
    pub numeric_type: FloatKind,

    /// Parse column labels from line 0
    #[arg(long)]
    pub header: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `validate` command
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, default_value = "merge.toml", env = "SENSOR_MERGE_CONFIG")]
    pub config: PathBuf,

    /// Output validation result as JSON
    #[arg(long)]
    pub json: bool,
}

/// Log output format
#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum LogFormat {
    /// JSON structured logging
    Json,
    /// Human-readable pretty format
    #[default]
    Pretty,
    /// Compact single-line format
    Compact,
}

impl From<LogFormat> for observability::LogFormat {
    fn from(format: LogFormat) -> Self {
        match format {
            LogFormat::Json => observability::LogFormat::Json,
            LogFormat::Pretty => observability::LogFormat::Pretty,
            LogFormat::Compact => observability::LogFormat::Compact,
        }
    }
}
