//! CLI argument definitions for the motion table tools.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use motion_table::ReadOptions;

#[derive(Parser)]
#[command(
    name = "motion",
    version,
    about = "Inspect, rebase, and slice numeric motion CSV recordings",
    long_about = "Load comma-separated sensor recordings into a numeric table.\n\n\
                  The first column is treated as a timestamp and rebased to start at zero.\n\
                  Saved files omit the first data row and end every data line with '#'."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the shape, column names, and first rows of a recording.
    Inspect(InspectArgs),

    /// Rebase the timestamp column and write the table to a new file.
    Rebase(RebaseArgs),

    /// Show the X/Y/Z acceleration columns of a recording.
    Accel(AccelArgs),
}

/// Where to read a table from.
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// CSV file to load.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Number of metadata lines to skip before the header.
    #[arg(long = "skip", value_name = "N", default_value_t = 0)]
    pub skip: usize,

    /// Comma-separated column names; when given, no header line is read.
    #[arg(long = "columns", value_name = "NAMES", value_delimiter = ',')]
    pub columns: Option<Vec<String>>,
}

impl SourceArgs {
    pub fn read_options(&self) -> ReadOptions {
        let options = ReadOptions::new(self.skip);
        match &self.columns {
            Some(names) => options.with_column_names(names.iter().map(|n| n.trim().to_string())),
            None => options,
        }
    }
}

#[derive(Args)]
pub struct InspectArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of rows to print.
    #[arg(long = "head", value_name = "N", default_value_t = 10)]
    pub head: usize,

    /// Print the whole table as JSON instead of a summary.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct RebaseArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// File to write.
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct AccelArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Number of rows to print.
    #[arg(long = "head", value_name = "N", default_value_t = 10)]
    pub head: usize,
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
