//! CLI argument definitions for the insurance ETL pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "insurance-etl",
    version,
    about = "Insurance ETL - validate and partition raw insurance tables",
    long_about = "Load raw insurance CSV extracts, clean and normalize them, and split each\n\
                  table into transformed (valid) and rejected (with reasons) outputs."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Pipeline configuration file (TOML).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Prefix log lines with a timestamp (pretty and compact formats).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-target", global = true)]
    pub log_target: bool,

    /// Allow row values (customer data) in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the pipeline for one table or all of them.
    Run(RunArgs),

    /// List the registered tables and their schemas.
    Tables,

    /// Print the configured warehouse connection URL (password masked).
    DbUrl,
}

#[derive(Parser)]
pub struct RunArgs {
    /// Table to process (customers, policies, claims, dates, adjusters) or `all`.
    #[arg(value_name = "TABLE", default_value = "all")]
    pub table: String,

    /// Directory holding `<table>_clean.csv` / `<table>_messy.csv`.
    #[arg(long = "raw-dir", value_name = "DIR")]
    pub raw_dir: Option<PathBuf>,

    /// Directory for valid rows.
    #[arg(long = "transformed-dir", value_name = "DIR")]
    pub transformed_dir: Option<PathBuf>,

    /// Directory for rejected rows.
    #[arg(long = "rejected-dir", value_name = "DIR")]
    pub rejected_dir: Option<PathBuf>,

    /// Skip field normalization; only clean and validate.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,

    /// Validate rows in parallel.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Handling of gender values outside the known vocabulary.
    #[arg(long = "gender-fallback", value_enum)]
    pub gender_fallback: Option<GenderFallbackArg>,

    /// Validate and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum GenderFallbackArg {
    PassThrough,
    Other,
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
