//! CLI argument parsing for perfdiff

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the comparison ranking
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "perfdiff")]
#[command(version)]
#[command(about = "Compare per-function CPU usage between two perf report runs", long_about = None)]
pub struct Cli {
    /// Root directory containing baseline run subdirectories (perf_*)
    #[arg(long = "baseline", value_name = "DIR")]
    pub baseline: PathBuf,

    /// Root directory containing new run subdirectories (perf_*)
    #[arg(long = "new", value_name = "DIR")]
    pub new: PathBuf,

    /// Component whose <component>.perf.report.gz files are compared
    #[arg(long = "component", value_name = "NAME")]
    pub component: String,

    /// Number of ranked functions to print
    #[arg(long = "top", value_name = "N", default_value = "20")]
    pub top: usize,

    /// Output format (text, json or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
