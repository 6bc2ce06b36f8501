//! Command-line argument definitions for the Flowstep CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the flow document, the breakpoint to step
//! over, configuration file selection, output format and logging verbosity.

use clap::{Parser, ValueEnum};

/// Command-line arguments for the Flowstep step-over tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input flow document (JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Line of the breakpoint to step over
    #[arg(short, long)]
    pub line: u32,

    /// Column of the breakpoint to step over
    #[arg(long, default_value_t = 0)]
    pub column: u32,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format for the resolved breakpoints
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// How resolved breakpoints are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `line:column` per line.
    Text,
    /// The JSON response object: `{"breakpoints": [...]}`.
    Json,
}
