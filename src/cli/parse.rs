//! CLI parse: clap types for propgen. No behavior; definitions only.

use crate::output::WriteMode;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// propgen - CSS property ID generator
#[derive(Parser)]
#[command(name = "propgen")]
#[command(about = "Generate the CSS property ID enumeration from a property table")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (relative config paths resolve against it)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, default_value = "false")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the header template with the property ID list
    Generate {
        /// Header template path
        #[arg(long)]
        template: Option<PathBuf>,
        /// Property data file (TOML or JSON)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Output path, or "-" for stdout
        #[arg(long)]
        output: Option<PathBuf>,
        /// Fail if the output file is missing or differs instead of writing
        #[arg(long)]
        check: bool,
        /// File write policy (always, if-changed)
        #[arg(long)]
        write_mode: Option<WriteMode>,
    },
    /// Check property group order and boundary markers
    Validate {
        /// Property data file (TOML or JSON)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Show every property with the identifier it emits
    Inspect {
        /// Property data file (TOML or JSON)
        #[arg(long)]
        data: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
}

/// Report format for validate and inspect
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
