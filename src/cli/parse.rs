//! CLI parse: clap types for macrobundle. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Macrobundle CLI - concatenate macro folders into per-folder and master bundles
#[derive(Parser)]
#[command(name = "macrobundle")]
#[command(about = "Concatenate macro source folders into per-folder and master bundle files")]
pub struct Cli {
    /// Command to run (default: build)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory containing the source folders
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable logging entirely
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write every per-folder output and the master output
    Build {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Verify that the outputs on disk match their sources
    Check {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show folders, members and output names without writing
    Plan {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Build {
            format: "text".to_string(),
        }
    }
}
