//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log events (e.g. "build", "check").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Build { .. } => "build",
        Commands::Check { .. } => "check",
        Commands::Plan { .. } => "plan",
        Commands::Config => "config",
    }
}

/// Output format requested by the command, if it takes one.
pub fn command_format(command: &Commands) -> Option<&str> {
    match command {
        Commands::Build { format } | Commands::Check { format } | Commands::Plan { format } => {
            Some(format.as_str())
        }
        Commands::Config => None,
    }
}
