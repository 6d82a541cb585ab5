//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "generate", "inspect").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Generate { .. } => "generate",
        Commands::Validate { .. } => "validate",
        Commands::Inspect { .. } => "inspect",
    }
}
