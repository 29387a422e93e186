//! CLI help: command-name contract for log events and routing.

use crate::cli::parse::Commands;

/// Command name string for log events (e.g. "merge", "accent").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Merge { .. } => "merge",
        Commands::Accent { .. } => "accent",
        Commands::Status { .. } => "status",
        Commands::Init { .. } => "init",
    }
}
