use anyhow::Result;

use super::{
    args::Command,
    commands::{CommandResult, analyze::analyze, init::init},
};

/// Dispatches to the appropriate command handler.
///
/// # Returns
/// - `Ok(CommandResult)` with the summary to print and exit behavior
/// - `Err` if the command fails (e.g., definitions not found, invalid config)
pub fn run(command: Command) -> Result<CommandResult> {
    match command {
        Command::Analyze(cmd) => analyze(cmd),
        Command::Init => init(),
    }
}
