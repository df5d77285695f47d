use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use exit_code::exit_status_from_result;

pub mod args;
pub mod commands;
mod exit_code;
mod exit_status;
pub mod report;
mod run;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let command = args.command_or_default();
    let verbose = match &command {
        Command::Analyze(cmd) => cmd.common.verbose,
        Command::Init => false,
    };

    let result = run::run(command)?;
    report::print(&result, verbose);

    Ok(exit_status_from_result(&result))
}
