use std::process::ExitCode;

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{completions::completions, hints::hints, init::init},
    exit_status::ExitStatus,
};

/// Main entry point for the fine-i18n CLI.
///
/// Dispatches to the command handler. `serve` is handled by the binary
/// before getting here.
pub fn run_cli(args: Arguments) -> Result<ExitCode> {
    let Some(Arguments { command }) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success.into());
    };

    let status = match command {
        Some(Command::Hints(cmd)) => hints(cmd)?,
        Some(Command::Completions(cmd)) => completions(cmd)?,
        Some(Command::Init(cmd)) => init(cmd)?,
        Some(Command::Serve) => {
            anyhow::bail!("Serve command should be handled before run_cli()")
        }
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    };

    Ok(status.into())
}
