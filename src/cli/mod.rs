//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: Command handlers (`hints`, `completions`, `init`)
//! - `exit_status`: Process exit codes
//! - `report`: Terminal output formatting
//! - `run`: Command dispatch

mod args;
mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{
    Arguments, Command, CommonArgs, CompletionsCommand, HintsCommand, InitCommand,
};
pub use exit_status::ExitStatus;
pub use run::run_cli;
