use anyhow::{Context, Result};

use super::super::{args::CompletionsCommand, exit_status::ExitStatus, report::print_completions};
use super::helper::load_engine;

pub fn completions(cmd: CompletionsCommand) -> Result<ExitStatus> {
    let engine = load_engine(&cmd.common)?;

    let candidates = match &cmd.line_prefix {
        Some(prefix) => engine.completions_at(prefix).unwrap_or_default(),
        None => engine.completions(),
    };

    if cmd.json {
        let json =
            serde_json::to_string_pretty(&candidates).context("Failed to serialize completions")?;
        println!("{}", json);
    } else {
        print_completions(&candidates);
    }

    Ok(ExitStatus::Success)
}
