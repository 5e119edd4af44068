use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::super::{InitCommand, exit_status::ExitStatus, report::print_success_to};
use crate::config::default_config_json;

/// Write the default configuration. An existing file is left alone.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = cmd.config_path();
    write_default_config(&config_path, &mut io::stdout().lock(), &mut io::stderr().lock())
}

fn write_default_config<O: Write, E: Write>(
    config_path: &Path,
    out: &mut O,
    err: &mut E,
) -> Result<ExitStatus> {
    if config_path.exists() {
        let _ = writeln!(err, "Error: {} already exists", config_path.display());
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    print_success_to(&format!("Created {}", config_path.display()), out);

    Ok(ExitStatus::Success)
}
