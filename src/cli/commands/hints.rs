use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use super::super::{
    args::HintsCommand,
    exit_status::ExitStatus,
    report::{print_hints, print_read_error_to, print_success_to},
};
use super::helper::load_engine;
use crate::core::ResolvedHint;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FileHints {
    file_path: PathBuf,
    hints: Vec<ResolvedHint>,
}

pub fn hints(cmd: HintsCommand) -> Result<ExitStatus> {
    let engine = load_engine(&cmd.common)?;

    let mut results: Vec<FileHints> = Vec::new();
    let mut unreadable = 0;

    for file in cmd.files {
        let text = match fs::read_to_string(&file)
            .with_context(|| format!("Failed to read source file: {}", file.display()))
        {
            Ok(text) => text,
            Err(e) => {
                print_read_error_to(&file, &e, &mut io::stderr().lock());
                unreadable += 1;
                continue;
            }
        };

        let hints = engine.hints(&text, Some(file.as_path()));
        results.push(FileHints {
            file_path: file,
            hints,
        });
    }

    if cmd.json {
        let json = serde_json::to_string_pretty(&results).context("Failed to serialize hints")?;
        println!("{}", json);
    } else {
        for result in &results {
            print_hints(&result.file_path, &result.hints);
        }
        let total: usize = results.iter().map(|r| r.hints.len()).sum();
        print_success_to(
            &format!(
                "Resolved {} {} in {} {}",
                total,
                if total == 1 { "hint" } else { "hints" },
                results.len(),
                if results.len() == 1 { "file" } else { "files" }
            ),
            &mut io::stdout().lock(),
        );
    }

    if unreadable > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}
