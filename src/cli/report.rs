//! Report formatting and printing utilities.
//!
//! Separate from core logic so the engine can be used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use crate::core::{CompletionCandidate, FileLoadWarning, ResolvedHint};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const ARROW: &str = "\u{2192}"; // →

/// Print the hints of one file as `path:line:col key → text`.
///
/// Lines and columns are 1-based.
pub fn print_hints(file: &Path, hints: &[ResolvedHint]) {
    print_hints_to(file, hints, &mut io::stdout().lock());
}

pub fn print_hints_to<W: Write>(file: &Path, hints: &[ResolvedHint], writer: &mut W) {
    let file = file.display().to_string();
    let locations: Vec<String> = hints
        .iter()
        .map(|hint| {
            format!(
                "{}:{}:{}",
                file,
                hint.position.line + 1,
                hint.position.character + 1
            )
        })
        .collect();
    let width = max_width(locations.iter().map(String::as_str));

    for (location, hint) in locations.iter().zip(hints) {
        let _ = writeln!(
            writer,
            "{}{} {} {} {}",
            location.blue(),
            padding(location, width),
            hint.key.bold(),
            ARROW.dimmed(),
            hint.text
        );
    }
}

/// Print completion candidates as an aligned `key  text` table.
pub fn print_completions(candidates: &[CompletionCandidate]) {
    print_completions_to(candidates, &mut io::stdout().lock());
}

pub fn print_completions_to<W: Write>(candidates: &[CompletionCandidate], writer: &mut W) {
    let width = max_width(candidates.iter().map(|c| c.key.as_str()));

    for candidate in candidates {
        let _ = writeln!(
            writer,
            "{}{}  {}",
            candidate.key.bold(),
            padding(&candidate.key, width),
            candidate.text
        );
    }
}

/// Print a success line, e.g. after all files were resolved.
pub fn print_success_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        message.green()
    );
}

/// Print dictionary files that could not be loaded.
///
/// Without `verbose` only the count is printed.
pub fn print_load_warnings(warnings: &[FileLoadWarning], verbose: bool) {
    print_load_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_load_warnings_to<W: Write>(
    warnings: &[FileLoadWarning],
    verbose: bool,
    writer: &mut W,
) {
    if warnings.is_empty() {
        return;
    }

    if !verbose {
        let _ = writeln!(
            writer,
            "{} {} dictionary file(s) could not be loaded (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
        return;
    }

    for warning in warnings {
        let _ = writeln!(
            writer,
            "{} {}",
            "warning:".bold().yellow(),
            warning.error
        );
        let _ = writeln!(writer, "  {} {}", "-->".blue(), warning.file_path);
    }
}

/// Print a source file that could not be read.
pub fn print_read_error_to<W: Write>(file: &Path, error: &anyhow::Error, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}: {:#}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        file.display(),
        error
    );
}

fn max_width<'a>(items: impl Iterator<Item = &'a str>) -> usize {
    items.map(UnicodeWidthStr::width).max().unwrap_or(0)
}

/// Spaces needed to pad `s` to `width` terminal columns.
fn padding(s: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(s)))
}
