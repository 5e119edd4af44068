use anyhow::Result;

use super::DictionaryParser;
use crate::core::Entries;

/// Line-oriented `key=value` dictionary files.
///
/// Follows the classic properties grammar for comments, separators and line
/// continuations. Values are kept raw: escape markers such as `\u4f60` are
/// left for [`crate::core::decode`] to turn into display text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PropertiesFormat;

impl DictionaryParser for PropertiesFormat {
    fn parse(&self, content: &str) -> Result<Entries> {
        Ok(parse_properties(content))
    }
}

/// Parse properties content. The grammar has no failure mode: any line is
/// either a comment, blank, or a (possibly empty-valued) entry.
pub fn parse_properties(content: &str) -> Entries {
    let mut entries = Entries::new();
    for line in logical_lines(content) {
        let (key, value) = split_entry(&line);
        if !key.is_empty() {
            entries.insert(key, value);
        }
    }
    entries
}

/// Join physical lines into logical lines, dropping blanks and comments.
///
/// A line ending in an odd number of backslashes continues on the next line,
/// whose leading whitespace is discarded.
fn logical_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current: Option<String> = None;

    for raw in content.lines() {
        let trimmed = raw.trim_start_matches(is_blank);

        let mut line = match current.take() {
            Some(mut pending) => {
                pending.push_str(trimmed);
                pending
            }
            None => {
                if trimmed.is_empty() || trimmed.starts_with(['#', '!']) {
                    continue;
                }
                trimmed.to_string()
            }
        };

        if ends_with_continuation(&line) {
            line.pop();
            current = Some(line);
        } else {
            lines.push(line);
        }
    }

    // Continuation on the last line of the file
    if let Some(line) = current {
        lines.push(line);
    }

    lines
}

fn ends_with_continuation(line: &str) -> bool {
    line.chars().rev().take_while(|&c| c == '\\').count() % 2 == 1
}

fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\u{c}')
}

/// Split a logical line into its unescaped key and raw value.
fn split_entry(line: &str) -> (String, String) {
    let mut key = String::new();
    let mut chars = line.char_indices().peekable();
    let mut value_start = line.len();

    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some((_, next @ ('=' | ':' | ' ' | '\t' | '#' | '!' | '\\'))) => key.push(next),
                Some((_, next)) => {
                    key.push('\\');
                    key.push(next);
                }
                None => key.push('\\'),
            },
            '=' | ':' => {
                value_start = i + 1;
                break;
            }
            c if is_blank(c) => {
                // Whitespace ends the key; one `=` or `:` may still follow
                let mut rest = i + c.len_utf8();
                let tail = &line[rest..];
                let skipped = tail.len() - tail.trim_start_matches(is_blank).len();
                rest += skipped;
                if line[rest..].starts_with(['=', ':']) {
                    rest += 1;
                }
                value_start = rest;
                break;
            }
            c => key.push(c),
        }
    }

    let value = line
        .get(value_start..)
        .unwrap_or_default()
        .trim_start_matches(is_blank);
    (key, value.to_string())
}
