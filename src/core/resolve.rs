//! Binding of call sites and dictionary entries to display text.

use schemars::JsonSchema;
use serde::Serialize;

use crate::core::{CallSite, Dictionary, decode, utils::Position};

/// Characters that may open a key literal right after `name(`.
pub const TRIGGER_QUOTES: [char; 3] = ['"', '\'', '`'];

/// Display text for one call site, anchored right after its key literal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedHint {
    pub key: String,
    /// Byte offset just past the key literal.
    pub offset: usize,
    pub position: Position,
    pub text: String,
}

/// A dictionary key offered while typing a translation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompletionCandidate {
    pub key: String,
    pub text: String,
}

impl CompletionCandidate {
    /// List label: `key(text)`.
    pub fn label(&self) -> String {
        format!("{}({})", self.key, self.text)
    }

    /// Detail line: `key: text`.
    pub fn detail(&self) -> String {
        format!("{}: {}", self.key, self.text)
    }

    /// Text inserted on accept.
    pub fn insert_text(&self) -> &str {
        &self.key
    }
}

/// Resolve each call site against the dictionary.
///
/// Missing keys and values that decode to an empty string produce no hint.
pub fn resolve_hints(call_sites: &[CallSite], dictionary: &Dictionary) -> Vec<ResolvedHint> {
    call_sites
        .iter()
        .filter_map(|site| {
            let raw = dictionary.get(&site.key).unwrap_or_default();
            let text = decode(raw);
            (!text.is_empty()).then(|| ResolvedHint {
                key: site.key.clone(),
                offset: site.end,
                position: site.end_position,
                text,
            })
        })
        .collect()
}

/// One candidate per dictionary entry, in dictionary order.
pub fn list_completions(dictionary: &Dictionary) -> Vec<CompletionCandidate> {
    dictionary
        .iter()
        .map(|(key, raw)| CompletionCandidate {
            key: key.to_string(),
            text: decode(raw),
        })
        .collect()
}

/// Whether the text before the cursor is `function_name(` plus an opening quote.
pub fn is_completion_trigger(line_prefix: &str, function_name: &str) -> bool {
    let Some(before_quote) = line_prefix.strip_suffix(TRIGGER_QUOTES) else {
        return false;
    };
    before_quote
        .strip_suffix('(')
        .is_some_and(|before_paren| before_paren.ends_with(function_name))
}
