use anyhow::{Context, Result, bail};
use serde_json::Value;

use super::DictionaryParser;
use crate::core::Entries;

/// JSON object dictionary files.
///
/// String values are taken as-is. Nested objects are flattened into
/// dot-separated keys (`{"Common": {"save": "Save"}}` → `Common.save`).
/// Numbers, booleans, nulls and arrays carry no translation text and are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonFormat;

impl DictionaryParser for JsonFormat {
    fn parse(&self, content: &str) -> Result<Entries> {
        parse_json(content)
    }
}

pub fn parse_json(content: &str) -> Result<Entries> {
    let json: Value = serde_json::from_str(content).context("Failed to parse JSON")?;

    let Value::Object(_) = &json else {
        bail!("Expected a JSON object at the top level");
    };

    let mut entries = Entries::new();
    flatten_json(&json, String::new(), &mut entries);
    Ok(entries)
}

fn flatten_json(value: &Value, prefix: String, result: &mut Entries) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => {
            if !prefix.is_empty() {
                result.insert(prefix, s.clone());
            }
        }
        _ => {}
    }
}
