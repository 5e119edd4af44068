//! File parsers for dictionary files and source documents.
//!
//! - `properties`: line-oriented `key=value` dictionary files
//! - `json`: JSON object dictionary files
//! - `source`: JS/TS/JSX/TSX documents (uses swc for AST generation)

pub mod json;
pub mod properties;
pub mod source;

use std::path::Path;

use anyhow::Result;
use enum_dispatch::enum_dispatch;

use crate::core::Entries;

pub use json::JsonFormat;
pub use properties::PropertiesFormat;

/// A parser turning one dictionary file's content into key → raw value pairs.
#[enum_dispatch]
pub trait DictionaryParser {
    /// Parse file content. Fails on malformed syntax.
    fn parse(&self, content: &str) -> Result<Entries>;
}

/// Dictionary file formats recognized by extension.
#[enum_dispatch(DictionaryParser)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryFormat {
    Properties(PropertiesFormat),
    Json(JsonFormat),
}

impl DictionaryFormat {
    /// Pick the format for a path from its extension.
    ///
    /// Returns `None` for extensions that are not dictionary formats.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("properties") => Some(PropertiesFormat.into()),
            Some("json") => Some(JsonFormat.into()),
            _ => None,
        }
    }
}

/// Parse one dictionary file, choosing the parser by extension.
///
/// Unknown extensions yield an empty mapping rather than an error.
pub fn parse_file(path: &Path, content: &str) -> Result<Entries> {
    match DictionaryFormat::from_path(path) {
        Some(format) => format.parse(content),
        None => Ok(Entries::new()),
    }
}
