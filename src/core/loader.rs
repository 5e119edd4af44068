use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;

use crate::core::{Entries, parsers::parse_file};

/// A dictionary file that could not be read or parsed.
///
/// The file contributes nothing to the dictionary; reporting it is up to the
/// host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileLoadWarning {
    pub file_path: String,
    pub error: String,
}

/// Parsed contents of a batch of dictionary files, in input order.
#[derive(Debug, Default)]
pub struct LoadResult {
    pub files: Vec<(PathBuf, Entries)>,
    pub warnings: Vec<FileLoadWarning>,
}

impl LoadResult {
    /// Entries of each loaded file, in merge order.
    pub fn entries(&self) -> impl Iterator<Item = &Entries> {
        self.files.iter().map(|(_, entries)| entries)
    }

    pub fn key_count(&self) -> usize {
        self.entries().map(Entries::len).sum()
    }
}

/// Read and parse one dictionary file.
pub fn load_file(path: &Path) -> Result<Entries> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read dictionary file: {}", path.display()))?;
    parse_file(path, &content)
        .with_context(|| format!("Failed to parse dictionary file: {}", path.display()))
}

/// Read and parse a batch of files in parallel.
///
/// Order of `paths` is preserved in the result so merging stays
/// last-file-wins. A failing file is recorded as a warning and the batch
/// carries on.
pub fn load_files(paths: &[PathBuf]) -> LoadResult {
    let results: Vec<_> = paths
        .par_iter()
        .map(|path| (path.clone(), load_file(path)))
        .collect();

    let mut loaded = LoadResult::default();
    for (path, result) in results {
        match result {
            Ok(entries) => loaded.files.push((path, entries)),
            Err(e) => loaded.warnings.push(FileLoadWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }
    loaded
}
