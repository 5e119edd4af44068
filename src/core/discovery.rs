use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::config::CONFIG_FILE_NAME;

/// `*` stays inside one path segment, `**` crosses segments.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Result of discovering dictionary files.
#[derive(Debug, Default)]
pub struct DiscoveryResult {
    /// Matching files in merge order.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Glob pattern for files ending in `suffix` anywhere below the root.
pub fn suffix_pattern(suffix: &str) -> String {
    format!("**/*{}", suffix)
}

/// Compiled suffix and ignore patterns, matched against root-relative paths.
struct FileMatcher {
    suffixes: Vec<Pattern>,
    ignores: Vec<Pattern>,
}

impl FileMatcher {
    fn new(suffixes: &[String], ignores: &[String]) -> Self {
        let suffixes = suffixes
            .iter()
            .filter_map(|suffix| match Pattern::new(&suffix_pattern(suffix)) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(suffix = %suffix, error = %e, "invalid suffix pattern, skipped");
                    None
                }
            })
            .collect();

        let ignores = ignores
            .iter()
            .filter_map(|p| match Pattern::new(p) {
                Ok(pattern) => Some(pattern),
                Err(e) => {
                    tracing::warn!(pattern = %p, error = %e, "invalid ignore pattern, skipped");
                    None
                }
            })
            .collect();

        Self { suffixes, ignores }
    }

    fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        self.ignores.iter().any(|p| {
            p.matches_path_with(relative, MATCH_OPTIONS)
                // `**/node_modules/**` should also prune the directory itself
                || (is_dir && p.matches_path_with(&relative.join("_"), MATCH_OPTIONS))
        })
    }

    /// True if the file or any directory above it (below the root) is ignored.
    fn is_excluded(&self, relative: &Path) -> bool {
        relative
            .ancestors()
            .filter(|a| !a.as_os_str().is_empty())
            .any(|a| self.is_ignored(a, a != relative))
    }

    /// Index of the first suffix pattern matching `relative`.
    ///
    /// The project's config file is never a dictionary, whatever the suffixes.
    fn suffix_index(&self, relative: &Path) -> Option<usize> {
        if relative.file_name() == Some(OsStr::new(CONFIG_FILE_NAME)) {
            return None;
        }
        self.suffixes
            .iter()
            .position(|p| p.matches_path_with(relative, MATCH_OPTIONS))
    }
}

/// Find dictionary files below `root` ending in any of `suffixes`.
///
/// Files are grouped by suffix in the given order and sorted by path within
/// each group, so the later suffix wins when the files are merged. A file
/// matching several suffixes is listed once, at its first match. Paths (relative
/// to `root`) matching an `ignores` pattern are skipped, and so is everything
/// below a directory that matches one.
pub fn discover(root: &Path, suffixes: &[String], ignores: &[String]) -> DiscoveryResult {
    let mut result = DiscoveryResult::default();

    let matcher = FileMatcher::new(suffixes, ignores);
    if matcher.suffixes.is_empty() {
        return result;
    }

    let mut groups: Vec<Vec<PathBuf>> = vec![Vec::new(); matcher.suffixes.len()];
    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
            relative.as_os_str().is_empty()
                || !matcher.is_ignored(relative, entry.file_type().is_dir())
        });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.skipped_count += 1;
                tracing::debug!(error = %e, "cannot access path");
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }
        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        if let Some(index) = matcher.suffix_index(relative) {
            groups[index].push(entry.into_path());
        }
    }

    for mut group in groups {
        group.sort();
        result.files.extend(group);
    }

    result
}

/// Whether `path` is a file [`discover`] would list for the same settings.
///
/// Paths outside `root` never are. The file itself is not touched.
pub fn is_discoverable(
    root: &Path,
    path: &Path,
    suffixes: &[String],
    ignores: &[String],
) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };
    let matcher = FileMatcher::new(suffixes, ignores);
    matcher.suffix_index(relative).is_some() && !matcher.is_excluded(relative)
}
