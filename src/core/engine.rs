//! `I18nEngine`: one project root, its configuration and its dictionary.
//!
//! Hosts (CLI, MCP server) create an engine per project, call
//! [`I18nEngine::full_reload`] once, and then ask for hints and completions.
//! A saved dictionary file is merged with [`I18nEngine::reload_file`].

use std::{
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use anyhow::Result;
use schemars::JsonSchema;
use serde::Serialize;

use crate::{
    config::{Config, ConfigPatch, load_config},
    core::{
        CompletionCandidate, Dictionary, DictionaryStore, FileLoadWarning, ResolvedHint,
        SourceLanguage, discover, is_completion_trigger, is_discoverable, list_completions,
        load_file, load_files, parsers::DictionaryFormat, resolve_hints, scan_with_language,
    },
};

/// Outcome of a full dictionary rebuild.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReloadSummary {
    /// Dictionary files that were parsed and merged.
    pub files_loaded: usize,
    /// Distinct keys in the dictionary after the rebuild.
    pub key_count: usize,
    /// Directory entries that could not be read during discovery.
    pub skipped_count: usize,
    pub warnings: Vec<FileLoadWarning>,
}

/// Outcome of merging a single saved file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum PatchOutcome {
    /// Not a configured dictionary file; the store is untouched.
    Ignored,
    /// The file was parsed and its `keys` entries merged.
    Merged { keys: usize },
    /// The file could not be read or parsed; the store is untouched.
    Failed(FileLoadWarning),
}

pub struct I18nEngine {
    root_dir: PathBuf,
    config: RwLock<Config>,
    store: DictionaryStore,
}

impl I18nEngine {
    /// Create an engine with an empty dictionary.
    pub fn new(root_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            root_dir: root_dir.into(),
            config: RwLock::new(config),
            store: DictionaryStore::new(),
        }
    }

    /// Create an engine for `root_dir` using its config file (or defaults)
    /// with `overrides` applied on top.
    ///
    /// # Errors
    ///
    /// Returns error if the config file is malformed or the merged
    /// configuration is invalid.
    pub fn from_root(root_dir: &Path, overrides: &ConfigPatch) -> Result<Self> {
        let loaded = load_config(root_dir)?;
        let config = loaded.config.merged(overrides);
        config.validate()?;

        tracing::info!(
            root = %root_dir.display(),
            from_file = loaded.from_file,
            suffixes = ?config.file_suffixes(),
            func_name = %config.i18n_func_name,
            "configuration loaded"
        );

        Ok(Self::new(root_dir, config))
    }

    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> Config {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Snapshot of the current dictionary.
    pub fn dictionary(&self) -> Dictionary {
        self.store.entries()
    }

    /// Rebuild the dictionary from scratch: discover every dictionary file
    /// under the root, parse them, and merge them in discovery order.
    pub fn full_reload(&self) -> ReloadSummary {
        let config = self.config();
        let discovered = discover(&self.root_dir, &config.file_suffixes(), &config.ignores);
        let loaded = load_files(&discovered.files);

        for (path, entries) in &loaded.files {
            tracing::info!(file = %path.display(), keys = entries.len(), "merged dictionary file");
        }
        self.store.rebuild(loaded.entries());

        ReloadSummary {
            files_loaded: loaded.files.len(),
            key_count: self.store.len(),
            skipped_count: discovered.skipped_count,
            warnings: loaded.warnings,
        }
    }

    /// Merge one saved file into the dictionary.
    ///
    /// Only files a full reload would load are merged: a dictionary format,
    /// one of the configured suffixes, below the root and not ignored.
    /// Keys the file no longer defines stay in the dictionary until the next
    /// [`I18nEngine::full_reload`]. Relative paths are taken from the root.
    pub fn reload_file(&self, path: &Path) -> PatchOutcome {
        if DictionaryFormat::from_path(path).is_none() {
            return PatchOutcome::Ignored;
        }

        let path = self.root_dir.join(path);
        let config = self.config();
        if !is_discoverable(&self.root_dir, &path, &config.file_suffixes(), &config.ignores) {
            tracing::debug!(file = %path.display(), "not a configured dictionary file, ignored");
            return PatchOutcome::Ignored;
        }

        match load_file(&path) {
            Ok(entries) => {
                self.store.load(&entries);
                tracing::info!(file = %path.display(), keys = entries.len(), "merged dictionary file");
                PatchOutcome::Merged {
                    keys: entries.len(),
                }
            }
            Err(e) => PatchOutcome::Failed(FileLoadWarning {
                file_path: path.to_string_lossy().to_string(),
                error: format!("{:#}", e),
            }),
        }
    }

    /// Hints for a document.
    ///
    /// With a `path`, the grammar follows its extension and documents whose
    /// language is not among the configured selectors yield nothing. Without
    /// one, the document is parsed as TSX.
    pub fn hints(&self, text: &str, path: Option<&Path>) -> Vec<ResolvedHint> {
        match path {
            Some(path) => match SourceLanguage::from_path(path) {
                Some(language) => self.hints_with_language(text, language),
                None => Vec::new(),
            },
            None => self.resolve(text, SourceLanguage::default()),
        }
    }

    /// Hints for a document of a known language.
    ///
    /// Yields nothing when `language` is not among the configured selectors.
    pub fn hints_with_language(&self, text: &str, language: SourceLanguage) -> Vec<ResolvedHint> {
        if !self.config().languages().contains(&language) {
            return Vec::new();
        }
        self.resolve(text, language)
    }

    fn resolve(&self, text: &str, language: SourceLanguage) -> Vec<ResolvedHint> {
        let function_name = self.config().i18n_func_name;
        let call_sites = scan_with_language(text, &function_name, language);
        if call_sites.is_empty() {
            return Vec::new();
        }
        resolve_hints(&call_sites, &self.store.entries())
    }

    /// Every dictionary entry as a completion candidate.
    pub fn completions(&self) -> Vec<CompletionCandidate> {
        list_completions(&self.store.entries())
    }

    /// Candidates when the cursor follows `name(` plus an opening quote,
    /// `None` otherwise.
    pub fn completions_at(&self, line_prefix: &str) -> Option<Vec<CompletionCandidate>> {
        let function_name = self.config().i18n_func_name;
        is_completion_trigger(line_prefix, &function_name).then(|| self.completions())
    }

    /// Apply a partial configuration update and rebuild the dictionary.
    ///
    /// # Errors
    ///
    /// Returns error if the updated configuration is invalid. The current
    /// configuration and dictionary are then left untouched.
    pub fn reconfigure(&self, patch: &ConfigPatch) -> Result<ReloadSummary> {
        {
            let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
            let updated = config.merged(patch);
            updated.validate()?;
            tracing::info!(
                suffixes = ?updated.file_suffixes(),
                func_name = %updated.i18n_func_name,
                selectors = ?updated.selectors,
                "configuration updated"
            );
            *config = updated;
        }
        Ok(self.full_reload())
    }
}
