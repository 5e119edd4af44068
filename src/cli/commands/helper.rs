use anyhow::Result;

use super::super::{args::CommonArgs, report::print_load_warnings};
use crate::core::I18nEngine;

/// Create an engine for the command's project root and load its dictionary.
///
/// Dictionary files that fail to load are reported on stderr and skipped.
pub fn load_engine(common: &CommonArgs) -> Result<I18nEngine> {
    let engine = I18nEngine::from_root(&common.root(), &common.overrides())?;
    let summary = engine.full_reload();

    tracing::debug!(
        files = summary.files_loaded,
        keys = summary.key_count,
        skipped = summary.skipped_count,
        "dictionary loaded"
    );
    print_load_warnings(&summary.warnings, common.verbose);

    Ok(engine)
}
