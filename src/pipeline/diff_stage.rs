//! Diff computation stage.
//!
//! Builds the engine from configuration and runs it over two loaded documents.

use super::LoadedDocument;
use crate::config::DiffConfig;
use crate::model::SideBySideDiff;
use anyhow::{Context, Result};

/// Run the side-by-side diff between two documents.
pub fn compute_diff(
    config: &DiffConfig,
    left: &LoadedDocument,
    right: &LoadedDocument,
) -> Result<SideBySideDiff> {
    let quiet = config.behavior.quiet;
    let engine = config.engine.to_engine();

    if !quiet {
        tracing::info!(
            "Computing side-by-side diff ({} granularity)...",
            engine.granularity()
        );
    }

    let diff = engine
        .diff(&left.text, &right.text)
        .context("Failed to compute diff")?;

    if !quiet {
        let summary = &diff.summary;
        tracing::info!(
            "Diff complete: {} changes (+{} -{} ~{}), similarity {:.1}%",
            summary.total_changes,
            summary.added,
            summary.removed,
            summary.modified,
            summary.similarity * 100.0
        );
    }

    Ok(diff)
}
