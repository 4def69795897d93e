//! Report output stage.
//!
//! Resolves the output format, fills in report metadata and writes the
//! rendered report to file or stdout.

use super::{auto_detect_format, should_use_color, write_output, LoadedDocument, OutputTarget};
use crate::config::DiffConfig;
use crate::model::SideBySideDiff;
use crate::reports::{create_reporter_with_options, ReportConfig, ReportMetadata};
use anyhow::{Context, Result};

/// Build the report configuration for one comparison.
#[must_use]
pub fn build_report_config(
    config: &DiffConfig,
    left: &LoadedDocument,
    right: &LoadedDocument,
) -> ReportConfig {
    ReportConfig {
        title: None,
        context: config.output.context,
        width: config.output.width,
        show_line_numbers: config.output.show_line_numbers,
        metadata: ReportMetadata {
            left_path: Some(left.display_path()),
            right_path: Some(right.display_path()),
            left_hash: Some(left.hash.clone()),
            right_hash: Some(right.hash.clone()),
            ..ReportMetadata::new()
        },
    }
}

/// Output a diff report to the configured destination.
pub fn output_report(
    config: &DiffConfig,
    diff: &SideBySideDiff,
    left: &LoadedDocument,
    right: &LoadedDocument,
) -> Result<()> {
    let output_target = OutputTarget::from_option(config.output.file.clone());
    let effective_output = auto_detect_format(config.output.format, &output_target);

    // Escape codes never go to files
    let use_color = should_use_color(config.output.no_color)
        && matches!(output_target, OutputTarget::Stdout);

    let report_config = build_report_config(config, left, right);
    let reporter = create_reporter_with_options(effective_output, use_color);
    let report = reporter
        .generate(diff, &report_config)
        .with_context(|| format!("Failed to generate {effective_output} report"))?;

    write_output(&report, &output_target, config.behavior.quiet)
}
