//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two text files.

use crate::config::DiffConfig;
use crate::model::{Side, SideBySideDiff};
use crate::pipeline::{compute_diff, exit_codes, load_document, output_report};
use anyhow::Result;

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
#[allow(clippy::needless_pass_by_value)]
pub fn run_diff(config: DiffConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;
    let limits = config.engine.limits();

    let left = load_document(&config.paths.left, Side::Left, &limits, quiet)?;
    let right = load_document(&config.paths.right, Side::Right, &limits, quiet)?;

    let diff = compute_diff(&config, &left, &right)?;
    let exit_code = determine_exit_code(&config, &diff);

    output_report(&config, &diff, &left, &right)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
const fn determine_exit_code(config: &DiffConfig, diff: &SideBySideDiff) -> i32 {
    if config.behavior.fail_on_change && diff.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DiffConfigBuilder;
    use crate::diff::TextDiffEngine;
    use std::path::PathBuf;

    fn config(fail_on_change: bool) -> DiffConfig {
        DiffConfigBuilder::new()
            .left_path(PathBuf::from("a.txt"))
            .right_path(PathBuf::from("b.txt"))
            .fail_on_change(fail_on_change)
            .build()
            .unwrap()
    }

    #[test]
    fn test_exit_code_respects_fail_on_change() {
        let changed = TextDiffEngine::new().diff("a\n", "b\n").unwrap();
        let same = TextDiffEngine::new().diff("a\n", "a\n").unwrap();

        assert_eq!(determine_exit_code(&config(true), &changed), exit_codes::CHANGES_DETECTED);
        assert_eq!(determine_exit_code(&config(true), &same), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(&config(false), &changed), exit_codes::SUCCESS);
    }
}
