//! Pipeline orchestration for file comparisons.
//!
//! This module provides the load → diff → report workflow shared by the CLI
//! command handlers.

mod diff_stage;
mod input;
mod output;
mod report_stage;

pub use diff_stage::compute_diff;
pub use input::{load_document, LoadedDocument};
pub use output::{auto_detect_format, should_use_color, write_output, OutputTarget};
pub use report_stage::{build_report_config, output_report};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or not failing on change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_values() {
        assert_eq!(exit_codes::SUCCESS, 0);
        assert_eq!(exit_codes::CHANGES_DETECTED, 1);
        assert_eq!(exit_codes::ERROR, 3);
    }
}
