//! Pipeline and CLI integration tests.
//!
//! These tests exercise the full load → diff → report pipeline, error
//! handling paths, and the `diff` command handler with real fixture files.

use sidediff::cli::run_diff;
use sidediff::config::{
    load_config_file, AppConfig, ConfigPreset, DiffConfigBuilder, Validatable,
};
use sidediff::diff::{EngineLimits, InlineGranularity};
use sidediff::model::Side;
use sidediff::pipeline::{
    auto_detect_format, build_report_config, compute_diff, exit_codes, load_document,
    output_report, write_output, OutputTarget,
};
use sidediff::reports::ReportFormat;
use sidediff::{InputErrorKind, SideDiffError};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture_config(left: &str, right: &str) -> DiffConfigBuilder {
    DiffConfigBuilder::new()
        .left_path(fixture_path(left))
        .right_path(fixture_path(right))
        .quiet(true)
        .no_color(true)
}

// ============================================================================
// Load Stage Tests
// ============================================================================

mod load_stage {
    use super::*;

    #[test]
    fn load_text_fixture() {
        let doc = load_document(
            &fixture_path("left.txt"),
            Side::Left,
            &EngineLimits::default(),
            true,
        )
        .expect("load should succeed");

        assert!(doc.text.starts_with("[server]\n"));
        assert_eq!(doc.hash.len(), 16);
        assert!(doc.display_path().ends_with("left.txt"));
    }

    #[test]
    fn identical_files_share_hash() {
        let limits = EngineLimits::default();
        let a = load_document(&fixture_path("left.txt"), Side::Left, &limits, true).unwrap();
        let b = load_document(&fixture_path("left_copy.txt"), Side::Right, &limits, true).unwrap();
        let c = load_document(&fixture_path("right.txt"), Side::Right, &limits, true).unwrap();

        assert_eq!(a.hash, b.hash);
        assert_ne!(a.hash, c.hash);
    }

    #[test]
    fn binary_fixture_is_invalid_input() {
        let err = load_document(
            &fixture_path("binary.bin"),
            Side::Right,
            &EngineLimits::default(),
            true,
        )
        .unwrap_err();

        let source = err
            .downcast_ref::<SideDiffError>()
            .expect("root error should be a SideDiffError");
        assert_eq!(
            source.input_kind(),
            Some(&InputErrorKind::NotUtf8 {
                side: Side::Right,
                valid_up_to: 2
            })
        );
    }

    #[test]
    fn oversized_file_is_rejected_before_reading() {
        let limits = EngineLimits {
            max_input_bytes: 10,
            ..EngineLimits::default()
        };
        let err = load_document(&fixture_path("left.txt"), Side::Left, &limits, true).unwrap_err();
        let source = err.downcast_ref::<SideDiffError>().unwrap();
        assert!(matches!(
            source.input_kind(),
            Some(InputErrorKind::TooLarge { limit: 10, .. })
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_document(
            Path::new("/nonexistent/file.txt"),
            Side::Left,
            &EngineLimits::default(),
            true,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/file.txt"));
    }
}

// ============================================================================
// Diff and Report Stage Tests
// ============================================================================

mod diff_and_report {
    use super::*;

    #[test]
    fn compute_diff_uses_configured_granularity() {
        let tmp = TempDir::new().unwrap();
        let left = tmp.path().join("l.txt");
        let right = tmp.path().join("r.txt");
        std::fs::write(&left, "colour\n").unwrap();
        std::fs::write(&right, "color\n").unwrap();

        let config = DiffConfigBuilder::new()
            .left_path(left.clone())
            .right_path(right.clone())
            .granularity(InlineGranularity::Char)
            .quiet(true)
            .build()
            .unwrap();

        let limits = config.engine.limits();
        let l = load_document(&left, Side::Left, &limits, true).unwrap();
        let r = load_document(&right, Side::Right, &limits, true).unwrap();
        let diff = compute_diff(&config, &l, &r).unwrap();

        let spans = diff.rows[0].right_spans.as_deref().unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].text, "color");
    }

    #[test]
    fn report_config_carries_metadata() {
        let config = fixture_config("left.txt", "right.txt")
            .context(Some(2))
            .width(Some(100))
            .build()
            .unwrap();
        let limits = config.engine.limits();
        let l = load_document(&config.paths.left, Side::Left, &limits, true).unwrap();
        let r = load_document(&config.paths.right, Side::Right, &limits, true).unwrap();

        let report_config = build_report_config(&config, &l, &r);
        assert_eq!(report_config.context, Some(2));
        assert_eq!(report_config.width, Some(100));
        assert_eq!(report_config.metadata.left_hash.as_deref(), Some(l.hash.as_str()));
        assert!(report_config
            .metadata
            .right_path
            .as_deref()
            .unwrap()
            .ends_with("right.txt"));
    }

    #[test]
    fn json_report_written_to_file() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("diff.json");

        let config = fixture_config("left.txt", "right.txt")
            .output_format(ReportFormat::Json)
            .output_file(Some(out.clone()))
            .build()
            .unwrap();
        let limits = config.engine.limits();
        let l = load_document(&config.paths.left, Side::Left, &limits, true).unwrap();
        let r = load_document(&config.paths.right, Side::Right, &limits, true).unwrap();
        let diff = compute_diff(&config, &l, &r).unwrap();

        output_report(&config, &diff, &l, &r).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["summary"]["totalChanges"], 3);
        assert_eq!(value["metadata"]["left"]["hash"], l.hash.as_str());
        assert_eq!(value["rows"].as_array().unwrap().len(), 9);
    }

    #[test]
    fn auto_format_to_file_is_summary() {
        let target = OutputTarget::File(PathBuf::from("/tmp/report.txt"));
        assert_eq!(
            auto_detect_format(ReportFormat::Auto, &target),
            ReportFormat::Summary
        );
    }

    #[test]
    fn write_output_to_missing_directory_fails() {
        let target = OutputTarget::File(PathBuf::from("/nonexistent/dir/out.txt"));
        assert!(write_output("text", &target, true).is_err());
    }
}

// ============================================================================
// Command Handler Tests
// ============================================================================

mod command {
    use super::*;

    #[test]
    fn identical_files_exit_success() {
        let tmp = TempDir::new().unwrap();
        let config = fixture_config("left.txt", "left_copy.txt")
            .fail_on_change(true)
            .output_file(Some(tmp.path().join("out.txt")))
            .build()
            .unwrap();

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn changed_files_exit_one_with_fail_on_change() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("out.txt");
        let config = fixture_config("left.txt", "right.txt")
            .fail_on_change(true)
            .output_format(ReportFormat::SideBySide)
            .width(Some(90))
            .output_file(Some(out.clone()))
            .build()
            .unwrap();

        assert_eq!(run_diff(config).unwrap(), exit_codes::CHANGES_DETECTED);

        let report = std::fs::read_to_string(out).unwrap();
        assert!(report.contains("timeout = 30"));
        assert!(!report.contains('\x1b'));
    }

    #[test]
    fn changed_files_exit_zero_without_fail_on_change() {
        let tmp = TempDir::new().unwrap();
        let config = fixture_config("left.txt", "right.txt")
            .output_file(Some(tmp.path().join("out.txt")))
            .build()
            .unwrap();

        assert_eq!(run_diff(config).unwrap(), exit_codes::SUCCESS);
    }

    #[test]
    fn missing_input_is_an_error() {
        let config = DiffConfigBuilder::new()
            .left_path(PathBuf::from("/nonexistent/a.txt"))
            .right_path(fixture_path("right.txt"))
            .quiet(true)
            .build()
            .unwrap();

        assert!(!config.is_valid());
        assert!(run_diff(config).is_err());
    }
}

// ============================================================================
// Configuration Tests
// ============================================================================

mod configuration {
    use super::*;

    #[test]
    fn config_file_overrides_flow_into_diff_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(".sidediff.yaml");
        std::fs::write(
            &path,
            "engine:\n  granularity: char\noutput:\n  context: 4\nbehavior:\n  fail_on_change: true\n",
        )
        .unwrap();

        let app = load_config_file(&path).unwrap();
        let config = DiffConfigBuilder::from_app_config(&app)
            .left_path(fixture_path("left.txt"))
            .right_path(fixture_path("right.txt"))
            .build()
            .unwrap();

        assert_eq!(config.engine.granularity, InlineGranularity::Char);
        assert_eq!(config.output.context, Some(4));
        assert!(config.behavior.fail_on_change);
        assert!(config.is_valid());
    }

    #[test]
    fn preset_layers_under_cli_overrides() {
        let mut config = AppConfig::default();
        config.merge(&AppConfig::from_preset(ConfigPreset::Ci));
        config.merge(
            &AppConfig::builder()
                .output_format(ReportFormat::Summary)
                .build(),
        );

        assert_eq!(config.output.format, ReportFormat::Summary);
        assert_eq!(config.output.context, Some(3));
        assert!(config.behavior.fail_on_change);
    }
}
