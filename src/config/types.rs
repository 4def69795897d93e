//! Configuration types for sidediff operations.
//!
//! Provides structured configuration for the engine, the output layer and
//! the `diff` command.

use crate::diff::{EngineLimits, InlineGranularity, TextDiffEngine};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// It can be constructed from CLI arguments, config files, or both (with CLI
/// overriding file settings).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Diff engine configuration (granularity, resource limits)
    pub engine: EngineConfig,
    /// Output configuration (format, file, colors, layout)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the intra-line granularity.
    pub fn granularity(mut self, granularity: InlineGranularity) -> Self {
        self.config.engine.granularity = granularity;
        self
    }

    /// Set the engine resource limits.
    pub fn limits(mut self, limits: EngineLimits) -> Self {
        self.config.engine.max_input_bytes = limits.max_input_bytes;
        self.config.engine.max_table_cells = limits.max_table_cells;
        self.config.engine.max_inline_tokens = limits.max_inline_tokens;
        self
    }

    /// Set the output format.
    pub fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Keep only `context` unchanged lines around each change.
    pub fn context(mut self, context: Option<usize>) -> Self {
        self.config.output.context = context;
        self
    }

    /// Enable fail-on-change mode.
    pub fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for diff operations
#[derive(Debug, Clone)]
pub struct DiffConfig {
    /// Paths to compare
    pub paths: DiffPaths,
    /// Engine configuration
    pub engine: EngineConfig,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

/// Paths for diff operation
#[derive(Debug, Clone)]
pub struct DiffPaths {
    /// Path to the left document
    pub left: PathBuf,
    /// Path to the right document
    pub right: PathBuf,
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Diff engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct EngineConfig {
    /// Intra-line token granularity
    pub granularity: InlineGranularity,
    /// Maximum size of each input document in bytes
    #[schemars(range(min = 1))]
    pub max_input_bytes: usize,
    /// Maximum LCS table cells before the matcher falls back to cheaper strategies
    #[schemars(range(min = 1))]
    pub max_table_cells: usize,
    /// Maximum tokens per line side for intra-line diffing
    #[schemars(range(min = 1))]
    pub max_inline_tokens: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::from_limits(EngineLimits::default())
    }
}

impl EngineConfig {
    /// Engine configuration with word granularity and the given limits.
    #[must_use]
    pub fn from_limits(limits: EngineLimits) -> Self {
        Self {
            granularity: InlineGranularity::default(),
            max_input_bytes: limits.max_input_bytes,
            max_table_cells: limits.max_table_cells,
            max_inline_tokens: limits.max_inline_tokens,
        }
    }

    #[must_use]
    pub const fn limits(&self) -> EngineLimits {
        EngineLimits {
            max_input_bytes: self.max_input_bytes,
            max_table_cells: self.max_table_cells,
            max_inline_tokens: self.max_inline_tokens,
        }
    }

    /// Build an engine from this configuration
    #[must_use]
    pub fn to_engine(&self) -> TextDiffEngine {
        TextDiffEngine::new()
            .with_limits(self.limits())
            .with_granularity(self.granularity)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
    /// Total width of side-by-side output (None detects the terminal width)
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 20))]
    pub width: Option<usize>,
    /// Unchanged lines kept around each change (None shows everything)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<usize>,
    /// Show line numbers in side-by-side output
    pub show_line_numbers: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Auto,
            file: None,
            no_color: false,
            width: None,
            context: None,
            show_line_numbers: true,
        }
    }
}

/// Behavior flags for diff operations
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Builder for DiffConfig
// ============================================================================

/// Builder for `DiffConfig`
#[derive(Debug, Default)]
pub struct DiffConfigBuilder {
    left: Option<PathBuf>,
    right: Option<PathBuf>,
    engine: EngineConfig,
    output: OutputConfig,
    behavior: BehaviorConfig,
}

impl DiffConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the engine, output and behavior sections of `config`.
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            engine: config.engine,
            output: config.output.clone(),
            behavior: config.behavior.clone(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn left_path(mut self, path: PathBuf) -> Self {
        self.left = Some(path);
        self
    }

    #[must_use]
    pub fn right_path(mut self, path: PathBuf) -> Self {
        self.right = Some(path);
        self
    }

    #[must_use]
    pub fn granularity(mut self, granularity: InlineGranularity) -> Self {
        self.engine.granularity = granularity;
        self
    }

    #[must_use]
    pub fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub fn width(mut self, width: Option<usize>) -> Self {
        self.output.width = width;
        self
    }

    #[must_use]
    pub fn context(mut self, context: Option<usize>) -> Self {
        self.output.context = context;
        self
    }

    #[must_use]
    pub fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    pub fn build(self) -> anyhow::Result<DiffConfig> {
        let left = self
            .left
            .ok_or_else(|| anyhow::anyhow!("left path is required"))?;
        let right = self
            .right
            .ok_or_else(|| anyhow::anyhow!("right path is required"))?;

        Ok(DiffConfig {
            paths: DiffPaths { left, right },
            engine: self.engine,
            output: self.output,
            behavior: self.behavior,
        })
    }
}
