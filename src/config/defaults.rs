//! Default configurations and presets for sidediff.
//!
//! Provides named presets for common use cases and default values.

use super::types::{AppConfig, BehaviorConfig, EngineConfig, OutputConfig};
use crate::diff::{EngineLimits, InlineGranularity};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default balanced settings suitable for most cases
    Default,
    /// Precise: character-level highlights, larger matcher budget
    Precise,
    /// Fast: small budgets for very large or machine-generated files
    Fast,
    /// CI: machine-readable output, fail on changes
    Ci,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Precise => "precise",
            Self::Fast => "fast",
            Self::Ci => "ci",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "precise" | "char" | "exact" => Some(Self::Precise),
            "fast" | "quick" => Some(Self::Fast),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Word-level highlights with default engine limits",
            Self::Precise => "Character-level highlights and an exact matcher for larger inputs",
            Self::Fast => "Small matcher and highlight budgets for large or generated files",
            Self::Ci => "JSON hunks, no colors, non-zero exit when files differ",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Precise, Self::Fast, Self::Ci]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Precise => Self::precise_preset(),
            ConfigPreset::Fast => Self::fast_preset(),
            ConfigPreset::Ci => Self::ci_preset(),
        }
    }

    /// Precise preset.
    ///
    /// - Character granularity for intra-line highlights
    /// - Larger LCS table so the optimal alignment holds for bigger files
    #[must_use]
    pub fn precise_preset() -> Self {
        Self {
            engine: EngineConfig {
                granularity: InlineGranularity::Char,
                ..EngineConfig::from_limits(EngineLimits::precise())
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// Fast preset for large inputs.
    #[must_use]
    pub fn fast_preset() -> Self {
        Self {
            engine: EngineConfig::from_limits(EngineLimits::fast()),
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }

    /// CI pipeline preset.
    ///
    /// - JSON output with three lines of context
    /// - Fail on any changes
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_preset() -> Self {
        use crate::reports::ReportFormat;

        Self {
            engine: EngineConfig::default(),
            output: OutputConfig {
                format: ReportFormat::Json,
                no_color: true,
                context: Some(DEFAULT_CONTEXT_LINES),
                ..OutputConfig::default()
            },
            behavior: BehaviorConfig {
                fail_on_change: true,
                quiet: true,
            },
        }
    }
}

// ============================================================================
// Default Value Constants
// ============================================================================

/// Default number of unchanged lines kept around each hunk.
pub const DEFAULT_CONTEXT_LINES: usize = 3;

// ============================================================================
// Tests
// ============================================================================
