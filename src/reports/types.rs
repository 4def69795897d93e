//! Report type definitions.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// Auto-detect: side-by-side if TTY, summary otherwise
    #[default]
    Auto,
    /// Two-column terminal diff
    #[value(alias = "sbs")]
    SideBySide,
    /// Structured JSON output
    Json,
    /// Brief summary output
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Auto => write!(f, "auto"),
            ReportFormat::SideBySide => write!(f, "side-by-side"),
            ReportFormat::Json => write!(f, "json"),
            ReportFormat::Summary => write!(f, "summary"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Title for the report
    pub title: Option<String>,
    /// Unchanged rows kept around each change; `None` shows every row
    pub context: Option<usize>,
    /// Total output width for column layouts; `None` uses the terminal width
    pub width: Option<usize>,
    /// Show line numbers in column layouts
    pub show_line_numbers: bool,
    /// Additional metadata to include
    pub metadata: ReportMetadata,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: None,
            context: None,
            width: None,
            show_line_numbers: true,
            metadata: ReportMetadata::default(),
        }
    }
}

impl ReportConfig {
    /// Keep only `context` unchanged rows around each change
    #[must_use]
    pub const fn with_context(mut self, context: usize) -> Self {
        self.context = Some(context);
        self
    }

    /// Set the metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Metadata included in reports
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Left document path
    pub left_path: Option<String>,
    /// Right document path
    pub right_path: Option<String>,
    /// xxh3 hash of the left document, hex encoded
    pub left_hash: Option<String>,
    /// xxh3 hash of the right document, hex encoded
    pub right_hash: Option<String>,
    /// Tool version
    pub tool_version: String,
    /// Generation timestamp
    pub generated_at: Option<String>,
    /// Custom properties
    pub custom: std::collections::HashMap<String, String>,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    /// Display name of the left document
    #[must_use]
    pub fn left_name(&self) -> &str {
        self.left_path.as_deref().unwrap_or("left")
    }

    /// Display name of the right document
    #[must_use]
    pub fn right_name(&self) -> &str {
        self.right_path.as_deref().unwrap_or("right")
    }
}
