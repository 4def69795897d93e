//! **Line-oriented text diffing with side-by-side alignment.**
//!
//! `sidediff` compares two text documents and produces the data a two-column
//! diff viewer needs: one row per displayed line, each side carrying its own
//! line number, its classification, and, for lines that were changed rather
//! than purely added or removed, word- or character-level highlight spans.
//!
//! ## Key Features
//!
//! - **Deterministic line diff**: an LCS matcher over lines that always picks
//!   the same alignment for the same input, with bounded memory on large files.
//! - **Side-by-side alignment**: removed and added runs are paired row by row,
//!   with blank placeholders on the shorter side.
//! - **Intra-line highlights**: paired lines are diffed again at word or
//!   character granularity.
//! - **Reporting**: JSON, side-by-side terminal and summary output, with
//!   optional context folding.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: the engine. [`TextDiffEngine`] for configured use, and the
//!   free functions [`diff::diff_lines`], [`diff::diff_inline`],
//!   [`diff::align`] and [`diff::compute_side_by_side_diff`].
//! - **[`model`]**: [`DiffChange`], [`SideBySideRow`], [`InlineSpan`] and the
//!   [`SideBySideDiff`] result with its [`DiffSummary`].
//! - **[`reports`]**: generators turning a [`SideBySideDiff`] into text.
//! - **[`config`]**: configuration types, presets and YAML file discovery.
//! - **[`pipeline`]**: load, diff and report stages used by the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use sidediff::model::{DiffLineType, SpanKind};
//! use sidediff::TextDiffEngine;
//!
//! let diff = TextDiffEngine::new()
//!     .diff("hello world", "hello there")
//!     .unwrap();
//!
//! assert_eq!(diff.rows.len(), 1);
//! let row = &diff.rows[0];
//! assert_eq!(row.left_type, DiffLineType::Removed);
//! assert_eq!(row.right_type, DiffLineType::Added);
//!
//! let right = row.right_spans.as_ref().unwrap();
//! assert_eq!(right[1].text, "there");
//! assert_eq!(right[1].kind, SpanKind::Added);
//! ```
//!
//! ### Rendering a report
//!
//! ```
//! use sidediff::reports::{ReportConfig, ReportGenerator, SideBySideReporter};
//! use sidediff::TextDiffEngine;
//!
//! let diff = TextDiffEngine::new().diff("a\nb\n", "a\nc\n").unwrap();
//! let text = SideBySideReporter::new()
//!     .width(60)
//!     .no_colors()
//!     .generate(&diff, &ReportConfig::default())
//!     .unwrap();
//! assert!(text.contains("- b"));
//! assert!(text.contains("+ c"));
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `sidediff` library crate. The `sidediff`
//! binary wraps [`pipeline`] with config-file support and CI exit codes.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64 casts are used for similarity ratios only
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use several bools for toggle flags
    clippy::struct_excessive_bools,
    // Variable names like `left`/`lines` or `i`/`j` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, EngineConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, DiffConfigBuilder};
pub use diff::{
    align, compute_side_by_side_diff, diff_inline, diff_lines, EngineLimits, InlineGranularity,
    TextDiffEngine,
};
pub use error::{InputErrorKind, Result, SideDiffError};
pub use model::{
    ChangeKind, DiffChange, DiffLineType, DiffSummary, InlineDiff, InlineSpan, Side,
    SideBySideDiff, SideBySideRow, SpanKind,
};
pub use reports::{ReportFormat, ReportGenerator};
