//! Line and intra-line diffing with side-by-side alignment.
//!
//! # Architecture
//!
//! Data flows leaf-first through small, stateless stages:
//!
//! - [`tokenize`]: splits documents into lines and lines into tokens
//! - [`SequenceMatcher`]: LCS over interned token sequences
//! - [`diff_lines`]: one [`DiffChange`](crate::model::DiffChange) per line
//! - [`diff_inline`]: word or character spans for a paired line
//! - [`align`]: groups changes into blocks and emits
//!   [`SideBySideRow`](crate::model::SideBySideRow)s
//!
//! [`TextDiffEngine`] wraps the stages with resource limits and a rayon-backed
//! batch mode.
//!
//! # Example
//!
//! ```
//! use sidediff::diff::compute_side_by_side_diff;
//! use sidediff::model::DiffLineType;
//!
//! let rows = compute_side_by_side_diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(rows.len(), 3);
//! assert_eq!(rows[1].left_type, DiffLineType::Removed);
//! assert_eq!(rows[1].right_type, DiffLineType::Added);
//! ```

mod align;
mod engine;
mod engine_config;
mod hunks;
mod inline;
mod lines;
mod matcher;
pub mod tokenize;
pub mod traits;

pub use align::{align, align_with};
pub use engine::TextDiffEngine;
pub use engine_config::{
    EngineLimits, InlineGranularity, DEFAULT_MAX_INLINE_TOKENS, DEFAULT_MAX_INPUT_BYTES,
    DEFAULT_MAX_TABLE_CELLS,
};
pub use hunks::{hunks, Hunk};
pub use inline::{diff_inline, diff_inline_with, InlineOptions};
pub use lines::{coalesce_changes, count_by_kind, diff_lines, diff_lines_bytes, diff_lines_with};
pub use matcher::SequenceMatcher;
pub use traits::{CharTokenizer, Tokenizer, WordTokenizer};

use crate::model::SideBySideRow;

/// Line diff followed by alignment, with default options.
#[must_use]
pub fn compute_side_by_side_diff(left: &str, right: &str) -> Vec<SideBySideRow> {
    align(&diff_lines(left, right))
}
