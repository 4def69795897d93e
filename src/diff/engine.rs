//! Text diff engine implementation.

use super::align::align_with;
use super::engine_config::{EngineLimits, InlineGranularity};
use super::inline::InlineOptions;
use super::lines::{decode, diff_lines_with};
use super::matcher::SequenceMatcher;
use super::tokenize::split_lines;
use crate::error::{Result, SideDiffError};
use crate::model::{DiffChange, Side, SideBySideDiff, SideBySideRow};
use rayon::prelude::*;

/// Side-by-side diff engine for comparing text documents.
///
/// The engine holds configuration only; every call is independent, so one
/// engine can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TextDiffEngine {
    limits: EngineLimits,
    granularity: InlineGranularity,
}

impl TextDiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set resource limits
    #[must_use]
    pub fn with_limits(mut self, limits: EngineLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Set the intra-line token granularity
    #[must_use]
    pub fn with_granularity(mut self, granularity: InlineGranularity) -> Self {
        self.granularity = granularity;
        self
    }

    #[must_use]
    pub const fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    #[must_use]
    pub const fn granularity(&self) -> InlineGranularity {
        self.granularity
    }

    /// Compare two documents and return rows plus summary.
    ///
    /// # Errors
    ///
    /// Returns [`SideDiffError::InvalidInput`] when either document exceeds
    /// [`EngineLimits::max_input_bytes`].
    pub fn diff(&self, left: &str, right: &str) -> Result<SideBySideDiff> {
        self.check_size(left, Side::Left)?;
        self.check_size(right, Side::Right)?;

        if left == right {
            tracing::debug!(bytes = left.len(), "inputs are identical");
            return Ok(SideBySideDiff::from_rows(identical_rows(left)));
        }

        let changes = diff_lines_with(left, right, &self.matcher());
        let rows = align_with(&changes, &self.inline_options());
        let diff = SideBySideDiff::from_rows(rows);

        tracing::debug!(
            left_lines = diff.summary.left_lines,
            right_lines = diff.summary.right_lines,
            changes = diff.summary.total_changes,
            "diff complete"
        );
        Ok(diff)
    }

    /// Compare two byte buffers holding UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`SideDiffError::InvalidInput`] when either buffer is not
    /// UTF-8 or exceeds the size limit.
    pub fn diff_bytes(&self, left: &[u8], right: &[u8]) -> Result<SideBySideDiff> {
        let left = decode(left, Side::Left)?;
        let right = decode(right, Side::Right)?;
        self.diff(left, right)
    }

    /// Line-level changes only, without alignment.
    ///
    /// # Errors
    ///
    /// Returns [`SideDiffError::InvalidInput`] when either document exceeds
    /// the size limit.
    pub fn changes(&self, left: &str, right: &str) -> Result<Vec<DiffChange>> {
        self.check_size(left, Side::Left)?;
        self.check_size(right, Side::Right)?;
        Ok(diff_lines_with(left, right, &self.matcher()))
    }

    /// Diff independent document pairs in parallel.
    ///
    /// Results keep the order of `pairs`; a failing pair does not affect
    /// the others.
    pub fn diff_many<S: AsRef<str> + Sync>(&self, pairs: &[(S, S)]) -> Vec<Result<SideBySideDiff>> {
        tracing::debug!(pairs = pairs.len(), "diffing document pairs in parallel");
        pairs
            .par_iter()
            .map(|(left, right)| self.diff(left.as_ref(), right.as_ref()))
            .collect()
    }

    fn check_size(&self, text: &str, side: Side) -> Result<()> {
        if text.len() > self.limits.max_input_bytes {
            return Err(SideDiffError::too_large(
                side,
                text.len(),
                self.limits.max_input_bytes,
            ));
        }
        Ok(())
    }

    const fn matcher(&self) -> SequenceMatcher {
        SequenceMatcher::new(self.limits.max_table_cells)
    }

    const fn inline_options(&self) -> InlineOptions {
        InlineOptions {
            granularity: self.granularity,
            max_tokens: self.limits.max_inline_tokens,
            max_table_cells: self.limits.max_table_cells,
        }
    }
}

/// Rows for two identical documents.
fn identical_rows(text: &str) -> Vec<SideBySideRow> {
    split_lines(text)
        .iter()
        .enumerate()
        .map(|(idx, line)| SideBySideRow::unchanged(idx + 1, idx + 1, line.content))
        .collect()
}
