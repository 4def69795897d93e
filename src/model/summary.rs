//! Aggregate statistics over a side-by-side diff.

use super::{DiffLineType, SideBySideRow};
use serde::{Deserialize, Serialize};

/// Counts derived from a row sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffSummary {
    /// Lines in the left document
    pub left_lines: usize,
    /// Lines in the right document
    pub right_lines: usize,
    /// Rows present unchanged on both sides
    pub unchanged: usize,
    /// Right lines without a left counterpart
    pub added: usize,
    /// Left lines without a right counterpart
    pub removed: usize,
    /// Removed lines paired with added lines
    pub modified: usize,
    /// `added + removed + modified`
    pub total_changes: usize,
    /// `2 * unchanged / (left_lines + right_lines)`, 1.0 for two empty documents
    pub similarity: f64,
}

impl DiffSummary {
    #[must_use]
    pub fn from_rows(rows: &[SideBySideRow]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            if row.left_type != DiffLineType::Empty {
                summary.left_lines += 1;
            }
            if row.right_type != DiffLineType::Empty {
                summary.right_lines += 1;
            }
            match (row.left_type, row.right_type) {
                (DiffLineType::Unchanged, DiffLineType::Unchanged) => summary.unchanged += 1,
                (DiffLineType::Removed, DiffLineType::Added) => summary.modified += 1,
                (DiffLineType::Removed, _) => summary.removed += 1,
                (_, DiffLineType::Added) => summary.added += 1,
                _ => {}
            }
        }
        summary.total_changes = summary.added + summary.removed + summary.modified;
        let total_lines = summary.left_lines + summary.right_lines;
        summary.similarity = if total_lines == 0 {
            1.0
        } else {
            (2 * summary.unchanged) as f64 / total_lines as f64
        };
        summary
    }

    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.total_changes > 0
    }
}

/// Result of a full side-by-side diff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SideBySideDiff {
    pub rows: Vec<SideBySideRow>,
    pub summary: DiffSummary,
}

impl SideBySideDiff {
    #[must_use]
    pub fn from_rows(rows: Vec<SideBySideRow>) -> Self {
        let summary = DiffSummary::from_rows(&rows);
        Self { rows, summary }
    }

    #[must_use]
    pub const fn has_changes(&self) -> bool {
        self.summary.has_changes()
    }
}
