//! Grouping of changed rows into hunks with surrounding context.

use crate::model::SideBySideRow;
use serde::{Deserialize, Serialize};

/// Half-open row range `[start, end)` covering changes plus context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub start: usize,
    pub end: usize,
}

impl Hunk {
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The rows this hunk covers.
    #[must_use]
    pub fn rows<'r>(&self, rows: &'r [SideBySideRow]) -> &'r [SideBySideRow] {
        &rows[self.start..self.end]
    }
}

/// Group changed rows into hunks, keeping `context` unchanged rows on each
/// side. Hunks whose context would touch or overlap are merged.
#[must_use]
pub fn hunks(rows: &[SideBySideRow], context: usize) -> Vec<Hunk> {
    let mut result: Vec<Hunk> = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        if !row.is_change() {
            continue;
        }
        let start = idx.saturating_sub(context);
        let end = (idx + 1 + context).min(rows.len());
        match result.last_mut() {
            Some(last) if start <= last.end => last.end = last.end.max(end),
            _ => result.push(Hunk { start, end }),
        }
    }

    result
}
