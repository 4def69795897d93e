//! Line-level diffing.

use super::matcher::SequenceMatcher;
use super::tokenize::{split_lines, Line};
use crate::error::{Result, SideDiffError};
use crate::model::{ChangeKind, DiffChange, Side};

/// Diff two documents line by line.
///
/// Produces one [`DiffChange`] per line. Within each gap between matched
/// lines, removed lines come before added lines.
#[must_use]
pub fn diff_lines(left: &str, right: &str) -> Vec<DiffChange> {
    diff_lines_with(left, right, &SequenceMatcher::default())
}

/// [`diff_lines`] with an explicit matcher.
#[must_use]
pub fn diff_lines_with(left: &str, right: &str, matcher: &SequenceMatcher) -> Vec<DiffChange> {
    let left_lines = split_lines(left);
    let right_lines = split_lines(right);

    let left_keys: Vec<_> = left_lines.iter().map(Line::key).collect();
    let right_keys: Vec<_> = right_lines.iter().map(Line::key).collect();
    let pairs = matcher.matching_pairs(&left_keys, &right_keys);

    let mut changes = Vec::with_capacity(left_lines.len().max(right_lines.len()));
    let (mut i, mut j) = (0, 0);

    // The sentinel pair flushes the trailing gap.
    let sentinel = (left_lines.len(), right_lines.len());
    for (next_i, next_j) in pairs.into_iter().chain(std::iter::once(sentinel)) {
        changes.extend(
            left_lines[i..next_i]
                .iter()
                .map(|line| DiffChange::removed(line.raw)),
        );
        changes.extend(
            right_lines[j..next_j]
                .iter()
                .map(|line| DiffChange::added(line.raw)),
        );
        if next_i < left_lines.len() {
            changes.push(DiffChange::unchanged(left_lines[next_i].raw));
        }
        i = next_i + 1;
        j = next_j + 1;
    }

    changes
}

/// Diff two byte buffers that must hold UTF-8 text.
///
/// # Errors
///
/// Returns [`SideDiffError::InvalidInput`] naming the offending side when
/// either buffer is not valid UTF-8.
pub fn diff_lines_bytes(left: &[u8], right: &[u8]) -> Result<Vec<DiffChange>> {
    let left = decode(left, Side::Left)?;
    let right = decode(right, Side::Right)?;
    Ok(diff_lines(left, right))
}

/// Decode one side's bytes as UTF-8.
pub(crate) fn decode(bytes: &[u8], side: Side) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| SideDiffError::not_utf8(side, e.valid_up_to()))
}

/// Merge adjacent changes of the same kind.
#[must_use]
pub fn coalesce_changes(changes: &[DiffChange]) -> Vec<DiffChange> {
    let mut merged: Vec<DiffChange> = Vec::new();
    for change in changes {
        match merged.last_mut() {
            Some(last) if last.kind == change.kind => last.value.push_str(&change.value),
            _ => merged.push(change.clone()),
        }
    }
    merged
}

/// Count changes of each kind as `(unchanged, added, removed)`.
#[must_use]
pub fn count_by_kind(changes: &[DiffChange]) -> (usize, usize, usize) {
    changes
        .iter()
        .fold((0, 0, 0), |(u, a, r), change| match change.kind {
            ChangeKind::Unchanged => (u + 1, a, r),
            ChangeKind::Added => (u, a + 1, r),
            ChangeKind::Removed => (u, a, r + 1),
        })
}
