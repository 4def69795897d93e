//! Alignment of a change stream into side-by-side rows.
//!
//! Unchanged lines become one row each. A run of removed changes followed
//! by a run of added changes forms a change block whose lines are paired by
//! position; pairs get intra-line spans and any excess lines sit next to an
//! empty placeholder.

use super::inline::{diff_inline_with, InlineOptions};
use super::tokenize::split_lines;
use crate::model::{ChangeKind, DiffChange, SideBySideRow};

/// Align changes into rows using default inline options.
#[must_use]
pub fn align(changes: &[DiffChange]) -> Vec<SideBySideRow> {
    align_with(changes, &InlineOptions::default())
}

/// Align changes into rows.
///
/// Accepts both one change per line and coalesced multi-line changes.
#[must_use]
pub fn align_with(changes: &[DiffChange], options: &InlineOptions) -> Vec<SideBySideRow> {
    let mut aligner = Aligner::new(options);
    let mut idx = 0;

    while idx < changes.len() {
        let change = &changes[idx];
        if change.kind == ChangeKind::Unchanged {
            aligner.unchanged(&change.value);
            idx += 1;
            continue;
        }

        let removed_end = run_end(changes, idx, ChangeKind::Removed);
        let added_end = run_end(changes, removed_end, ChangeKind::Added);
        aligner.block(&changes[idx..removed_end], &changes[removed_end..added_end]);
        idx = added_end;
    }

    debug_assert_eq!(
        (aligner.left_num, aligner.right_num),
        side_line_counts(changes),
        "row counters out of sync with the change stream"
    );
    aligner.rows
}

/// Number of source lines each side of a change stream covers.
fn side_line_counts(changes: &[DiffChange]) -> (usize, usize) {
    changes.iter().fold((0, 0), |(left, right), change| {
        let lines = split_lines(&change.value).len();
        (
            left + if change.kind.in_left() { lines } else { 0 },
            right + if change.kind.in_right() { lines } else { 0 },
        )
    })
}

/// End of the run of `kind` changes starting at `start`.
fn run_end(changes: &[DiffChange], start: usize, kind: ChangeKind) -> usize {
    changes[start..]
        .iter()
        .position(|c| c.kind != kind)
        .map_or(changes.len(), |offset| start + offset)
}

/// Row builder holding the per-side line counters.
struct Aligner<'o> {
    options: &'o InlineOptions,
    rows: Vec<SideBySideRow>,
    left_num: usize,
    right_num: usize,
}

impl<'o> Aligner<'o> {
    const fn new(options: &'o InlineOptions) -> Self {
        Self {
            options,
            rows: Vec::new(),
            left_num: 0,
            right_num: 0,
        }
    }

    fn unchanged(&mut self, value: &str) {
        for line in split_lines(value) {
            self.left_num += 1;
            self.right_num += 1;
            self.rows.push(SideBySideRow::unchanged(
                self.left_num,
                self.right_num,
                line.content,
            ));
        }
    }

    fn block(&mut self, removed: &[DiffChange], added: &[DiffChange]) {
        let left_lines = block_lines(removed);
        let right_lines = block_lines(added);
        let paired = left_lines.len().min(right_lines.len());

        for (left, right) in left_lines.iter().zip(&right_lines) {
            self.left_num += 1;
            self.right_num += 1;
            let inline = diff_inline_with(left, right, self.options);
            self.rows.push(SideBySideRow::modified(
                self.left_num,
                *left,
                self.right_num,
                *right,
                inline,
            ));
        }

        for left in &left_lines[paired..] {
            self.left_num += 1;
            self.rows.push(SideBySideRow::left_only(self.left_num, *left));
        }
        for right in &right_lines[paired..] {
            self.right_num += 1;
            self.rows.push(SideBySideRow::right_only(self.right_num, *right));
        }
    }
}

/// Line contents of a run of changes, terminators stripped.
fn block_lines(changes: &[DiffChange]) -> Vec<&str> {
    changes
        .iter()
        .flat_map(|change| split_lines(&change.value))
        .map(|line| line.content)
        .collect()
}
