//! Longest-common-subsequence matching over token sequences.
//!
//! The matcher returns index pairs `(i, j)` with `a[i] == b[j]`, strictly
//! increasing in both indices. Among all longest common subsequences it
//! returns the lexicographically earliest one: the first pair has the
//! smallest possible `i`, then the smallest `j` for that `i`, and so on for
//! every following pair.
//!
//! # Algorithm
//!
//! 1. Tokens are interned to `u32` ids so the inner loops compare integers.
//! 2. The common prefix is paired directly.
//! 3. The rest is solved with a suffix LCS table, `O(N·M)` in time and
//!    memory, and an iterative forward walk over that table.
//!
//! The table is capped at `max_table_cells`. Larger regions are split in
//! half along `a` (Hirschberg) using two linear rows of LCS lengths, with an
//! explicit work stack instead of recursion. Halves that fit the budget go
//! back to the table walk. The split column is chosen so the result is the
//! same pair list the table walk would produce, in `O(N + M)` extra memory.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Range;

use super::engine_config::DEFAULT_MAX_TABLE_CELLS;

/// LCS-based sequence matcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMatcher {
    max_table_cells: usize,
}

impl Default for SequenceMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TABLE_CELLS)
    }
}

impl SequenceMatcher {
    /// Create a matcher whose exact table never exceeds `max_table_cells`.
    #[must_use]
    pub const fn new(max_table_cells: usize) -> Self {
        Self { max_table_cells }
    }

    #[must_use]
    pub const fn max_table_cells(&self) -> usize {
        self.max_table_cells
    }

    /// Compute matching index pairs between `a` and `b`.
    pub fn matching_pairs<T: Eq + Hash>(&self, a: &[T], b: &[T]) -> Vec<(usize, usize)> {
        let (a_ids, b_ids) = intern(a, b);

        let prefix = a_ids
            .iter()
            .zip(&b_ids)
            .take_while(|(x, y)| x == y)
            .count();
        let mut pairs: Vec<(usize, usize)> = (0..prefix).map(|i| (i, i)).collect();

        let a_rest = &a_ids[prefix..];
        let b_rest = &b_ids[prefix..];
        if a_rest.is_empty() || b_rest.is_empty() {
            return pairs;
        }

        let middle = if self.fits(a_rest.len(), b_rest.len()) {
            lcs_pairs(a_rest, b_rest)
        } else {
            tracing::debug!(
                left = a_rest.len(),
                right = b_rest.len(),
                max_cells = self.max_table_cells,
                "LCS table over budget, splitting in linear space"
            );
            self.split_pairs(a_rest, b_rest)
        };
        pairs.extend(offset(middle, prefix, prefix));
        pairs
    }

    /// Linear-space LCS by repeated halving of `a`.
    ///
    /// The upper half is solved against `b[..k]` where `k` is the largest
    /// column at which the two halves still add up to an optimal length.
    /// The lower half then starts right after the last pair the upper half
    /// produced, which is where the earliest-match walk would continue.
    fn split_pairs(&self, a: &[u32], b: &[u32]) -> Vec<(usize, usize)> {
        let mut pairs = Vec::new();
        let mut stack = vec![Region::Solve {
            rows: 0..a.len(),
            cols: 0..b.len(),
        }];

        while let Some(region) = stack.pop() {
            match region {
                Region::Lower { rows, cols, mark } => {
                    let start = pairs[mark..].last().map_or(cols.start, |&(_, j)| j + 1);
                    stack.push(Region::Solve {
                        rows,
                        cols: start..cols.end,
                    });
                }
                Region::Solve { rows, cols } => {
                    if rows.is_empty() || cols.is_empty() {
                        continue;
                    }
                    if rows.len() == 1 || self.fits(rows.len(), cols.len()) {
                        let solved = lcs_pairs(&a[rows.clone()], &b[cols.clone()]);
                        pairs.extend(offset(solved, rows.start, cols.start));
                        continue;
                    }

                    let mid = rows.start + rows.len() / 2;
                    let upper = prefix_lengths(&a[rows.start..mid], &b[cols.clone()]);
                    let lower = suffix_lengths(&a[mid..rows.end], &b[cols.clone()]);
                    // max_by_key keeps the last maximum, i.e. the largest column
                    let split = (0..=cols.len())
                        .max_by_key(|&k| upper[k] + lower[k])
                        .unwrap_or(0);

                    stack.push(Region::Lower {
                        rows: mid..rows.end,
                        cols: cols.clone(),
                        mark: pairs.len(),
                    });
                    stack.push(Region::Solve {
                        rows: rows.start..mid,
                        cols: cols.start..cols.start + split,
                    });
                }
            }
        }

        pairs
    }

    fn fits(&self, n: usize, m: usize) -> bool {
        (n + 1)
            .checked_mul(m + 1)
            .is_some_and(|cells| cells <= self.max_table_cells)
    }
}

/// Map tokens of both sequences onto shared integer ids.
fn intern<'a, T: Eq + Hash>(a: &'a [T], b: &'a [T]) -> (Vec<u32>, Vec<u32>) {
    let mut ids: HashMap<&'a T, u32> = HashMap::with_capacity(a.len() + b.len());
    let mut id_of = |token: &'a T| {
        let next = ids.len() as u32;
        *ids.entry(token).or_insert(next)
    };
    let a_ids = a.iter().map(&mut id_of).collect();
    let b_ids = b.iter().map(&mut id_of).collect();
    (a_ids, b_ids)
}

fn offset(
    pairs: Vec<(usize, usize)>,
    a_offset: usize,
    b_offset: usize,
) -> impl Iterator<Item = (usize, usize)> {
    pairs
        .into_iter()
        .map(move |(i, j)| (i + a_offset, j + b_offset))
}

/// Exact LCS with earliest-match ordering.
///
/// `table[i][j]` holds the LCS length of `a[i..]` and `b[j..]`. The walk then
/// repeatedly picks the first row, and within it the first column, whose
/// match still leaves an optimal remainder.
fn lcs_pairs(a: &[u32], b: &[u32]) -> Vec<(usize, usize)> {
    let n = a.len();
    let m = b.len();
    let width = m + 1;
    let mut table = vec![0u32; (n + 1) * width];

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            table[i * width + j] = if a[i] == b[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let at = |i: usize, j: usize| table[i * width + j];
    let mut pairs = Vec::with_capacity(at(0, 0) as usize);
    let (mut i, mut j) = (0, 0);

    while i < n && j < m {
        let remaining = at(i, j);
        if remaining == 0 {
            break;
        }

        let mut next = None;
        'rows: for row in i..n {
            for col in j..m {
                // Lengths only shrink as col grows, so nothing further right fits.
                if at(row + 1, col + 1) + 1 < remaining {
                    break;
                }
                if a[row] == b[col] {
                    next = Some((row, col));
                    break 'rows;
                }
            }
        }

        let Some((row, col)) = next else { break };
        pairs.push((row, col));
        i = row + 1;
        j = col + 1;
    }

    pairs
}

/// Pending work for [`SequenceMatcher::split_pairs`].
enum Region {
    Solve {
        rows: Range<usize>,
        cols: Range<usize>,
    },
    /// Lower half of a split; its first column depends on the pairs emitted
    /// since `mark`.
    Lower {
        rows: Range<usize>,
        cols: Range<usize>,
        mark: usize,
    },
}

/// `lengths[k]` = LCS length of `a` and `b[..k]`, for every `k` in `0..=b.len()`.
fn prefix_lengths(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut prev = vec![0u32; b.len() + 1];
    let mut cur = vec![0u32; b.len() + 1];
    for &token in a {
        for k in 1..=b.len() {
            cur[k] = if token == b[k - 1] {
                prev[k - 1] + 1
            } else {
                prev[k].max(cur[k - 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev
}

/// `lengths[k]` = LCS length of `a` and `b[k..]`, for every `k` in `0..=b.len()`.
fn suffix_lengths(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut prev = vec![0u32; b.len() + 1];
    let mut cur = vec![0u32; b.len() + 1];
    for &token in a.iter().rev() {
        for k in (0..b.len()).rev() {
            cur[k] = if token == b[k] {
                prev[k + 1] + 1
            } else {
                prev[k].max(cur[k + 1])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev
}
