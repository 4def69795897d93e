//! Intra-line diffing of paired lines.

use super::engine_config::{InlineGranularity, DEFAULT_MAX_INLINE_TOKENS, DEFAULT_MAX_TABLE_CELLS};
use super::matcher::SequenceMatcher;
use crate::model::{InlineDiff, InlineSpan, SpanKind};

/// Options for the intra-line pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineOptions {
    pub granularity: InlineGranularity,
    /// Lines with more tokens than this on either side are not diffed
    /// token by token
    pub max_tokens: usize,
    pub max_table_cells: usize,
}

impl Default for InlineOptions {
    fn default() -> Self {
        Self {
            granularity: InlineGranularity::default(),
            max_tokens: DEFAULT_MAX_INLINE_TOKENS,
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
        }
    }
}

impl InlineOptions {
    #[must_use]
    pub fn with_granularity(mut self, granularity: InlineGranularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// Diff two lines at word granularity.
#[must_use]
pub fn diff_inline(left: &str, right: &str) -> InlineDiff {
    diff_inline_with(left, right, &InlineOptions::default())
}

/// Diff two lines with explicit options.
#[must_use]
pub fn diff_inline_with(left: &str, right: &str, options: &InlineOptions) -> InlineDiff {
    if left.is_empty() || right.is_empty() {
        return wholesale(left, right);
    }

    let tokenizer = options.granularity.tokenizer();
    let left_tokens = tokenizer.tokenize(left);
    let right_tokens = tokenizer.tokenize(right);

    if left_tokens.len() > options.max_tokens || right_tokens.len() > options.max_tokens {
        tracing::debug!(
            left = left_tokens.len(),
            right = right_tokens.len(),
            max_tokens = options.max_tokens,
            tokenizer = tokenizer.name(),
            "inline token cap exceeded, classifying line pair wholesale"
        );
        return wholesale(left, right);
    }

    let pairs = SequenceMatcher::new(options.max_table_cells)
        .matching_pairs(&left_tokens, &right_tokens);

    let mut left_spans = SpanBuilder::default();
    let mut right_spans = SpanBuilder::default();
    let (mut i, mut j) = (0, 0);

    let sentinel = (left_tokens.len(), right_tokens.len());
    for (next_i, next_j) in pairs.into_iter().chain(std::iter::once(sentinel)) {
        for token in &left_tokens[i..next_i] {
            left_spans.push(token, SpanKind::Removed);
        }
        for token in &right_tokens[j..next_j] {
            right_spans.push(token, SpanKind::Added);
        }
        if next_i < left_tokens.len() {
            left_spans.push(left_tokens[next_i], SpanKind::Equal);
            right_spans.push(right_tokens[next_j], SpanKind::Equal);
        }
        i = next_i + 1;
        j = next_j + 1;
    }

    InlineDiff {
        left_spans: left_spans.finish(),
        right_spans: right_spans.finish(),
    }
}

/// Whole-line spans: the left line removed, the right line added.
fn wholesale(left: &str, right: &str) -> InlineDiff {
    let side = |text: &str, kind| {
        if text.is_empty() {
            Vec::new()
        } else {
            vec![InlineSpan {
                text: text.to_string(),
                kind,
            }]
        }
    };
    InlineDiff {
        left_spans: side(left, SpanKind::Removed),
        right_spans: side(right, SpanKind::Added),
    }
}

/// Accumulates tokens, merging adjacent tokens of the same kind.
#[derive(Default)]
struct SpanBuilder {
    spans: Vec<InlineSpan>,
}

impl SpanBuilder {
    fn push(&mut self, token: &str, kind: SpanKind) {
        match self.spans.last_mut() {
            Some(last) if last.kind == kind => last.text.push_str(token),
            _ => self.spans.push(InlineSpan {
                text: token.to_string(),
                kind,
            }),
        }
    }

    fn finish(self) -> Vec<InlineSpan> {
        self.spans
    }
}
