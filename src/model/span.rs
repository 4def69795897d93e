//! Intra-line spans.

use serde::{Deserialize, Serialize};

/// Classification of a span within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Equal,
    Added,
    Removed,
}

/// A contiguous run of same-kind tokens within one line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineSpan {
    pub text: String,
    #[serde(rename = "type")]
    pub kind: SpanKind,
}

impl InlineSpan {
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Equal,
        }
    }

    pub fn added(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Added,
        }
    }

    pub fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: SpanKind::Removed,
        }
    }

    #[must_use]
    pub fn is_equal(&self) -> bool {
        self.kind == SpanKind::Equal
    }
}

/// Span sequences for both sides of a paired line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineDiff {
    pub left_spans: Vec<InlineSpan>,
    pub right_spans: Vec<InlineSpan>,
}

impl InlineDiff {
    /// True when at least one span on either side is not equal.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.left_spans
            .iter()
            .chain(&self.right_spans)
            .any(|s| !s.is_equal())
    }

    /// Concatenated text of the left spans.
    #[must_use]
    pub fn left_text(&self) -> String {
        self.left_spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Concatenated text of the right spans.
    #[must_use]
    pub fn right_text(&self) -> String {
        self.right_spans.iter().map(|s| s.text.as_str()).collect()
    }
}
