//! Side-by-side rows.

use super::{InlineDiff, InlineSpan, Side};
use serde::{Deserialize, Serialize};

/// Classification of one half of a side-by-side row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffLineType {
    Added,
    Removed,
    Unchanged,
    /// Placeholder with no source line behind it
    Empty,
}

/// One row of a two-column diff view.
///
/// `left_line_num` is `None` exactly when `left_type` is
/// [`DiffLineType::Empty`]; the same holds for the right side. Spans are only
/// populated for paired modified lines that differ at token level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SideBySideRow {
    pub left_line_num: Option<usize>,
    pub left_content: String,
    pub left_type: DiffLineType,
    pub left_spans: Option<Vec<InlineSpan>>,
    pub right_line_num: Option<usize>,
    pub right_content: String,
    pub right_type: DiffLineType,
    pub right_spans: Option<Vec<InlineSpan>>,
}

impl SideBySideRow {
    /// A line present unchanged on both sides.
    pub fn unchanged(left_num: usize, right_num: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            left_line_num: Some(left_num),
            left_content: content.clone(),
            left_type: DiffLineType::Unchanged,
            left_spans: None,
            right_line_num: Some(right_num),
            right_content: content,
            right_type: DiffLineType::Unchanged,
            right_spans: None,
        }
    }

    /// A removed line paired with an added line.
    ///
    /// Spans are attached only when `inline` reports a token-level change.
    pub fn modified(
        left_num: usize,
        left_content: impl Into<String>,
        right_num: usize,
        right_content: impl Into<String>,
        inline: InlineDiff,
    ) -> Self {
        let (left_spans, right_spans) = if inline.has_changes() {
            (Some(inline.left_spans), Some(inline.right_spans))
        } else {
            (None, None)
        };
        Self {
            left_line_num: Some(left_num),
            left_content: left_content.into(),
            left_type: DiffLineType::Removed,
            left_spans,
            right_line_num: Some(right_num),
            right_content: right_content.into(),
            right_type: DiffLineType::Added,
            right_spans,
        }
    }

    /// A removed line with an empty placeholder on the right.
    pub fn left_only(left_num: usize, content: impl Into<String>) -> Self {
        Self {
            left_line_num: Some(left_num),
            left_content: content.into(),
            left_type: DiffLineType::Removed,
            left_spans: None,
            right_line_num: None,
            right_content: String::new(),
            right_type: DiffLineType::Empty,
            right_spans: None,
        }
    }

    /// An added line with an empty placeholder on the left.
    pub fn right_only(right_num: usize, content: impl Into<String>) -> Self {
        Self {
            left_line_num: None,
            left_content: String::new(),
            left_type: DiffLineType::Empty,
            left_spans: None,
            right_line_num: Some(right_num),
            right_content: content.into(),
            right_type: DiffLineType::Added,
            right_spans: None,
        }
    }

    /// Whether this row shows a difference on either side.
    #[must_use]
    pub fn is_change(&self) -> bool {
        self.left_type != DiffLineType::Unchanged || self.right_type != DiffLineType::Unchanged
    }

    /// Both sides carry a source line and at least one of them changed.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.left_type == DiffLineType::Removed && self.right_type == DiffLineType::Added
    }

    #[must_use]
    pub fn line_num(&self, side: Side) -> Option<usize> {
        match side {
            Side::Left => self.left_line_num,
            Side::Right => self.right_line_num,
        }
    }

    #[must_use]
    pub fn line_type(&self, side: Side) -> DiffLineType {
        match side {
            Side::Left => self.left_type,
            Side::Right => self.right_type,
        }
    }

    #[must_use]
    pub fn content(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.left_content,
            Side::Right => &self.right_content,
        }
    }

    #[must_use]
    pub fn spans(&self, side: Side) -> Option<&[InlineSpan]> {
        match side {
            Side::Left => self.left_spans.as_deref(),
            Side::Right => self.right_spans.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_rows_have_no_line_number() {
        let row = SideBySideRow::left_only(3, "gone");
        assert_eq!(row.left_line_num, Some(3));
        assert_eq!(row.right_line_num, None);
        assert_eq!(row.right_type, DiffLineType::Empty);
        assert!(row.is_change());
        assert!(!row.is_modified());

        let row = SideBySideRow::right_only(7, "new");
        assert_eq!(row.left_line_num, None);
        assert_eq!(row.left_type, DiffLineType::Empty);
        assert_eq!(row.line_num(Side::Right), Some(7));
    }

    #[test]
    fn test_modified_drops_all_equal_spans() {
        let inline = InlineDiff {
            left_spans: vec![InlineSpan::equal("same")],
            right_spans: vec![InlineSpan::equal("same")],
        };
        let row = SideBySideRow::modified(1, "same", 1, "same", inline);
        assert!(row.left_spans.is_none());
        assert!(row.right_spans.is_none());
        assert!(row.is_modified());
    }

    #[test]
    fn test_row_json_shape() {
        let row = SideBySideRow::unchanged(1, 1, "a");
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["leftLineNum"], 1);
        assert_eq!(value["leftType"], "unchanged");
        assert!(value["leftSpans"].is_null());
        assert_eq!(value["rightContent"], "a");
    }
}
