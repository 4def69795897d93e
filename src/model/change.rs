//! Line-level change records produced by the line differ.

use serde::{Deserialize, Serialize};

/// Classification of a line-level change.
///
/// A change is present in exactly one of three states, so the "added and
/// removed at once" combination cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Line present in both documents
    Unchanged,
    /// Line present only in the right document
    Added,
    /// Line present only in the left document
    Removed,
}

impl ChangeKind {
    /// Whether text of this kind belongs to the left document.
    #[must_use]
    pub const fn in_left(self) -> bool {
        !matches!(self, Self::Added)
    }

    /// Whether text of this kind belongs to the right document.
    #[must_use]
    pub const fn in_right(self) -> bool {
        !matches!(self, Self::Removed)
    }

    /// Unified-diff style marker for this kind.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unchanged => ' ',
            Self::Added => '+',
            Self::Removed => '-',
        }
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unchanged => write!(f, "unchanged"),
            Self::Added => write!(f, "added"),
            Self::Removed => write!(f, "removed"),
        }
    }
}

/// A run of source text together with its classification.
///
/// `value` keeps the original line terminator, so concatenating the values
/// of one side gives that side's text back. For [`ChangeKind::Unchanged`]
/// the value is taken from the left document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffChange {
    pub value: String,
    pub kind: ChangeKind,
}

impl DiffChange {
    pub fn unchanged(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Unchanged,
        }
    }

    pub fn added(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Added,
        }
    }

    pub fn removed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            kind: ChangeKind::Removed,
        }
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.kind == ChangeKind::Unchanged
    }

    #[must_use]
    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    #[must_use]
    pub fn is_removed(&self) -> bool {
        self.kind == ChangeKind::Removed
    }

    /// The value with a single trailing `\n` or `\r\n` removed.
    #[must_use]
    pub fn text(&self) -> &str {
        let value = self.value.strip_suffix('\n').unwrap_or(&self.value);
        value.strip_suffix('\r').unwrap_or(value)
    }
}

/// Rebuild the left document from a change list.
#[must_use]
pub fn left_text(changes: &[DiffChange]) -> String {
    changes
        .iter()
        .filter(|c| c.kind.in_left())
        .map(|c| c.value.as_str())
        .collect()
}

/// Rebuild the right document from a change list.
///
/// Unchanged values carry the left document's line terminators. When the
/// two documents mix `\n` and `\r\n` on matching lines, the result has the
/// right document's content with the left document's terminators on those
/// lines, so it equals the right input only up to terminator style.
#[must_use]
pub fn right_text(changes: &[DiffChange]) -> String {
    changes
        .iter()
        .filter(|c| c.kind.in_right())
        .map(|c| c.value.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_sides() {
        assert!(ChangeKind::Unchanged.in_left());
        assert!(ChangeKind::Unchanged.in_right());
        assert!(!ChangeKind::Added.in_left());
        assert!(ChangeKind::Added.in_right());
        assert!(ChangeKind::Removed.in_left());
        assert!(!ChangeKind::Removed.in_right());
    }

    #[test]
    fn test_text_strips_terminator() {
        assert_eq!(DiffChange::unchanged("a\n").text(), "a");
        assert_eq!(DiffChange::unchanged("a\r\n").text(), "a");
        assert_eq!(DiffChange::unchanged("a").text(), "a");
        assert_eq!(DiffChange::unchanged("\n").text(), "");
    }

    #[test]
    fn test_side_reconstruction() {
        let changes = vec![
            DiffChange::unchanged("a\n"),
            DiffChange::removed("b\n"),
            DiffChange::added("x\n"),
            DiffChange::unchanged("c"),
        ];
        assert_eq!(left_text(&changes), "a\nb\nc");
        assert_eq!(right_text(&changes), "a\nx\nc");
    }

    #[test]
    fn test_serde_kind_lowercase() {
        let json = serde_json::to_string(&DiffChange::added("x")).unwrap();
        assert_eq!(json, r#"{"value":"x","kind":"added"}"#);
    }
}
