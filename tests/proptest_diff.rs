//! Property-based tests for the line differ, alignment and inline spans.

use proptest::prelude::*;
use sidediff::diff::{
    align, diff_inline, diff_inline_with, diff_lines, InlineGranularity, InlineOptions,
    SequenceMatcher,
};
use sidediff::model::{left_text, right_text, ChangeKind, DiffLineType, InlineSpan, SpanKind};
use sidediff::TextDiffEngine;

/// Documents built from a small alphabet so that lines repeat often.
fn document() -> impl Strategy<Value = String> {
    prop::collection::vec("[abc]{0,3}", 0..20).prop_map(|lines| lines.join("\n"))
}

/// Documents mixing `\n` and `\r\n`, optionally without a final terminator.
fn mixed_document() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(("[abc]{0,3}", prop::bool::ANY), 0..20),
        prop::bool::ANY,
    )
        .prop_map(|(lines, unterminated)| {
            let mut text = String::new();
            for (line, crlf) in &lines {
                text.push_str(line);
                text.push_str(if *crlf { "\r\n" } else { "\n" });
            }
            if unterminated {
                let cut = text
                    .strip_suffix("\r\n")
                    .or_else(|| text.strip_suffix('\n'))
                    .map(str::len);
                if let Some(len) = cut {
                    text.truncate(len);
                }
            }
            text
        })
}

fn line_count(text: &str) -> usize {
    text.split_inclusive('\n').count()
}

fn side_text(spans: &[InlineSpan], skip: SpanKind) -> String {
    spans
        .iter()
        .filter(|s| s.kind != skip)
        .map(|s| s.text.as_str())
        .collect()
}

fn equal_len(spans: &[InlineSpan]) -> usize {
    spans
        .iter()
        .filter(|s| s.kind == SpanKind::Equal)
        .map(|s| s.text.len())
        .sum()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn changes_reconstruct_both_documents(left in document(), right in document()) {
        let changes = diff_lines(&left, &right);
        prop_assert_eq!(left_text(&changes), left);
        prop_assert_eq!(right_text(&changes), right);
    }

    #[test]
    fn mixed_terminators_cover_every_line(left in mixed_document(), right in mixed_document()) {
        let changes = diff_lines(&left, &right);
        prop_assert_eq!(left_text(&changes), left.clone());
        prop_assert_eq!(
            right_text(&changes).replace("\r\n", "\n"),
            right.replace("\r\n", "\n")
        );

        let rows = align(&changes);
        let left_nums: Vec<usize> = rows.iter().filter_map(|r| r.left_line_num).collect();
        let right_nums: Vec<usize> = rows.iter().filter_map(|r| r.right_line_num).collect();
        prop_assert_eq!(left_nums, (1..=line_count(&left)).collect::<Vec<_>>());
        prop_assert_eq!(right_nums, (1..=line_count(&right)).collect::<Vec<_>>());
        prop_assert!(rows
            .iter()
            .all(|r| !r.left_content.ends_with('\r') && !r.right_content.ends_with('\r')));
    }

    #[test]
    fn table_budget_never_changes_matches(
        a in prop::collection::vec(0u8..4, 0..40),
        b in prop::collection::vec(0u8..4, 0..40),
        max_cells in 1usize..64,
    ) {
        let exact = SequenceMatcher::default().matching_pairs(&a, &b);
        let split = SequenceMatcher::new(max_cells).matching_pairs(&a, &b);
        prop_assert_eq!(split, exact);
    }

    #[test]
    fn removals_precede_additions_within_a_gap(left in document(), right in document()) {
        let changes = diff_lines(&left, &right);
        for pair in changes.windows(2) {
            prop_assert!(
                !(pair[0].kind == ChangeKind::Added && pair[1].kind == ChangeKind::Removed),
                "added line followed by removed line: {:?}",
                pair
            );
        }
    }

    #[test]
    fn rows_cover_every_line_once(left in document(), right in document()) {
        let rows = align(&diff_lines(&left, &right));

        let left_rows = rows.iter().filter(|r| r.left_type != DiffLineType::Empty).count();
        let right_rows = rows.iter().filter(|r| r.right_type != DiffLineType::Empty).count();
        prop_assert_eq!(left_rows, line_count(&left));
        prop_assert_eq!(right_rows, line_count(&right));

        for row in &rows {
            prop_assert_eq!(row.left_line_num.is_none(), row.left_type == DiffLineType::Empty);
            prop_assert_eq!(row.right_line_num.is_none(), row.right_type == DiffLineType::Empty);
        }
    }

    #[test]
    fn line_numbers_increase_by_one(left in document(), right in document()) {
        let rows = align(&diff_lines(&left, &right));

        let left_nums: Vec<usize> = rows.iter().filter_map(|r| r.left_line_num).collect();
        let right_nums: Vec<usize> = rows.iter().filter_map(|r| r.right_line_num).collect();
        prop_assert_eq!(left_nums, (1..=line_count(&left)).collect::<Vec<_>>());
        prop_assert_eq!(right_nums, (1..=line_count(&right)).collect::<Vec<_>>());
    }

    #[test]
    fn spans_reassemble_row_content(left in document(), right in document()) {
        let rows = align(&diff_lines(&left, &right));
        for row in rows.iter().filter(|r| r.is_modified()) {
            if let Some(spans) = &row.left_spans {
                prop_assert_eq!(side_text(spans, SpanKind::Added), row.left_content.clone());
            }
            if let Some(spans) = &row.right_spans {
                prop_assert_eq!(side_text(spans, SpanKind::Removed), row.right_content.clone());
            }
        }
    }

    #[test]
    fn diff_is_deterministic(left in document(), right in document()) {
        let engine = TextDiffEngine::new();
        let first = engine.diff(&left, &right).unwrap();
        let second = engine.diff(&left, &right).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn identical_documents_have_no_changes(text in document()) {
        let changes = diff_lines(&text, &text);
        prop_assert!(changes.iter().all(|c| c.kind == ChangeKind::Unchanged));

        let diff = TextDiffEngine::new().diff(&text, &text).unwrap();
        prop_assert!(!diff.has_changes());
        prop_assert!((diff.summary.similarity - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn inline_spans_reassemble_lines(left in "[a-c ]{0,12}", right in "[a-c ]{0,12}") {
        for granularity in [InlineGranularity::Word, InlineGranularity::Char] {
            let options = InlineOptions::default().with_granularity(granularity);
            let inline = diff_inline_with(&left, &right, &options);
            prop_assert_eq!(side_text(&inline.left_spans, SpanKind::Added), left.clone());
            prop_assert_eq!(side_text(&inline.right_spans, SpanKind::Removed), right.clone());
            prop_assert!(inline.left_spans.iter().all(|s| s.kind != SpanKind::Added));
            prop_assert!(inline.right_spans.iter().all(|s| s.kind != SpanKind::Removed));
        }
    }

    #[test]
    fn char_granularity_matches_at_least_as_much(left in "[a-c ]{0,12}", right in "[a-c ]{0,12}") {
        let word = diff_inline(&left, &right);
        let char_options = InlineOptions::default().with_granularity(InlineGranularity::Char);
        let chars = diff_inline_with(&left, &right, &char_options);

        prop_assert!(equal_len(&chars.left_spans) >= equal_len(&word.left_spans));
        prop_assert_eq!(equal_len(&chars.left_spans), equal_len(&chars.right_spans));
    }
}
