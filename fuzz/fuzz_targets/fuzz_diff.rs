#![no_main]
use libfuzzer_sys::fuzz_target;
use sidediff::diff::{align, diff_lines_bytes};
use sidediff::model::DiffLineType;

/// Fuzz the byte-level entry point and the aligner.
///
/// Splits the input at the first NUL byte into a left and a right document.
/// Non-UTF-8 halves must be rejected with an error; valid halves must align
/// into rows that cover every line of both sides.
fuzz_target!(|data: &[u8]| {
    let split = data.iter().position(|&b| b == 0).unwrap_or(data.len());
    let (left, right) = data.split_at(split);
    let right = right.get(1..).unwrap_or_default();

    let Ok(changes) = diff_lines_bytes(left, right) else {
        return;
    };
    let rows = align(&changes);

    let left_rows = rows
        .iter()
        .filter(|r| r.left_type != DiffLineType::Empty)
        .count();
    let right_rows = rows
        .iter()
        .filter(|r| r.right_type != DiffLineType::Empty)
        .count();
    let left_lines = changes.iter().filter(|c| !c.is_added()).count();
    let right_lines = changes.iter().filter(|c| !c.is_removed()).count();
    assert_eq!(left_rows, left_lines);
    assert_eq!(right_rows, right_lines);
});
