#![no_main]
use libfuzzer_sys::fuzz_target;
use sidediff::diff::{diff_inline_with, InlineGranularity, InlineOptions};

/// Fuzz the intra-line differ at character granularity.
///
/// Both span sequences must reassemble their input line exactly.
fuzz_target!(|input: (&str, &str)| {
    let (left, right) = input;
    let options = InlineOptions::default().with_granularity(InlineGranularity::Char);
    let inline = diff_inline_with(left, right, &options);
    assert_eq!(inline.left_text(), left);
    assert_eq!(inline.right_text(), right);
});
