//! Side-by-side two-column terminal output.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::hunks;
use crate::model::{DiffLineType, InlineSpan, Side, SideBySideDiff, SideBySideRow, SpanKind};
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

/// ANSI color codes
mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const RED_EMPHASIS: &str = "\x1b[1;97;41m";
    pub const GREEN_EMPHASIS: &str = "\x1b[1;97;42m";
    pub const LINE_NUM: &str = "\x1b[38;5;242m"; // Gray for line numbers
}

const DEFAULT_WIDTH: usize = 120;
const TAB: &str = "    ";
const SEPARATOR: &str = " │ ";

/// Side-by-side diff reporter
pub struct SideBySideReporter {
    /// Total output width
    width: usize,
    /// Use colors
    use_colors: bool,
}

impl SideBySideReporter {
    /// Create a new side-by-side reporter
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: terminal_width().unwrap_or(DEFAULT_WIDTH),
            use_colors: true,
        }
    }

    /// Set terminal width
    #[must_use]
    pub const fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Disable colors
    #[must_use]
    pub const fn no_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    const fn col(&self, code: &'static str) -> &'static str {
        if self.use_colors {
            code
        } else {
            ""
        }
    }

    fn format_header(&self, out: &mut String, layout: &Layout, left: &str, right: &str) -> std::fmt::Result {
        let half = layout.half_width();
        writeln!(
            out,
            "{}{}{}{}{}{}{}",
            self.col(colors::BOLD),
            fit(left, half),
            self.col(colors::RESET),
            SEPARATOR,
            self.col(colors::BOLD),
            fit(right, half),
            self.col(colors::RESET),
        )?;
        writeln!(
            out,
            "{}{}─┼─{}{}",
            self.col(colors::DIM),
            "─".repeat(half),
            "─".repeat(half),
            self.col(colors::RESET),
        )
    }

    fn format_fold(&self, out: &mut String, skipped: usize) -> std::fmt::Result {
        let noun = if skipped == 1 { "line" } else { "lines" };
        writeln!(
            out,
            "{}⋯ {skipped} unchanged {noun}{}",
            self.col(colors::DIM),
            self.col(colors::RESET),
        )
    }

    fn format_row(&self, out: &mut String, layout: &Layout, row: &SideBySideRow) -> std::fmt::Result {
        self.format_half(out, layout, row, Side::Left, true)?;
        out.push_str(SEPARATOR);
        let right_start = out.len();
        // The right column is not padded; content keeps its own whitespace
        let has_content = self.format_half(out, layout, row, Side::Right, false)?;
        if !has_content {
            let gutter_end = out.trim_end_matches(' ').len().max(right_start);
            out.truncate(gutter_end);
        }
        out.push('\n');
        Ok(())
    }

    fn format_half(
        &self,
        out: &mut String,
        layout: &Layout,
        row: &SideBySideRow,
        side: Side,
        pad: bool,
    ) -> Result<bool, std::fmt::Error> {
        let line_type = row.line_type(side);

        if layout.show_line_numbers {
            match row.line_num(side) {
                Some(num) => write!(
                    out,
                    "{}{:>width$}{} ",
                    self.col(colors::LINE_NUM),
                    num,
                    self.col(colors::RESET),
                    width = layout.num_width
                )?,
                None => write!(out, "{:>width$} ", "", width = layout.num_width)?,
            }
        }

        let marker = match line_type {
            DiffLineType::Removed => '-',
            DiffLineType::Added => '+',
            DiffLineType::Unchanged | DiffLineType::Empty => ' ',
        };
        write!(out, "{marker} ")?;

        let segments = self.segments(row, side);
        let reset = self.col(colors::RESET);
        let (cell, used) = render_segments(&segments, layout.cell_width, reset);
        out.push_str(&cell);
        if pad {
            out.push_str(&" ".repeat(layout.cell_width.saturating_sub(used)));
        }
        Ok(used > 0)
    }

    /// Styled pieces making up one side's content.
    fn segments<'r>(&self, row: &'r SideBySideRow, side: Side) -> Vec<(&'r str, &'static str)> {
        let line_type = row.line_type(side);
        let base = match line_type {
            DiffLineType::Removed => self.col(colors::RED),
            DiffLineType::Added => self.col(colors::GREEN),
            DiffLineType::Unchanged | DiffLineType::Empty => "",
        };

        match row.spans(side) {
            Some(spans) => spans
                .iter()
                .map(|span| (span.text.as_str(), self.span_style(span, base)))
                .collect(),
            None => vec![(row.content(side), base)],
        }
    }

    fn span_style(&self, span: &InlineSpan, base: &'static str) -> &'static str {
        match span.kind {
            SpanKind::Equal => base,
            SpanKind::Removed => self.col(colors::RED_EMPHASIS),
            SpanKind::Added => self.col(colors::GREEN_EMPHASIS),
        }
    }
}

impl Default for SideBySideReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SideBySideReporter {
    fn generate(&self, diff: &SideBySideDiff, config: &ReportConfig) -> Result<String, ReportError> {
        let width = config.width.unwrap_or(self.width);
        let layout = Layout::new(width, &diff.rows, config.show_line_numbers)?;
        let mut out = String::new();

        if let Some(title) = &config.title {
            writeln!(out, "{}{title}{}", self.col(colors::BOLD), self.col(colors::RESET))?;
        }
        self.format_header(
            &mut out,
            &layout,
            config.metadata.left_name(),
            config.metadata.right_name(),
        )?;

        match config.context {
            None => {
                for row in &diff.rows {
                    self.format_row(&mut out, &layout, row)?;
                }
            }
            Some(context) => {
                let mut shown_until = 0;
                for hunk in hunks(&diff.rows, context) {
                    if hunk.start > shown_until {
                        self.format_fold(&mut out, hunk.start - shown_until)?;
                    }
                    for row in hunk.rows(&diff.rows) {
                        self.format_row(&mut out, &layout, row)?;
                    }
                    shown_until = hunk.end;
                }
                if diff.rows.len() > shown_until {
                    self.format_fold(&mut out, diff.rows.len() - shown_until)?;
                }
            }
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::SideBySide
    }
}

/// Column widths for one report.
struct Layout {
    num_width: usize,
    cell_width: usize,
    show_line_numbers: bool,
}

impl Layout {
    fn new(width: usize, rows: &[SideBySideRow], show_line_numbers: bool) -> Result<Self, ReportError> {
        let max_num = rows
            .iter()
            .flat_map(|row| [row.left_line_num, row.right_line_num])
            .flatten()
            .max()
            .unwrap_or(0);
        let num_width = max_num.to_string().len().max(3);

        // number + space, marker + space
        let gutter = if show_line_numbers { num_width + 3 } else { 2 };
        let fixed = SEPARATOR.chars().count() + 2 * gutter;
        let cell_width = width.saturating_sub(fixed) / 2;
        if cell_width == 0 {
            return Err(ReportError::ConfigError(format!(
                "output width {width} is too narrow for two columns"
            )));
        }

        Ok(Self {
            num_width,
            cell_width,
            show_line_numbers,
        })
    }

    /// Width of one column including its gutter.
    const fn half_width(&self) -> usize {
        let gutter = if self.show_line_numbers {
            self.num_width + 3
        } else {
            2
        };
        gutter + self.cell_width
    }
}

/// Terminal width from the `COLUMNS` environment variable, if set.
fn terminal_width() -> Option<usize> {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .filter(|&width: &usize| width > 0)
}

/// Render styled segments into exactly `width` display columns.
fn render_cell(segments: &[(&str, &str)], width: usize, reset: &str) -> String {
    let (mut out, used) = render_segments(segments, width, reset);
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

/// Render styled segments into at most `width` display columns, returning
/// the text and the columns it takes.
///
/// Text that does not fit is cut and ends with an ellipsis. `reset` closes
/// each styled segment.
fn render_segments(segments: &[(&str, &str)], width: usize, reset: &str) -> (String, usize) {
    let total: usize = segments.iter().map(|(text, _)| display_width(text)).sum();
    let truncated = total > width;
    let budget = if truncated { width.saturating_sub(1) } else { width };

    let mut out = String::new();
    let mut used = 0;
    for (text, style) in segments {
        let mut piece = String::new();
        let mut full = false;
        for ch in text.chars() {
            let (rendered, w) = render_char(ch);
            if used + w > budget {
                full = true;
                break;
            }
            used += w;
            piece.push_str(&rendered);
        }
        push_styled(&mut out, &piece, style, reset);
        if full {
            break;
        }
    }

    if truncated && width > 0 {
        out.push('…');
        used += 1;
    }
    (out, used)
}

fn push_styled(out: &mut String, text: &str, style: &str, reset: &str) {
    if text.is_empty() {
        return;
    }
    if style.is_empty() {
        out.push_str(text);
    } else {
        out.push_str(style);
        out.push_str(text);
        out.push_str(reset);
    }
}

/// Display form of one character and its column width.
fn render_char(ch: char) -> (String, usize) {
    match ch {
        '\t' => (TAB.to_string(), TAB.len()),
        c if c.is_control() => ('\u{fffd}'.to_string(), 1),
        c => (c.to_string(), c.width().unwrap_or(0)),
    }
}

fn display_width(text: &str) -> usize {
    text.chars().map(|ch| render_char(ch).1).sum()
}

/// Truncate or pad plain text to exactly `width` columns.
fn fit(text: &str, width: usize) -> String {
    render_cell(&[(text, "")], width, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::TextDiffEngine;
    use crate::reports::ReportMetadata;

    fn plain(width: usize) -> SideBySideReporter {
        SideBySideReporter::new().width(width).no_colors()
    }

    #[test]
    fn test_rows_are_aligned() {
        let diff = TextDiffEngine::new()
            .diff("same\nold line\n", "same\nnew line\nextra\n")
            .unwrap();
        let out = plain(60).generate(&diff, &ReportConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        // header, rule, three rows
        assert_eq!(lines.len(), 5);
        assert!(lines[2].contains("same"));
        assert!(lines[3].contains("- old line"));
        assert!(lines[3].contains("+ new line"));
        assert!(lines[4].contains("+ extra"));

        let separator_col = |line: &str| line.find('│').unwrap();
        assert_eq!(separator_col(lines[2]), separator_col(lines[3]));
        assert_eq!(separator_col(lines[3]), separator_col(lines[4]));
    }

    #[test]
    fn test_long_lines_are_truncated() {
        let long = "x".repeat(200);
        let diff = TextDiffEngine::new().diff(&long, "short").unwrap();
        let out = plain(40).generate(&diff, &ReportConfig::default()).unwrap();
        for line in out.lines() {
            assert!(display_width(line) <= 40, "{line:?}");
        }
        assert!(out.contains('…'));
    }

    #[test]
    fn test_wide_characters_use_display_width() {
        let cell = render_cell(&[("日本語", "")], 8, "");
        assert_eq!(display_width(&cell), 8);
        assert_eq!(cell, "日本語  ");

        let cut = render_cell(&[("日本語", "")], 5, "");
        assert_eq!(cut, "日本…");
    }

    #[test]
    fn test_context_folds_unchanged_rows() {
        let left: String = (1..=20).map(|n| format!("line {n}\n")).collect();
        let right = left.replace("line 10\n", "line ten\n");
        let diff = TextDiffEngine::new().diff(&left, &right).unwrap();
        let config = ReportConfig::default().with_context(1);
        let out = plain(80).generate(&diff, &config).unwrap();

        assert!(out.contains("⋯ 8 unchanged lines"));
        assert!(out.contains("⋯ 9 unchanged lines"));
        assert!(out.contains("line ten"));
        assert!(!out.contains("line 3\n"));
    }

    #[test]
    fn test_right_column_keeps_trailing_whitespace() {
        let diff = TextDiffEngine::new().diff("a\nkeep\n", "a\nkeep  \n").unwrap();
        let out = plain(60).generate(&diff, &ReportConfig::default()).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert!(lines[3].ends_with("+ keep  "), "{:?}", lines[3]);
        // Unchanged rows carry no padding after the right content
        assert!(lines[2].ends_with("  a"), "{:?}", lines[2]);
    }

    #[test]
    fn test_empty_right_cell_has_no_trailing_padding() {
        let diff = TextDiffEngine::new().diff("a\nb\n", "a\n").unwrap();
        let out = plain(60).generate(&diff, &ReportConfig::default()).unwrap();
        let removed = out.lines().nth(3).unwrap();
        assert!(removed.contains("- b"));
        assert!(removed.ends_with(SEPARATOR), "{removed:?}");
    }

    #[test]
    fn test_colors_highlight_changed_spans() {
        let diff = TextDiffEngine::new().diff("hello world", "hello there").unwrap();
        let out = SideBySideReporter::new()
            .width(80)
            .generate(&diff, &ReportConfig::default())
            .unwrap();
        assert!(out.contains(&format!("{}world{}", colors::RED_EMPHASIS, colors::RESET)));
        assert!(out.contains(&format!("{}there{}", colors::GREEN_EMPHASIS, colors::RESET)));
    }

    #[test]
    fn test_header_uses_paths() {
        let metadata = ReportMetadata {
            left_path: Some("a.txt".to_string()),
            right_path: Some("b.txt".to_string()),
            ..ReportMetadata::new()
        };
        let config = ReportConfig::default().with_metadata(metadata);
        let diff = TextDiffEngine::new().diff("a", "b").unwrap();
        let out = plain(60).generate(&diff, &config).unwrap();
        let header = out.lines().next().unwrap();
        assert!(header.starts_with("a.txt"));
        assert!(header.contains("│ b.txt"));
    }

    #[test]
    fn test_too_narrow() {
        let diff = TextDiffEngine::new().diff("a", "b").unwrap();
        assert!(matches!(
            plain(10).generate(&diff, &ReportConfig::default()),
            Err(ReportError::ConfigError(_))
        ));
    }
}
