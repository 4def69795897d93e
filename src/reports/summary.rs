//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::SideBySideDiff;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

const fn plural(count: usize) -> &'static str {
    if count == 1 {
        "line"
    } else {
        "lines"
    }
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(&self, diff: &SideBySideDiff, config: &ReportConfig) -> Result<String, ReportError> {
        let summary = &diff.summary;
        let mut lines = Vec::new();

        // Header
        lines.push(self.color(config.title.as_deref().unwrap_or("Diff Summary"), "bold"));
        lines.push(self.color("─".repeat(40).as_str(), "dim"));

        lines.push(format!(
            "{}  {} → {}",
            self.color("Files:", "cyan"),
            config.metadata.left_name(),
            config.metadata.right_name()
        ));
        lines.push(format!(
            "{}  {} → {} lines",
            self.color("Size:", "cyan"),
            summary.left_lines,
            summary.right_lines
        ));

        lines.push(String::new());
        lines.push(self.color("Changes:", "bold"));

        if summary.added > 0 {
            lines.push(format!(
                "  {} {} added",
                self.color(&format!("+{}", summary.added), "green"),
                plural(summary.added)
            ));
        }
        if summary.removed > 0 {
            lines.push(format!(
                "  {} {} removed",
                self.color(&format!("-{}", summary.removed), "red"),
                plural(summary.removed)
            ));
        }
        if summary.modified > 0 {
            lines.push(format!(
                "  {} {} modified",
                self.color(&format!("~{}", summary.modified), "yellow"),
                plural(summary.modified)
            ));
        }
        if !summary.has_changes() {
            lines.push(format!("  {}", self.color("No changes", "dim")));
        }

        lines.push(String::new());
        lines.push(format!(
            "{}  {:.1}% ({} unchanged)",
            self.color("Similarity:", "cyan"),
            summary.similarity * 100.0,
            summary.unchanged
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::TextDiffEngine;

    #[test]
    fn test_summary_counts() {
        let diff = TextDiffEngine::new()
            .diff("a\nb\nc\n", "a\nx\nc\nd\ne\n")
            .unwrap();
        let out = SummaryReporter::new()
            .no_color()
            .generate(&diff, &ReportConfig::default())
            .unwrap();

        assert!(out.contains("Files:  left → right"));
        assert!(out.contains("Size:  3 → 5 lines"));
        assert!(out.contains("+2 lines added"));
        assert!(out.contains("~1 line modified"));
        assert!(!out.contains("removed"));
        assert!(!out.contains('\x1b'));
    }

    #[test]
    fn test_no_changes() {
        let diff = TextDiffEngine::new().diff("same\n", "same\n").unwrap();
        let out = SummaryReporter::new()
            .no_color()
            .generate(&diff, &ReportConfig::default())
            .unwrap();
        assert!(out.contains("No changes"));
        assert!(out.contains("100.0%"));
    }
}
