//! JSON report generator.

use super::{ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::diff::{hunks, Hunk};
use crate::model::{DiffSummary, SideBySideDiff, SideBySideRow};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Whether to only include summary
    summary_only: bool,
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self {
            summary_only: false,
            pretty: true,
        }
    }

    /// Create a summary-only reporter
    #[must_use]
    pub const fn summary_only() -> Self {
        Self {
            summary_only: true,
            pretty: true,
        }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(&self, diff: &SideBySideDiff, config: &ReportConfig) -> Result<String, ReportError> {
        let rows = if self.summary_only {
            None
        } else {
            Some(match config.context {
                Some(context) => RowSelection::Hunks(
                    hunks(&diff.rows, context)
                        .into_iter()
                        .map(|hunk| JsonHunk::new(hunk, &diff.rows))
                        .collect(),
                ),
                None => RowSelection::Rows(&diff.rows),
            })
        };

        let report = JsonDiffReport {
            metadata: JsonReportMetadata {
                tool: ToolInfo {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                },
                generated_at: config
                    .metadata
                    .generated_at
                    .clone()
                    .unwrap_or_else(|| Utc::now().to_rfc3339()),
                title: config.title.clone(),
                left: DocumentInfo {
                    path: config.metadata.left_path.clone(),
                    hash: config.metadata.left_hash.clone(),
                    lines: diff.summary.left_lines,
                },
                right: DocumentInfo {
                    path: config.metadata.right_path.clone(),
                    hash: config.metadata.right_hash.clone(),
                    lines: diff.summary.right_lines,
                },
            },
            summary: &diff.summary,
            rows,
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        json.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

// JSON structures for serialization

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiffReport<'a> {
    metadata: JsonReportMetadata,
    summary: &'a DiffSummary,
    #[serde(flatten)]
    rows: Option<RowSelection<'a>>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    left: DocumentInfo,
    right: DocumentInfo,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

#[derive(Serialize)]
struct DocumentInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hash: Option<String>,
    lines: usize,
}

/// Either every row or only the rows inside hunks.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum RowSelection<'a> {
    Rows(&'a [SideBySideRow]),
    Hunks(Vec<JsonHunk<'a>>),
}

#[derive(Serialize)]
struct JsonHunk<'a> {
    start: usize,
    end: usize,
    rows: &'a [SideBySideRow],
}

impl<'a> JsonHunk<'a> {
    fn new(hunk: Hunk, rows: &'a [SideBySideRow]) -> Self {
        Self {
            start: hunk.start,
            end: hunk.end,
            rows: hunk.rows(rows),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::TextDiffEngine;

    fn sample() -> SideBySideDiff {
        TextDiffEngine::new()
            .diff("a\nb\nc\nd\ne\n", "a\nb\nx\nd\ne\n")
            .unwrap()
    }

    #[test]
    fn test_json_contains_rows_and_summary() {
        let json = JsonReporter::new()
            .generate(&sample(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["summary"]["modified"], 1);
        assert_eq!(value["summary"]["leftLines"], 5);
        assert_eq!(value["metadata"]["tool"]["name"], "sidediff");
        let rows = value["rows"].as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2]["leftType"], "removed");
        assert_eq!(rows[2]["rightType"], "added");
        assert_eq!(rows[2]["leftSpans"][0]["type"], "removed");
        assert!(rows[0]["leftSpans"].is_null());
    }

    #[test]
    fn test_json_with_context_emits_hunks() {
        let config = ReportConfig::default().with_context(1);
        let json = JsonReporter::new().generate(&sample(), &config).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert!(value.get("rows").is_none());
        let hunks = value["hunks"].as_array().unwrap();
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0]["start"], 1);
        assert_eq!(hunks[0]["end"], 4);
        assert_eq!(hunks[0]["rows"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_summary_only() {
        let json = JsonReporter::summary_only()
            .pretty(false)
            .generate(&sample(), &ReportConfig::default())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value.get("rows").is_none());
        assert_eq!(value["summary"]["totalChanges"], 1);
        assert!(!json.contains('\n'));
    }
}
