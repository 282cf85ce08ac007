//! JSON output formatter

use super::FileReport;
use crate::types::{Diagnostic, LintStats};
use crate::utils::range_utils::LineIndex;
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonDiagnostic<'a> {
    #[serde(flatten)]
    diagnostic: &'a Diagnostic,
    line: usize,
    column: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFileReport<'a> {
    path: &'a str,
    fixed: bool,
    fixes_applied: usize,
    formatted_text: &'a str,
    diagnostics: Vec<JsonDiagnostic<'a>>,
    stats: &'a LintStats,
}

impl<'a> JsonFileReport<'a> {
    fn new(report: &'a FileReport) -> Self {
        let line_index = LineIndex::new(&report.result.original_text);
        let diagnostics = report
            .result
            .diagnostics
            .iter()
            .map(|diagnostic| {
                let (line, column) = line_index.line_col(diagnostic.source_start);
                JsonDiagnostic {
                    diagnostic,
                    line,
                    column,
                }
            })
            .collect();

        Self {
            path: &report.path,
            fixed: report.fixed,
            fixes_applied: report.fixes_applied,
            formatted_text: &report.result.formatted_text,
            diagnostics,
            stats: &report.result.stats,
        }
    }
}

/// Pretty-printed JSON array with one object per file.
pub fn format_json(reports: &[FileReport]) -> Result<String, serde_json::Error> {
    let entries: Vec<JsonFileReport> = reports.iter().map(JsonFileReport::new).collect();
    serde_json::to_string_pretty(&entries)
}
