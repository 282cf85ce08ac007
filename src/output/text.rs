//! Human-readable report lines

use super::FileReport;
use crate::types::{Diagnostic, LintStats};
use crate::utils::range_utils::LineIndex;
use colored::*;
use unicode_width::UnicodeWidthChar;

/// One line per diagnostic:
/// `path:line:col: [rule-id] name: message "orig" → "replacement"`.
///
/// Positions point into the original text, 1-based, columns in codepoints.
pub fn format_diagnostic(path: &str, line_index: &LineIndex, diagnostic: &Diagnostic) -> String {
    let (line, column) = line_index.line_col(diagnostic.source_start);
    format!(
        "{}:{}:{}: {} {}: {} {} → {}",
        path.bold(),
        line,
        column,
        format!("[{}]", diagnostic.rule_id).yellow(),
        diagnostic.rule_name,
        diagnostic.rule_description,
        format!("{:?}", diagnostic.original).red(),
        format!("{:?}", diagnostic.replacement).green(),
    )
}

/// The source line of `diagnostic` with carets under the affected span.
///
/// Carets are placed by display width so wide characters line up. An
/// insertion gets a single caret at the insertion point.
pub fn format_context(original: &str, line_index: &LineIndex, diagnostic: &Diagnostic) -> String {
    let (line, column) = line_index.line_col(diagnostic.source_start);
    let line_text = original.split('\n').nth(line - 1).unwrap_or("").trim_end_matches('\r');
    let shown: String = line_text.chars().map(|c| if c == '\t' { ' ' } else { c }).collect();

    let width = |c: char| c.width().unwrap_or(0);
    let pad: usize = shown.chars().take(column - 1).map(width).sum();
    let marked: usize = if diagnostic.is_insertion() {
        1
    } else {
        let span_len = diagnostic.source_end - diagnostic.source_start;
        shown.chars().skip(column - 1).take(span_len).map(width).sum()
    };

    let gutter = "|".blue();
    format!(
        "  {gutter} {shown}\n  {gutter} {}{}",
        " ".repeat(pad),
        "^".repeat(marked.max(1)).red().bold()
    )
}

/// Every issue of one file, optionally followed by its source context.
pub fn format_report(report: &FileReport, show_context: bool) -> Vec<String> {
    let line_index = LineIndex::new(&report.result.original_text);
    let mut lines = Vec::with_capacity(report.result.diagnostics.len());

    for diagnostic in &report.result.diagnostics {
        lines.push(format_diagnostic(&report.path, &line_index, diagnostic));
        if show_context {
            lines.push(format_context(&report.result.original_text, &line_index, diagnostic));
        }
    }

    lines
}

/// Issue counts per rule, one rule per line, in registration order.
pub fn format_stats(stats: &LintStats) -> Vec<String> {
    stats
        .by_rule
        .iter()
        .map(|(rule_id, count)| format!("  {:<32} {count:>5}", rule_id.as_str()))
        .collect()
}

/// Closing summary of a `check` run. `fixes_applied` is set when fixing and
/// counts edits over every fix pass.
pub fn format_summary(
    files_checked: usize,
    files_with_issues: usize,
    stats: &LintStats,
    fixes_applied: Option<usize>,
) -> String {
    let file_word = |n: usize| if n == 1 { "file" } else { "files" };
    let issue_word = |n: usize| if n == 1 { "issue" } else { "issues" };

    if stats.total_issues == 0 {
        return format!(
            "{} No issues found in {files_checked} {}",
            "Success:".green().bold(),
            file_word(files_checked)
        );
    }

    match fixes_applied {
        Some(fixes) => format!(
            "{} {fixes} {} in {files_with_issues} {}",
            "Fixed:".green().bold(),
            issue_word(fixes),
            file_word(files_with_issues)
        ),
        None => format!(
            "{} {} {} in {files_with_issues} {} ({files_checked} {} checked)",
            "Found".red().bold(),
            stats.total_issues,
            issue_word(stats.total_issues),
            file_word(files_with_issues),
            file_word(files_checked)
        ),
    }
}
