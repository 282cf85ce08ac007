//! Value types produced by a single [`lint`](crate::lint) invocation.
//!
//! All offsets are codepoint offsets (not byte offsets) so they stay valid for
//! multi-byte text. Source offsets index into [`LintResult::original_text`],
//! output offsets index into [`LintResult::formatted_text`].

use crate::rule::RuleId;
use indexmap::IndexMap;
use serde::Serialize;

/// Half-open codepoint interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "protected range must be non-empty: {start}..{end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// True iff `[start, end)` intersects this range.
    #[inline]
    pub fn intersects(&self, start: usize, end: usize) -> bool {
        start < self.end && end > self.start
    }
}

/// An accepted edit, located in both the original and the formatted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostic {
    /// Stable id in resolution order (`issue-0`, `issue-1`, ...)
    pub id: String,
    pub rule_id: RuleId,
    pub rule_name: &'static str,
    /// Message of the sub-rule that produced the edit
    pub rule_description: &'static str,
    pub source_start: usize,
    pub source_end: usize,
    pub output_start: usize,
    pub output_end: usize,
    pub original: String,
    pub replacement: String,
}

impl Diagnostic {
    /// A zero-width source span means the edit inserts text.
    pub fn is_insertion(&self) -> bool {
        self.source_start == self.source_end
    }
}

/// A contiguous run of the formatted text, tagged with the diagnostic that
/// produced it when `changed` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    pub changed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic_id: Option<String>,
}

impl Segment {
    pub fn unchanged(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: false,
            diagnostic_id: None,
        }
    }

    pub fn changed(text: impl Into<String>, diagnostic_id: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            changed: true,
            diagnostic_id: Some(diagnostic_id.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintStats {
    pub total_issues: usize,
    /// Accepted issues per rule, keyed in registration order. Every rule has an entry.
    pub by_rule: IndexMap<RuleId, usize>,
}

impl LintStats {
    /// Zero counts for every registered rule.
    pub fn empty() -> Self {
        Self {
            total_issues: 0,
            by_rule: RuleId::ALL.iter().map(|&id| (id, 0)).collect(),
        }
    }

    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut stats = Self::empty();
        for diagnostic in diagnostics {
            *stats.by_rule.entry(diagnostic.rule_id).or_insert(0) += 1;
        }
        stats.total_issues = diagnostics.len();
        stats
    }

    pub fn count(&self, rule_id: RuleId) -> usize {
        self.by_rule.get(&rule_id).copied().unwrap_or(0)
    }

    /// Add another result's counts to these, e.g. to summarize many files.
    pub fn merge(&mut self, other: &LintStats) {
        self.total_issues += other.total_issues;
        for (&rule_id, &count) in &other.by_rule {
            *self.by_rule.entry(rule_id).or_insert(0) += count;
        }
    }
}

impl Default for LintStats {
    fn default() -> Self {
        Self::empty()
    }
}

/// Everything one lint call produces. Built once, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LintResult {
    pub original_text: String,
    pub formatted_text: String,
    /// Accepted edits in source (and therefore output) order
    pub diagnostics: Vec<Diagnostic>,
    /// Partition of `formatted_text`
    pub segments: Vec<Segment>,
    pub stats: LintStats,
}

impl LintResult {
    /// Result for input that has nothing to check (empty or whitespace-only).
    pub fn blank(original_text: &str) -> Self {
        Self {
            original_text: original_text.to_string(),
            formatted_text: String::new(),
            diagnostics: Vec::new(),
            segments: Vec::new(),
            stats: LintStats::empty(),
        }
    }

    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
