//! Applies resolved edits to the original text and lays out the result.

use crate::resolver::Candidate;
use crate::types::{Diagnostic, LintResult, LintStats, Segment};
use crate::utils::range_utils::CharOffsets;

/// Source and output positions, both in codepoints, threaded through the build loop.
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    source: usize,
    output: usize,
}

/// Build the formatted text, diagnostics, segments and stats.
///
/// `accepted` must be sorted by source position and non-overlapping, as
/// returned by [`resolve`](crate::resolver::resolve).
pub fn build(original: &str, chars: &[char], accepted: Vec<Candidate>) -> LintResult {
    let (formatted_text, diagnostics) = apply_edits(chars, accepted);
    let segments = build_segments(&formatted_text, &diagnostics);
    let stats = LintStats::from_diagnostics(&diagnostics);

    LintResult {
        original_text: original.to_string(),
        formatted_text,
        diagnostics,
        segments,
        stats,
    }
}

fn apply_edits(chars: &[char], accepted: Vec<Candidate>) -> (String, Vec<Diagnostic>) {
    let mut formatted = String::with_capacity(chars.len() * 4 + accepted.len() * 4);
    let mut diagnostics = Vec::with_capacity(accepted.len());
    let mut cursor = Cursor::default();

    for (index, candidate) in accepted.into_iter().enumerate() {
        let untouched = &chars[cursor.source..candidate.start];
        formatted.extend(untouched);
        cursor.output += untouched.len();

        let output_start = cursor.output;
        formatted.push_str(&candidate.replacement);
        cursor.output += candidate.replacement.chars().count();

        diagnostics.push(Diagnostic {
            id: format!("issue-{index}"),
            rule_id: candidate.rule_id,
            rule_name: candidate.rule_name,
            rule_description: candidate.rule_description,
            source_start: candidate.start,
            source_end: candidate.end,
            output_start,
            output_end: cursor.output,
            original: candidate.original,
            replacement: candidate.replacement,
        });

        cursor.source = candidate.end;
    }

    formatted.extend(&chars[cursor.source..]);
    (formatted, diagnostics)
}

/// Partition `formatted` into alternating unchanged and changed runs.
pub fn build_segments(formatted: &str, diagnostics: &[Diagnostic]) -> Vec<Segment> {
    if formatted.is_empty() {
        return Vec::new();
    }

    let offsets = CharOffsets::new(formatted);
    let slice = |start: usize, end: usize| &formatted[offsets.byte_offset(start)..offsets.byte_offset(end)];

    let mut ordered: Vec<&Diagnostic> = diagnostics.iter().collect();
    ordered.sort_by_key(|d| d.output_start);

    let mut segments = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut cursor = 0;

    for diagnostic in ordered {
        if diagnostic.output_start > cursor {
            segments.push(Segment::unchanged(slice(cursor, diagnostic.output_start)));
        }
        if diagnostic.output_end > diagnostic.output_start {
            segments.push(Segment::changed(
                slice(diagnostic.output_start, diagnostic.output_end),
                diagnostic.id.as_str(),
            ));
        }
        cursor = cursor.max(diagnostic.output_end);
    }

    if cursor < offsets.char_len() {
        segments.push(Segment::unchanged(slice(cursor, offsets.char_len())));
    }

    segments
}
