//! Detection of spans that must never be rewritten: fenced code blocks, inline
//! code spans, URLs and email addresses.

use crate::types::TextRange;
use crate::utils::char_class::to_halfwidth;
use crate::utils::range_utils::CharOffsets;
use crate::utils::regex_cache::{
    EMAIL_REGEX, FENCED_CODE_REGEX, INLINE_CODE_REGEX, URL_REGEX, has_at_sign, has_backtick, has_fence_marker,
    has_url_hint,
};
use regex::Regex;

/// Sorted, merged, non-overlapping exclusion intervals in codepoint offsets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProtectedRanges {
    ranges: Vec<TextRange>,
}

impl ProtectedRanges {
    /// Scan `content` with every pattern and merge the raw spans.
    ///
    /// Patterns run over the width-normalized text, so `｀` pairs like a
    /// backtick and full-width letters and digits bound an email or URL the
    /// same way their ASCII forms do. Normalization maps codepoint to
    /// codepoint, so offsets are those of `content`.
    pub fn detect(content: &str) -> Self {
        let normalized: String = content.chars().map(to_halfwidth).collect();
        let content = normalized.as_str();
        let offsets = CharOffsets::new(content);
        let mut raw = Vec::new();

        if has_fence_marker(content) {
            collect_matches(&FENCED_CODE_REGEX, content, &offsets, &mut raw);
        }
        if has_backtick(content) {
            collect_matches(&INLINE_CODE_REGEX, content, &offsets, &mut raw);
        }
        if has_url_hint(content) {
            collect_matches(&URL_REGEX, content, &offsets, &mut raw);
        }
        if has_at_sign(content) {
            for found in EMAIL_REGEX.find_iter(content) {
                match found {
                    Ok(m) => raw.push(TextRange::new(offsets.char_offset(m.start()), offsets.char_offset(m.end()))),
                    Err(e) => {
                        // Backtrack limit: treat the remainder as having no email
                        log::warn!("Email detection stopped early: {e}");
                        break;
                    }
                }
            }
        }

        Self::from_ranges(raw)
    }

    /// Sort by start and coalesce overlapping or touching ranges.
    pub fn from_ranges(mut raw: Vec<TextRange>) -> Self {
        raw.retain(|r| !r.is_empty());
        raw.sort_by_key(|r| r.start);

        let mut ranges: Vec<TextRange> = Vec::with_capacity(raw.len());
        for range in raw {
            match ranges.last_mut() {
                Some(last) if range.start <= last.end => {
                    last.end = last.end.max(range.end);
                }
                _ => ranges.push(range),
            }
        }

        Self { ranges }
    }

    /// True iff `[start, end)` intersects any protected range.
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        // First range that ends after `start`; every earlier one is entirely before it
        let idx = self.ranges.partition_point(|r| r.end <= start);
        self.ranges.get(idx).is_some_and(|r| r.intersects(start, end))
    }

    /// True iff the single codepoint at `index` is protected.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.overlaps(index, index + 1)
    }

    pub fn as_slice(&self) -> &[TextRange] {
        &self.ranges
    }

    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}

fn collect_matches(regex: &Regex, content: &str, offsets: &CharOffsets, out: &mut Vec<TextRange>) {
    out.extend(
        regex
            .find_iter(content)
            .map(|m| TextRange::new(offsets.char_offset(m.start()), offsets.char_offset(m.end()))),
    );
}
