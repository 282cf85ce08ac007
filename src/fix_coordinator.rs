use crate::lint;
use crate::types::Diagnostic;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Maximum number of lint passes before `fix_all` gives up
pub const MAX_ITERATIONS: usize = 10;

/// Result of fixing a text until it stops changing
///
/// Named fields instead of a tuple so callers don't mix up the counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixResult {
    /// The fixed text
    pub content: String,
    /// Number of lint passes run, including the final clean one
    pub iterations: usize,
    /// Whether the content stabilized (a pass produced no diagnostics)
    pub converged: bool,
    /// Total diagnostics applied across all passes
    pub fixes_applied: usize,
}

/// Calculate hash of content for oscillation detection
fn hash_content(content: &str) -> u64 {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    hasher.finish()
}

/// Apply a single diagnostic to `text`.
///
/// Replaces the codepoint span `[source_start, source_end)` with the
/// diagnostic's replacement. Offsets past the end of `text` are clamped, so a
/// diagnostic from a different text never panics; it just produces whatever
/// the clamped splice gives.
pub fn apply_fix(text: &str, diagnostic: &Diagnostic) -> String {
    let len = text.chars().count();
    let start = diagnostic.source_start.min(len);
    let end = diagnostic.source_end.clamp(start, len);

    let mut fixed = String::with_capacity(text.len() + diagnostic.replacement.len());
    fixed.extend(text.chars().take(start));
    fixed.push_str(&diagnostic.replacement);
    fixed.extend(text.chars().skip(end));
    fixed
}

/// Lint and rewrite `text` until a pass finds nothing, up to [`MAX_ITERATIONS`].
///
/// Stops early, unconverged, if a pass reproduces content seen on an earlier
/// pass. With the built-in rules the first pass is expected to reach the
/// fixpoint, so `iterations` is normally 2 for text with issues and 1 for
/// clean text.
pub fn fix_all(text: &str) -> FixResult {
    let mut content = text.to_string();
    let mut history = vec![hash_content(&content)];
    let mut fixes_applied = 0;
    let mut iterations = 0;

    while iterations < MAX_ITERATIONS {
        iterations += 1;

        let result = lint(&content);
        if !result.has_issues() {
            return FixResult {
                content,
                iterations,
                converged: true,
                fixes_applied,
            };
        }

        fixes_applied += result.diagnostics.len();
        content = result.formatted_text;

        let current_hash = hash_content(&content);
        if history.contains(&current_hash) {
            log::warn!("Fix loop revisited earlier content after {iterations} pass(es)");
            return FixResult {
                content,
                iterations,
                converged: false,
                fixes_applied,
            };
        }
        history.push(current_hash);
    }

    log::warn!("Fix loop did not converge within {MAX_ITERATIONS} passes");
    FixResult {
        content,
        iterations,
        converged: false,
        fixes_applied,
    }
}
