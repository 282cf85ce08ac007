//! Turns the union of every rule's matches into one non-overlapping edit list.

use crate::lint_context::LintContext;
use crate::rule::{Rule, RuleId};

/// A rule match annotated with its rule, over original-text coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Registration index of the producing rule (tie-break)
    pub rule_index: usize,
    pub rule_id: RuleId,
    pub rule_name: &'static str,
    pub rule_description: &'static str,
    pub start: usize,
    pub end: usize,
    pub original: String,
    pub replacement: String,
}

/// Run every rule over the context and collect its candidates, dropping
/// matches whose replacement equals the text they replace.
pub fn collect_candidates(ctx: &LintContext, rules: &[Box<dyn Rule>]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (rule_index, rule) in rules.iter().enumerate() {
        let matches = rule.check(ctx);
        let before = candidates.len();

        for m in matches {
            let original = ctx.slice(m.start, m.end);
            if original == m.replacement {
                continue;
            }
            candidates.push(Candidate {
                rule_index,
                rule_id: rule.id(),
                rule_name: rule.name(),
                rule_description: m.message,
                start: m.start,
                end: m.end,
                original,
                replacement: m.replacement,
            });
        }

        log::debug!("{}: {} candidate(s)", rule.id(), candidates.len() - before);
    }

    candidates
}

/// Sort candidates by (start, end, rule index) and greedily keep each one that
/// starts at or after the end of the previously kept one.
///
/// Losers are dropped silently. A zero-width insertion sorts before a
/// replacement starting at the same offset, and both are kept.
pub fn resolve(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by_key(|c| (c.start, c.end, c.rule_index));

    let total = candidates.len();
    let mut accepted: Vec<Candidate> = Vec::with_capacity(total);
    let mut last_end = 0;

    for candidate in candidates {
        if candidate.start < last_end {
            log::trace!(
                "Dropping {} edit at {}..{}: overlaps edit ending at {last_end}",
                candidate.rule_id,
                candidate.start,
                candidate.end
            );
            continue;
        }
        last_end = candidate.end;
        accepted.push(candidate);
    }

    log::debug!("Resolver kept {} of {} candidate(s)", accepted.len(), total);
    accepted
}
