//! Typography linter for Chinese copywriting.
//!
//! [`lint`] scans a text for CJK/ASCII spacing, punctuation and full-width
//! form issues and returns the corrected text together with every edit it
//! made, located in both the original and the corrected text.
//!
//! ```
//! let result = copylint_lib::lint("你好world,这是１２３test!");
//! assert_eq!(result.formatted_text, "你好 world，这是 123test！");
//! ```

pub mod config;
pub mod exit_codes;
pub mod fix_coordinator;
pub mod lint_context;
pub mod output;
pub mod output_builder;
pub mod protected_ranges;
pub mod resolver;
pub mod rule;
pub mod rules;
pub mod types;
pub mod utils;

pub use crate::fix_coordinator::{FixResult, apply_fix, fix_all};
pub use crate::lint_context::LintContext;
pub use crate::protected_ranges::ProtectedRanges;
pub use crate::rule::{Rule, RuleId, RuleMatch};
pub use crate::types::{Diagnostic, LintResult, LintStats, Segment, TextRange};

/// Lint `text` with every built-in rule.
///
/// Never fails: empty and whitespace-only input yields an empty result, and
/// text without any Chinese characters simply has nothing to report. Calls
/// share no state, so this is safe to run from many threads at once.
pub fn lint(text: &str) -> LintResult {
    if text.trim().is_empty() {
        return LintResult::blank(text);
    }

    let ctx = LintContext::new(text);
    let rules = rules::all_rules();

    let candidates = resolver::collect_candidates(&ctx, &rules);
    let accepted = resolver::resolve(candidates);

    output_builder::build(text, &ctx.chars, accepted)
}
