pub mod chinese_punctuation;
mod fullwidth_to_halfwidth;
mod spacing_between_cjk_and_ascii;

pub use chinese_punctuation::ChinesePunctuation;
pub use fullwidth_to_halfwidth::{FullwidthToHalfwidth, KEEP_FULLWIDTH};
pub use spacing_between_cjk_and_ascii::SpacingBetweenCjkAndAscii;

use crate::rule::{Rule, RuleId};

/// Type alias for rule constructor functions
type RuleCtor = fn() -> Box<dyn Rule>;

/// Entry in the rule registry
struct RuleEntry {
    id: RuleId,
    ctor: RuleCtor,
}

/// Registry of all rules, in registration order.
///
/// The order is load-bearing: when two candidate edits cover exactly the same
/// span, the one from the earlier entry wins.
const RULES: &[RuleEntry] = &[
    RuleEntry {
        id: RuleId::FullwidthToHalfwidth,
        ctor: FullwidthToHalfwidth::boxed,
    },
    RuleEntry {
        id: RuleId::ChinesePunctuation,
        ctor: ChinesePunctuation::boxed,
    },
    RuleEntry {
        id: RuleId::SpacingBetweenCjkAndAscii,
        ctor: SpacingBetweenCjkAndAscii::boxed,
    },
];

/// Instantiate every rule in registration order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    RULES.iter().map(|entry| (entry.ctor)()).collect()
}

/// Instantiate a single rule by id.
pub fn rule_by_id(id: RuleId) -> Option<Box<dyn Rule>> {
    RULES.iter().find(|entry| entry.id == id).map(|entry| (entry.ctor)())
}
