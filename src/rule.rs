use crate::lint_context::LintContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a built-in rule.
///
/// Variant order is the registration order, which the resolver uses as the
/// final tie-break between candidates covering the same span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleId {
    FullwidthToHalfwidth,
    ChinesePunctuation,
    SpacingBetweenCjkAndAscii,
}

impl RuleId {
    pub const ALL: [RuleId; 3] = [
        RuleId::FullwidthToHalfwidth,
        RuleId::ChinesePunctuation,
        RuleId::SpacingBetweenCjkAndAscii,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleId::FullwidthToHalfwidth => "fullwidth-to-halfwidth",
            RuleId::ChinesePunctuation => "chinese-punctuation",
            RuleId::SpacingBetweenCjkAndAscii => "spacing-between-cjk-and-ascii",
        }
    }

    /// Position in the registry
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown rule: {0}")]
pub struct UnknownRuleError(pub String);

impl FromStr for RuleId {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        RuleId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| UnknownRuleError(s.to_string()))
    }
}

/// A proposed edit over the original text, in codepoint offsets.
///
/// `start == end` is a pure insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub start: usize,
    pub end: usize,
    pub replacement: String,
    pub message: &'static str,
}

impl RuleMatch {
    pub fn replace(start: usize, end: usize, replacement: impl Into<String>, message: &'static str) -> Self {
        Self {
            start,
            end,
            replacement: replacement.into(),
            message,
        }
    }

    pub fn insert(at: usize, text: impl Into<String>, message: &'static str) -> Self {
        Self::replace(at, at, text, message)
    }
}

/// A stateless scanner over one lint context.
///
/// Rules only read the context; they never see each other's matches.
pub trait Rule: Send + Sync {
    fn id(&self) -> RuleId;

    /// Human-readable rule name
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Propose edits for the whole text. Matches inside protected ranges must
    /// already be filtered out.
    fn check(&self, ctx: &LintContext) -> Vec<RuleMatch>;
}
