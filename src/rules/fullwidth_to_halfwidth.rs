/// Rule: full-width to half-width
///
/// Latin letters, digits and symbols typed in full-width form are converted to
/// their ASCII form:
///
/// ```text
/// 这件蛋糕只卖１０００元。
/// ```
///
/// Should be:
///
/// ```text
/// 这件蛋糕只卖 1000 元。
/// ```
///
/// (the space comes from the spacing rule). Chinese punctuation that lives in
/// the full-width block (`，！？：；（）`) and the other marks in
/// [`KEEP_FULLWIDTH`] stay full-width. Characters the punctuation rule rewrites
/// itself, such as `．` in Chinese context, are left to that rule.
use crate::lint_context::LintContext;
use crate::rule::{Rule, RuleId, RuleMatch};
use crate::rules::chinese_punctuation::rewrites_fullwidth_char;
use crate::utils::char_class::{is_fullwidth_form, to_halfwidth};
use phf::phf_set;

const MESSAGE: &str = "英文与数字建议统一使用半角字符。";

/// Full-width punctuation that is correct in Chinese text
pub static KEEP_FULLWIDTH: phf::Set<char> = phf_set! {
    '，', '。', '！', '？', '：', '；', '（', '）', '、', '“', '”', '‘', '’',
};

#[derive(Debug, Clone, Default)]
pub struct FullwidthToHalfwidth;

impl FullwidthToHalfwidth {
    pub fn new() -> Self {
        Self
    }

    pub fn boxed() -> Box<dyn Rule> {
        Box::new(Self::new())
    }
}

impl Rule for FullwidthToHalfwidth {
    fn id(&self) -> RuleId {
        RuleId::FullwidthToHalfwidth
    }

    fn name(&self) -> &'static str {
        "全角半角统一"
    }

    fn description(&self) -> &'static str {
        "英文/数字字符统一为半角，避免混用。"
    }

    fn check(&self, ctx: &LintContext) -> Vec<RuleMatch> {
        let mut matches = Vec::new();

        for (index, &c) in ctx.chars.iter().enumerate() {
            if !is_fullwidth_form(c) || KEEP_FULLWIDTH.contains(&c) {
                continue;
            }

            let converted = to_halfwidth(c);
            if converted == c || ctx.is_protected(index, index + 1) {
                continue;
            }

            if rewrites_fullwidth_char(ctx, index) {
                continue;
            }

            matches.push(RuleMatch::replace(index, index + 1, converted.to_string(), MESSAGE));
        }

        matches
    }
}
