/// Rule: spacing between CJK and ASCII
///
/// Han characters directly touching Latin letters or digits get a single
/// space inserted between them.
///
/// ```text
/// 在LeanCloud上，数据存储是围绕AVObject进行的。
/// ```
///
/// Should be:
///
/// ```text
/// 在 LeanCloud 上，数据存储是围绕 AVObject 进行的。
/// ```
///
/// Full-width letters and digits count as Latin here, so `是１２３` also gets a
/// space (the full-width rule converts the digits themselves). Pairs that
/// touch a protected range are left alone.
use crate::lint_context::LintContext;
use crate::rule::{Rule, RuleId, RuleMatch};
use crate::utils::char_class::{is_ascii_word, is_cjk};

const MESSAGE: &str = "中英文与数字混排时建议保留空格。";

#[derive(Debug, Clone, Default)]
pub struct SpacingBetweenCjkAndAscii;

impl SpacingBetweenCjkAndAscii {
    pub fn new() -> Self {
        Self
    }

    pub fn boxed() -> Box<dyn Rule> {
        Box::new(Self::new())
    }

    #[inline]
    fn needs_space(a: char, b: char) -> bool {
        (is_cjk(a) && is_ascii_word(b)) || (is_ascii_word(a) && is_cjk(b))
    }
}

impl Rule for SpacingBetweenCjkAndAscii {
    fn id(&self) -> RuleId {
        RuleId::SpacingBetweenCjkAndAscii
    }

    fn name(&self) -> &'static str {
        "中英文/数字间空格"
    }

    fn description(&self) -> &'static str {
        "中文与英文、数字相邻时需要空格分隔。"
    }

    fn check(&self, ctx: &LintContext) -> Vec<RuleMatch> {
        ctx.chars
            .windows(2)
            .enumerate()
            .filter(|(i, pair)| Self::needs_space(pair[0], pair[1]) && !ctx.is_protected(*i, i + 2))
            .map(|(i, _)| RuleMatch::insert(i + 1, " ", MESSAGE))
            .collect()
    }
}
