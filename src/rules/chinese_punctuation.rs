/// Rule: Chinese punctuation
///
/// In Chinese context (a Han character on the same line), punctuation should
/// be full-width:
///
/// ```text
/// 你好,世界!请看这里...
/// ```
///
/// Should be:
///
/// ```text
/// 你好，世界！请看这里……
/// ```
///
/// The rule is made of three scans:
/// - a run of three or more periods becomes `……`
/// - `, . ! ? : ; ( )` become their full-width forms
/// - horizontal whitespace before a closing mark (`，。！？：；）`) is removed
///
/// Periods are left alone when they are a decimal point (`3.14`), part of a
/// run of periods, or an ordered-list marker (`1.` after whitespace or at the
/// start of the text).
use crate::lint_context::LintContext;
use crate::rule::{Rule, RuleId, RuleMatch};
use crate::utils::char_class::{IDEOGRAPHIC_SPACE, is_digit, is_horizontal_space, is_period};
use phf::{phf_map, phf_set};

const PUNCTUATION_MESSAGE: &str = "中文语境建议使用中文全角标点。";
const ELLIPSIS_MESSAGE: &str = "中文语境下省略号建议使用“……”。";
const STRAY_SPACE_MESSAGE: &str = "中文标点前通常不保留空格。";

const ELLIPSIS: &str = "……";
const MIN_ELLIPSIS_PERIODS: usize = 3;

/// Half-width punctuation and its Chinese form. The full-width period (U+FF0E)
/// is not a Chinese mark and maps to `。` as well.
static PUNCTUATION_MAP: phf::Map<char, char> = phf_map! {
    ',' => '，',
    '.' => '。',
    '．' => '。',
    '!' => '！',
    '?' => '？',
    ':' => '：',
    ';' => '；',
    '(' => '（',
    ')' => '）',
};

/// Marks that never take whitespace before them
static CLOSING_MARKS: phf::Set<char> = phf_set! { '，', '。', '！', '？', '：', '；', '）' };

#[derive(Debug, Clone, Default)]
pub struct ChinesePunctuation;

impl ChinesePunctuation {
    pub fn new() -> Self {
        Self
    }

    pub fn boxed() -> Box<dyn Rule> {
        Box::new(Self::new())
    }
}

/// Bounds of the run of periods containing `index`.
fn period_run(ctx: &LintContext, index: usize) -> (usize, usize) {
    let mut start = index;
    while start > 0 && is_period(ctx.chars[start - 1]) {
        start -= 1;
    }
    let mut end = index + 1;
    while end < ctx.len() && is_period(ctx.chars[end]) {
        end += 1;
    }
    (start, end)
}

fn is_ellipsis_run(ctx: &LintContext, start: usize, end: usize) -> bool {
    end - start >= MIN_ELLIPSIS_PERIODS && ctx.has_cjk_context(start) && !ctx.is_protected(start, end)
}

/// `1.` style marker: digits right before the period, preceded by whitespace
/// or the start of the text, and no digit after the period.
fn is_ordered_list_marker(ctx: &LintContext, index: usize) -> bool {
    let mut digits_start = index;
    while digits_start > 0 && is_digit(ctx.chars[digits_start - 1]) {
        digits_start -= 1;
    }
    if digits_start == index {
        return false;
    }
    let starts_item = ctx.char_before(digits_start).is_none_or(char::is_whitespace);
    starts_item && !ctx.char_at(index + 1).is_some_and(is_digit)
}

/// The Chinese mark the character at `index` should become, if any.
fn chinese_mark_at(ctx: &LintContext, index: usize) -> Option<char> {
    let c = ctx.char_at(index)?;
    let mapped = *PUNCTUATION_MAP.get(&c)?;

    if !ctx.has_cjk_context(index) || ctx.is_protected(index, index + 1) {
        return None;
    }

    if is_period(c) {
        let prev = ctx.char_before(index);
        let next = ctx.char_at(index + 1);
        if prev.is_some_and(is_period) || next.is_some_and(is_period) {
            return None;
        }
        if prev.is_some_and(is_digit) && next.is_some_and(is_digit) {
            return None;
        }
        if is_ordered_list_marker(ctx, index) {
            return None;
        }
    }

    Some(mapped)
}

/// The closing mark at `index` after this rule runs: an existing one, or a
/// half-width character this rule converts into one.
fn closing_mark_at(ctx: &LintContext, index: usize) -> Option<char> {
    let c = ctx.char_at(index)?;
    if CLOSING_MARKS.contains(&c) {
        return (!ctx.is_protected(index, index + 1)).then_some(c);
    }
    chinese_mark_at(ctx, index).filter(|mark| CLOSING_MARKS.contains(mark))
}

/// Start of the unprotected whitespace run that ends right before `index`.
fn stray_space_start(ctx: &LintContext, index: usize) -> Option<usize> {
    let mut start = index;
    while start > 0 && is_horizontal_space(ctx.chars[start - 1]) && !ctx.protected.contains(start - 1) {
        start -= 1;
    }
    (start < index).then_some(start)
}

/// Whether this rule rewrites the full-width character at `index`, so the
/// full-width rule must leave it alone.
pub(crate) fn rewrites_fullwidth_char(ctx: &LintContext, index: usize) -> bool {
    let Some(c) = ctx.char_at(index) else {
        return false;
    };

    if c == '．' {
        let (start, end) = period_run(ctx, index);
        return is_ellipsis_run(ctx, start, end) || chinese_mark_at(ctx, index).is_some();
    }

    if c == IDEOGRAPHIC_SPACE {
        let mut mark = index;
        while mark < ctx.len() && is_horizontal_space(ctx.chars[mark]) && !ctx.protected.contains(mark) {
            mark += 1;
        }
        return mark > index && closing_mark_at(ctx, mark).is_some();
    }

    false
}

impl ChinesePunctuation {
    fn check_ellipsis(&self, ctx: &LintContext, matches: &mut Vec<RuleMatch>) {
        let mut i = 0;
        while i < ctx.len() {
            if !is_period(ctx.chars[i]) {
                i += 1;
                continue;
            }
            let (start, end) = period_run(ctx, i);
            if is_ellipsis_run(ctx, start, end) {
                matches.push(RuleMatch::replace(start, end, ELLIPSIS, ELLIPSIS_MESSAGE));
            }
            i = end;
        }
    }

    fn check_marks(&self, ctx: &LintContext, matches: &mut Vec<RuleMatch>) {
        for index in 0..ctx.len() {
            if let Some(mark) = chinese_mark_at(ctx, index) {
                matches.push(RuleMatch::replace(index, index + 1, mark, PUNCTUATION_MESSAGE));
            }
        }
    }

    fn check_stray_spaces(&self, ctx: &LintContext, matches: &mut Vec<RuleMatch>) {
        for index in 1..ctx.len() {
            let Some(mark) = closing_mark_at(ctx, index) else {
                continue;
            };
            let Some(start) = stray_space_start(ctx, index) else {
                continue;
            };
            if ctx.is_protected(start, index + 1) {
                continue;
            }
            matches.push(RuleMatch::replace(start, index + 1, mark, STRAY_SPACE_MESSAGE));
        }
    }
}

impl Rule for ChinesePunctuation {
    fn id(&self) -> RuleId {
        RuleId::ChinesePunctuation
    }

    fn name(&self) -> &'static str {
        "中英文标点规范"
    }

    fn description(&self) -> &'static str {
        "中文上下文优先使用中文标点并移除不必要空格。"
    }

    fn check(&self, ctx: &LintContext) -> Vec<RuleMatch> {
        let mut matches = Vec::new();
        self.check_ellipsis(ctx, &mut matches);
        self.check_marks(ctx, &mut matches);
        self.check_stray_spaces(ctx, &mut matches);
        matches
    }
}
