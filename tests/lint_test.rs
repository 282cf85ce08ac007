use copylint_lib::{fix_all, lint};
use copylint_lib::protected_ranges::ProtectedRanges;
use copylint_lib::rule::RuleId;
use copylint_lib::types::LintResult;
use pretty_assertions::assert_eq;

fn chars_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end - start).collect()
}

/// Every diagnostic's original and replacement can be found at its source and
/// output offsets, and the segments add up to the formatted text.
fn assert_consistent(result: &LintResult) {
    let joined: String = result.segments.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(joined, result.formatted_text);

    for d in &result.diagnostics {
        assert_eq!(chars_slice(&result.original_text, d.source_start, d.source_end), d.original);
        assert_eq!(chars_slice(&result.formatted_text, d.output_start, d.output_end), d.replacement);
    }
}

#[test]
fn test_mixed_text() {
    let result = lint("你好world,这是１２３test!");
    assert_eq!(result.formatted_text, "你好 world，这是 123test！");
    assert!(result.stats.count(RuleId::SpacingBetweenCjkAndAscii) > 0);
    assert!(result.stats.count(RuleId::ChinesePunctuation) > 0);
    assert!(result.stats.count(RuleId::FullwidthToHalfwidth) > 0);
    assert_consistent(&result);
}

#[test]
fn test_mixed_text_diagnostics_in_order() {
    let result = lint("你好world,这是１２３test!");
    let summary: Vec<(RuleId, usize, usize, usize, usize)> = result
        .diagnostics
        .iter()
        .map(|d| (d.rule_id, d.source_start, d.source_end, d.output_start, d.output_end))
        .collect();
    assert_eq!(
        summary,
        vec![
            (RuleId::SpacingBetweenCjkAndAscii, 2, 2, 2, 3),
            (RuleId::ChinesePunctuation, 7, 8, 8, 9),
            (RuleId::SpacingBetweenCjkAndAscii, 10, 10, 11, 12),
            (RuleId::FullwidthToHalfwidth, 10, 11, 12, 13),
            (RuleId::FullwidthToHalfwidth, 11, 12, 13, 14),
            (RuleId::FullwidthToHalfwidth, 12, 13, 14, 15),
            (RuleId::ChinesePunctuation, 17, 18, 19, 20),
        ]
    );
    let ids: Vec<&str> = result.diagnostics.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, vec!["issue-0", "issue-1", "issue-2", "issue-3", "issue-4", "issue-5", "issue-6"]);
}

#[test]
fn test_protected_spans_survive() {
    let text = "说明:`inline,code`\n```js\nconst n=１２３, value=\"中文,english\"\n```\n访问https://example.com/a,b 或联系foo_bar@example.com。";
    let result = lint(text);

    for span in [
        "`inline,code`",
        "```js\nconst n=１２３, value=\"中文,english\"\n```",
        "https://example.com/a,b",
        "foo_bar@example.com",
    ] {
        assert!(
            result.formatted_text.contains(span),
            "{span:?} changed in {:?}",
            result.formatted_text
        );
    }
    assert!(result.formatted_text.starts_with("说明："));

    let protected = ProtectedRanges::detect(text);
    for d in &result.diagnostics {
        assert!(
            !protected.overlaps(d.source_start, d.source_end),
            "{d:?} touches a protected range"
        );
    }
    assert_consistent(&result);
}

#[test]
fn test_email_next_to_fullwidth_digit_survives_fix_all() {
    let text = "联系foo@example.com１号";
    let result = lint(text);
    assert_eq!(result.formatted_text, "联系foo@example.com1 号");
    assert!(lint(&result.formatted_text).diagnostics.is_empty());

    let fixed = fix_all(text);
    assert!(fixed.converged);
    assert_eq!(fixed.iterations, 2);
    assert_eq!(fixed.content, "联系foo@example.com1 号");
}

#[test]
fn test_fullwidth_backtick_opens_inline_code() {
    let text = "代码｀a`,b`中文";
    let result = lint(text);
    assert_eq!(result.formatted_text, "代码｀a`，b`中文");
    assert_eq!(result.diagnostics.len(), 1);
    assert!(lint(&result.formatted_text).diagnostics.is_empty());

    let fixed = fix_all(text);
    assert!(fixed.converged);
    assert_eq!(fixed.iterations, 2);
    assert_eq!(fixed.fixes_applied, 1);
}

#[test]
fn test_ordered_list_marker() {
    let result = lint("1. 第一项");
    assert_eq!(result.formatted_text, "1. 第一项");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_decimal_point() {
    let result = lint("version 3.14 测试");
    assert_eq!(result.formatted_text, "version 3.14 测试");
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_whitespace_only() {
    for text in ["", "   \n\n"] {
        let result = lint(text);
        assert_eq!(result.formatted_text, "");
        assert!(result.diagnostics.is_empty());
        assert!(result.segments.is_empty());
        assert_eq!(result.stats.total_issues, 0);
    }
}

#[test]
fn test_context_from_same_line() {
    assert_eq!(lint("这是 OpenAI!").formatted_text, "这是 OpenAI！");

    let result = lint("中文\nHello, world!\n你好,世界");
    assert_eq!(result.formatted_text, "中文\nHello, world!\n你好，世界");
    assert_eq!(result.diagnostics.len(), 1);
}

#[test]
fn test_no_chinese_text() {
    let result = lint("Plain English, nothing to see here... really!");
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.formatted_text, result.original_text);
}

#[test]
fn test_ellipsis() {
    assert_eq!(lint("等一下...").formatted_text, "等一下……");
    assert_eq!(lint("等一下......好").formatted_text, "等一下……好");
}

#[test]
fn test_stray_space_before_punctuation() {
    assert_eq!(lint("你好 ，世界").formatted_text, "你好，世界");

    let result = lint("你好 ,世界");
    assert_eq!(result.formatted_text, "你好，世界");
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].original, " ,");
    assert_eq!(result.diagnostics[0].replacement, "，");
}

#[test]
fn test_fullwidth_digits_and_spacing() {
    let result = lint("这件蛋糕只卖１０００元。");
    assert_eq!(result.formatted_text, "这件蛋糕只卖 1000 元。");
    assert_eq!(result.stats.count(RuleId::FullwidthToHalfwidth), 4);
    assert_eq!(result.stats.count(RuleId::SpacingBetweenCjkAndAscii), 2);
    assert_consistent(&result);
}

#[test]
fn test_unterminated_code_is_plain_text() {
    assert_eq!(lint("看`未闭合,代码").formatted_text, "看`未闭合，代码");
    assert_eq!(lint("看```未闭合,代码").formatted_text, "看```未闭合，代码");
}

#[test]
fn test_segments_mark_changes() {
    let result = lint("你好,世界");
    let segments: Vec<(&str, bool, Option<&str>)> = result
        .segments
        .iter()
        .map(|s| (s.text.as_str(), s.changed, s.diagnostic_id.as_deref()))
        .collect();
    assert_eq!(
        segments,
        vec![("你好", false, None), ("，", true, Some("issue-0")), ("世界", false, None)]
    );
}

#[test]
fn test_formatted_text_is_clean() {
    let inputs = [
        "你好world,这是１２３test!",
        "这件蛋糕只卖１０００元。",
        "等一下... 好吗 ?",
        "中1.文",
        "中\u{3000},好",
        "价格１２．５元．",
        "（注意)：请看第3.2节 ,谢谢!",
    ];
    for input in inputs {
        let first = lint(input);
        let second = lint(&first.formatted_text);
        assert!(
            second.diagnostics.is_empty(),
            "{input:?} -> {:?} still has {:?}",
            first.formatted_text,
            second.diagnostics
        );
    }
}

#[test]
fn test_result_serializes_camel_case() {
    let json = serde_json::to_value(lint("中a")).unwrap();
    assert_eq!(json["formattedText"], "中 a");
    assert_eq!(json["diagnostics"][0]["ruleId"], "spacing-between-cjk-and-ascii");
    assert_eq!(json["diagnostics"][0]["sourceStart"], 1);
    assert_eq!(json["diagnostics"][0]["outputEnd"], 2);
    assert_eq!(json["segments"][1]["diagnosticId"], "issue-0");
    assert_eq!(json["stats"]["byRule"]["spacing-between-cjk-and-ascii"], 1);
}
