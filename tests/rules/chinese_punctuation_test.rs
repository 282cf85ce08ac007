use copylint_lib::lint_context::LintContext;
use copylint_lib::rule::Rule;
use copylint_lib::rules::ChinesePunctuation;

fn edits(content: &str) -> Vec<(usize, usize, String)> {
    let rule = ChinesePunctuation::new();
    let ctx = LintContext::new(content);
    let mut found: Vec<_> = rule
        .check(&ctx)
        .into_iter()
        .map(|m| (m.start, m.end, m.replacement))
        .collect();
    found.sort();
    found
}

#[test]
fn test_punctuation_valid() {
    assert!(edits("你好，世界！这是“引号”。").is_empty());
}

#[test]
fn test_punctuation_invalid() {
    assert_eq!(
        edits("嗨!你在哪?"),
        vec![(1, 2, "！".to_string()), (5, 6, "？".to_string())]
    );
}

#[test]
fn test_punctuation_messages_differ_per_scan() {
    let rule = ChinesePunctuation::new();
    let ctx = LintContext::new("等等... 好 ，对,");
    let mut messages: Vec<&str> = rule.check(&ctx).iter().map(|m| m.message).collect();
    messages.sort();
    messages.dedup();
    assert_eq!(messages.len(), 3);
}

#[test]
fn test_punctuation_english_sentence_in_chinese_paragraph_line() {
    // The same line holds Chinese, so the comma is converted
    assert_eq!(edits("他说 hello, world"), vec![(8, 9, "，".to_string())]);
}

#[test]
fn test_punctuation_list_markers() {
    assert!(edits("1. 第一项\n2. 第二项\n10. 第十项").is_empty());
}

#[test]
fn test_punctuation_version_numbers() {
    assert!(edits("升级到 v1.2.3 版本").is_empty());
}

#[test]
fn test_punctuation_ellipsis_inside_url_is_protected() {
    assert!(edits("见 https://example.com/a...b").is_empty());
}

#[test]
fn test_punctuation_email_is_protected() {
    assert!(edits("联系 foo.bar@example.com 吧").is_empty());
}
