use copylint_lib::lint_context::LintContext;
use copylint_lib::rule::Rule;
use copylint_lib::rules::{FullwidthToHalfwidth, KEEP_FULLWIDTH};

fn replacements(content: &str) -> Vec<(usize, String)> {
    let rule = FullwidthToHalfwidth::new();
    let ctx = LintContext::new(content);
    rule.check(&ctx).into_iter().map(|m| (m.start, m.replacement)).collect()
}

#[test]
fn test_fullwidth_valid() {
    assert!(replacements("这件蛋糕只卖 1000 元。").is_empty());
}

#[test]
fn test_fullwidth_invalid() {
    let found = replacements("这件蛋糕只卖１０００元。");
    assert_eq!(
        found,
        vec![
            (6, "1".to_string()),
            (7, "0".to_string()),
            (8, "0".to_string()),
            (9, "0".to_string())
        ]
    );
}

#[test]
fn test_fullwidth_letters_without_chinese() {
    assert_eq!(replacements("ＡＢ"), vec![(0, "A".to_string()), (1, "B".to_string())]);
}

#[test]
fn test_keep_list_is_untouched() {
    for &c in KEEP_FULLWIDTH.iter() {
        let text = format!("中{c}文");
        assert!(replacements(&text).is_empty(), "{c} should stay full-width");
    }
}

#[test]
fn test_fullwidth_in_fenced_code_is_untouched() {
    assert!(replacements("```\nconst n=１２３\n```").is_empty());
}
