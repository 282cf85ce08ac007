use copylint_lib::lint_context::LintContext;
use copylint_lib::rule::Rule;
use copylint_lib::rules::SpacingBetweenCjkAndAscii;

fn insertion_points(content: &str) -> Vec<usize> {
    let rule = SpacingBetweenCjkAndAscii::new();
    let ctx = LintContext::new(content);
    rule.check(&ctx).into_iter().map(|m| m.start).collect()
}

#[test]
fn test_spacing_valid() {
    assert!(insertion_points("在 LeanCloud 上，数据存储是围绕 AVObject 进行的。").is_empty());
}

#[test]
fn test_spacing_invalid() {
    assert_eq!(
        insertion_points("在LeanCloud上，数据存储是围绕AVObject进行的。"),
        vec![1, 10, 19, 27]
    );
}

#[test]
fn test_spacing_digits() {
    assert_eq!(insertion_points("今天出去买菜花了5000元。"), vec![8, 12]);
}

#[test]
fn test_spacing_across_lines_is_not_needed() {
    assert!(insertion_points("中文\nEnglish").is_empty());
}

#[test]
fn test_spacing_compatibility_ideographs() {
    // U+F900 block counts as Han
    assert_eq!(insertion_points("\u{F900}a"), vec![1]);
}

#[test]
fn test_spacing_skips_inline_code_and_urls() {
    assert!(insertion_points("运行`cargo`命令").is_empty());
    assert!(insertion_points("见www.example.com").is_empty());
}
