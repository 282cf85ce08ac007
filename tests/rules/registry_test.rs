use copylint_lib::rule::RuleId;
use copylint_lib::rules::{all_rules, rule_by_id};

#[test]
fn test_all_rules_in_registration_order() {
    let ids: Vec<RuleId> = all_rules().iter().map(|r| r.id()).collect();
    assert_eq!(
        ids,
        vec![
            RuleId::FullwidthToHalfwidth,
            RuleId::ChinesePunctuation,
            RuleId::SpacingBetweenCjkAndAscii
        ]
    );
}

#[test]
fn test_rule_names() {
    let names: Vec<&str> = all_rules().iter().map(|r| r.name()).collect();
    assert_eq!(names, vec!["全角半角统一", "中英文标点规范", "中英文/数字间空格"]);
}

#[test]
fn test_rule_lookup_by_parsed_id() {
    let rule = "spacing-between-cjk-and-ascii"
        .parse::<RuleId>()
        .ok()
        .and_then(rule_by_id)
        .unwrap();
    assert_eq!(rule.id(), RuleId::SpacingBetweenCjkAndAscii);
    assert!("Spacing".parse::<RuleId>().is_err());
}
