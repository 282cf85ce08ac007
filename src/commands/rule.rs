//! Handler for the `rule` command.

use colored::*;

use copylint_lib::exit_codes::exit;
use copylint_lib::rule::{Rule, RuleId};
use copylint_lib::rules::{all_rules, rule_by_id};

fn print_rule(rule: &dyn Rule) {
    println!("{} {}", rule.id().as_str().cyan().bold(), rule.name());
    println!("  {}", rule.description());
}

/// List every rule in registration order, or show one.
pub fn handle_rule(rule: Option<String>) {
    let Some(name) = rule else {
        println!("{}", "Available rules:".bold());
        for (index, rule) in all_rules().iter().enumerate() {
            println!("{:>2}. {} {}", index + 1, rule.id().as_str().cyan(), rule.name());
        }
        println!("\nTotal rules: {}", RuleId::ALL.len());
        return;
    };

    match name.parse::<RuleId>().ok().and_then(rule_by_id) {
        Some(rule) => print_rule(rule.as_ref()),
        None => {
            eprintln!("{}: Rule '{}' not found", "Error".red().bold(), name);
            eprintln!("Run 'copylint rule' to list available rules");
            exit::tool_error();
        }
    }
}
