use assert_cmd::cargo::cargo_bin_cmd;
use copylint_lib::exit_codes::{SUCCESS, TOOL_ERROR};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn copylint() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("copylint");
    cmd.args(["--color", "never", "--no-config"]);
    cmd
}

#[test]
fn test_check_reports_issues_and_exits_1() {
    let temp_dir = tempdir().unwrap();
    let doc = temp_dir.path().join("doc.md");
    fs::write(&doc, "第一行\n你好,世界\n").unwrap();

    copylint()
        .arg("check")
        .arg(&doc)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("doc.md:2:3: [chinese-punctuation]"))
        .stdout(predicate::str::contains("\",\" → \"，\""))
        .stdout(predicate::str::contains("Found 1 issue in 1 file (1 file checked)"));

    assert_eq!(fs::read_to_string(&doc).unwrap(), "第一行\n你好,世界\n");
}

#[test]
fn test_check_clean_file_succeeds() {
    let temp_dir = tempdir().unwrap();
    let doc = temp_dir.path().join("clean.md");
    fs::write(&doc, "这是 OpenAI 的文档。\n").unwrap();

    copylint()
        .arg("check")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Success: No issues found in 1 file"));
}

#[test]
fn test_check_walks_current_directory() {
    let temp_dir = tempdir().unwrap();
    fs::create_dir_all(temp_dir.path().join("node_modules")).unwrap();
    fs::write(temp_dir.path().join("a.md"), "中文a").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "中文b").unwrap();
    fs::write(temp_dir.path().join("skip.rs"), "中文c").unwrap();
    fs::write(temp_dir.path().join("node_modules/c.md"), "中文d").unwrap();

    copylint()
        .current_dir(temp_dir.path())
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Found 2 issues in 2 files (2 files checked)"))
        .stdout(predicate::str::contains("skip.rs").not())
        .stdout(predicate::str::contains("c.md").not());
}

#[test]
fn test_check_fix_rewrites_file() {
    let temp_dir = tempdir().unwrap();
    let doc = temp_dir.path().join("doc.md");
    fs::write(&doc, "你好world,这是１２３test!").unwrap();

    copylint()
        .arg("check")
        .arg("--fix")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("Fixed: 7 issues in 1 file"));

    assert_eq!(fs::read_to_string(&doc).unwrap(), "你好 world，这是 123test！");
}

#[test]
fn test_fmt_rewrites_file_and_exits_0() {
    let temp_dir = tempdir().unwrap();
    let doc = temp_dir.path().join("doc.md");
    fs::write(&doc, "这件蛋糕只卖１０００元。").unwrap();

    copylint().arg("fmt").arg(&doc).assert().code(SUCCESS);

    assert_eq!(fs::read_to_string(&doc).unwrap(), "这件蛋糕只卖 1000 元。");
}

#[test]
fn test_fix_stdin_prints_fixed_text() {
    copylint()
        .args(["check", "--fix", "-"])
        .write_stdin("你好,世界")
        .assert()
        .success()
        .stdout("你好，世界")
        .stderr(predicate::str::contains("Fixed: 1 issue in 1 file"));
}

#[test]
fn test_check_stdin_without_fix() {
    copylint()
        .args(["check", "-"])
        .write_stdin("你好,世界")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("<stdin>:1:3:"));
}

#[test]
fn test_json_output() {
    let output = copylint()
        .args(["check", "--output-format", "json", "-"])
        .write_stdin("中a")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["path"], "<stdin>");
    assert_eq!(json[0]["formattedText"], "中 a");
    assert_eq!(json[0]["diagnostics"][0]["ruleId"], "spacing-between-cjk-and-ascii");
    assert_eq!(json[0]["diagnostics"][0]["line"], 1);
    assert_eq!(json[0]["diagnostics"][0]["column"], 2);
    assert_eq!(json[0]["stats"]["totalIssues"], 1);
}

#[test]
fn test_output_format_from_config() {
    let temp_dir = tempdir().unwrap();
    let config = temp_dir.path().join("copylint.toml");
    fs::write(&config, "[global]\noutput-format = \"json\"\n").unwrap();

    let output = cargo_bin_cmd!("copylint")
        .args(["--color", "never", "--config"])
        .arg(&config)
        .args(["check", "-"])
        .write_stdin("中文")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["diagnostics"].as_array().map(Vec::len), Some(0));
}

#[test]
fn test_rule_listing() {
    copylint()
        .arg("rule")
        .assert()
        .success()
        .stdout(predicate::str::contains("fullwidth-to-halfwidth"))
        .stdout(predicate::str::contains("chinese-punctuation"))
        .stdout(predicate::str::contains("spacing-between-cjk-and-ascii"))
        .stdout(predicate::str::contains("Total rules: 3"));
}

#[test]
fn test_rule_details() {
    copylint()
        .args(["rule", "chinese-punctuation"])
        .assert()
        .success()
        .stdout(predicate::str::contains("中英文标点规范"));
}

#[test]
fn test_unknown_rule_is_a_tool_error() {
    copylint()
        .args(["rule", "no-such-rule"])
        .assert()
        .code(TOOL_ERROR)
        .stderr(predicate::str::contains("Rule 'no-such-rule' not found"));
}

#[test]
fn test_missing_path_is_a_tool_error() {
    copylint()
        .args(["check", "/definitely/not/here.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn test_init_creates_config_once() {
    let temp_dir = tempdir().unwrap();

    cargo_bin_cmd!("copylint")
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created default configuration file"));

    let content = fs::read_to_string(temp_dir.path().join(".copylint.toml")).unwrap();
    assert!(content.contains("[global]"));
    assert!(content.contains("include-extensions"));

    cargo_bin_cmd!("copylint")
        .current_dir(temp_dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn test_invalid_config_is_a_tool_error() {
    let temp_dir = tempdir().unwrap();
    let config = temp_dir.path().join("bad.toml");
    fs::write(&config, "[global\nexclude = 3").unwrap();

    cargo_bin_cmd!("copylint")
        .arg("--config")
        .arg(&config)
        .args(["check", "-"])
        .write_stdin("中文")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Config error"));
}
