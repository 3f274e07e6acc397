//! End-to-end scenarios for the rule catalog over small scripts.
#![allow(clippy::unwrap_used)]

use awsv2lint::engine::{lint_for_rule, run};
use awsv2lint::rules::{catalog, HiddenAliasRule, S3CopyProps, HIDDEN_ALIASES};
use awsv2lint::syntax::ScriptTree;

#[test]
fn test_secretsmanager_put_secret_value_gets_binary_format_and_pager() {
    let source = "aws secretsmanager put-secret-value --secret-id x --secret-binary file://data.json\n";
    let outcome = run(source, &catalog()).unwrap();

    assert_eq!(outcome.applied.len(), 2);
    assert!(outcome.manual.is_empty());
    let names: Vec<&str> = outcome
        .applied
        .iter()
        .map(|f| f.rule_name.as_str())
        .collect();
    assert_eq!(names, ["binary-params-base64", "pager-by-default"]);
    assert!(outcome
        .text
        .trim_end()
        .ends_with("--cli-binary-format raw-in-base64-out --no-cli-pager"));
}

#[test]
fn test_ecr_get_login_is_manual_review_only() {
    let source = "aws ecr get-login --region us-west-2\n";
    let outcome = run(source, &catalog()).unwrap();

    assert!(outcome.applied.is_empty());
    assert_eq!(outcome.manual.len(), 1);
    let finding = &outcome.manual[0];
    assert_eq!(finding.rule_name, "ecr-get-login");
    assert!(!finding.auto_fixable());
    assert!(finding.edit.is_none());
    assert!(finding.suggested_fix.is_some());
    assert_eq!(outcome.text, source);
}

#[test]
fn test_s3_copy_needs_two_s3_uris() {
    let rule = S3CopyProps::new();

    let tree = ScriptTree::parse("aws s3 cp s3://src/key s3://dst/key\n").unwrap();
    let findings = lint_for_rule(&tree, &rule);
    assert_eq!(findings.len(), 1);
    let fix = &findings[0].edit.as_ref().unwrap().new_text;
    assert!(fix.ends_with(" --copy-props none"));

    let tree = ScriptTree::parse("aws s3 cp local.txt s3://dst/key\n").unwrap();
    assert!(lint_for_rule(&tree, &rule).is_empty());
}

#[test]
fn test_hidden_alias_rewrites_authentication_code() {
    let entry = HIDDEN_ALIASES
        .iter()
        .find(|e| e.operation == "enable-mfa-device" && e.alias == "authentication-code-1")
        .unwrap();
    let rule = HiddenAliasRule::new(entry);

    let tree = ScriptTree::parse(
        "aws iam enable-mfa-device --user-name Bob --authentication-code-1 123456\n",
    )
    .unwrap();
    let findings = lint_for_rule(&tree, &rule);
    assert_eq!(findings.len(), 1);

    let fix = &findings[0].edit.as_ref().unwrap().new_text;
    assert!(fix.contains("--authentication-code1"));
    assert!(!fix.contains("--authentication-code-1"));
}

#[test]
fn test_two_line_script_accumulates_three_fixes_without_changing_line_count() {
    let source =
        "aws iam enable-mfa-device --user-name Bob --authentication-code-1 123456\necho done\n";
    let outcome = run(source, &catalog()).unwrap();

    assert_eq!(outcome.applied.len(), 3);
    assert!(outcome.manual.is_empty());
    assert_eq!(outcome.text.lines().count(), 2);
    assert!(outcome.text.ends_with("echo done\n"));
    assert!(outcome.text.contains("--authentication-code1 123456"));
}
