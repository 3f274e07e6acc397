//! Engine-level properties: idempotence, ordering, quoting symmetry, and
//! non-interference between rules.
#![allow(clippy::unwrap_used)]

use awsv2lint::engine::{apply_fixes, lint, lint_for_rule, run};
use awsv2lint::rules::{catalog, BinaryParamsBase64, DeployEmptyChangeset, PagerByDefault, S3CopyProps};
use awsv2lint::syntax::ScriptTree;

#[test]
fn test_fixed_text_produces_no_further_auto_findings() {
    let source = "aws s3 cp s3://one/a s3://two/a\naws cloudformation deploy --stack-name demo\n";
    let first = run(source, &catalog()).unwrap();
    assert!(!first.applied.is_empty());

    let second = run(&first.text, &catalog()).unwrap();
    assert!(second.applied.is_empty(), "{:?}", second.applied);
    assert_eq!(second.text, first.text);
}

#[test]
fn test_existing_flag_is_detected_in_every_quote_form() {
    for flag in ["--no-cli-pager", "\"--no-cli-pager\"", "'--no-cli-pager'"] {
        let source = format!("aws s3 ls {flag}\n");
        let tree = ScriptTree::parse(source.as_str()).unwrap();
        assert!(
            lint_for_rule(&tree, &PagerByDefault).is_empty(),
            "pager re-flagged with existing {flag}"
        );
    }
}

#[test]
fn test_non_aws_commands_are_immune() {
    let tree = ScriptTree::parse("myaws s3 cp s3://a s3://b\n").unwrap();
    assert!(lint(&tree, &catalog()).is_empty());
}

#[test]
fn test_single_quoted_aws_matches_like_bare_aws() {
    let bare = run("aws ec2 describe-instances\n", &catalog()).unwrap();
    let quoted = run("'aws' ec2 describe-instances\n", &catalog()).unwrap();
    assert_eq!(bare.applied.len(), 2);
    assert_eq!(quoted.applied.len(), bare.applied.len());
}

#[test]
fn test_one_suffix_per_command_and_other_text_preserved() {
    let source = "aws s3 ls\naws ec2 describe-instances\naws sts get-caller-identity\n";
    let tree = ScriptTree::parse(source).unwrap();

    let findings = lint_for_rule(&tree, &PagerByDefault);
    assert_eq!(findings.len(), 3);

    let fixed = apply_fixes(&tree, &findings);
    assert_eq!(
        fixed,
        "aws s3 ls --no-cli-pager\n\
         aws ec2 describe-instances --no-cli-pager\n\
         aws sts get-caller-identity --no-cli-pager\n"
    );
}

#[test]
fn test_ecr_get_login_is_exempt_from_append_rules() {
    let tree = ScriptTree::parse("aws ecr get-login\n").unwrap();
    assert!(lint_for_rule(&tree, &BinaryParamsBase64).is_empty());
    assert!(lint_for_rule(&tree, &PagerByDefault).is_empty());
}

#[test]
fn test_independent_fixes_accumulate_on_one_command() {
    let source = "aws cloudformation deploy --template-file t.yml --stack-name s\n";
    let outcome = run(source, &catalog()).unwrap();

    assert_eq!(outcome.applied.len(), 3);
    assert_eq!(
        outcome.text,
        "aws cloudformation deploy --template-file t.yml --stack-name s \
--cli-binary-format raw-in-base64-out --no-cli-pager --fail-on-empty-changeset\n"
    );
}

#[test]
fn test_changeset_rule_respects_either_existing_flag() {
    for flag in ["--fail-on-empty-changeset", "--no-fail-on-empty-changeset"] {
        let source = format!("aws cloudformation deploy --stack-name s {flag}\n");
        let tree = ScriptTree::parse(source.as_str()).unwrap();
        assert!(
            lint_for_rule(&tree, &DeployEmptyChangeset).is_empty(),
            "re-flagged with existing {flag}"
        );
    }
}

#[test]
fn test_cli_input_json_is_reported_alongside_applied_fixes() {
    let source = "aws ec2 run-instances --cli-input-json file://in.json\n";
    let outcome = run(source, &catalog()).unwrap();

    assert_eq!(outcome.applied.len(), 2);
    assert_eq!(outcome.manual.len(), 1);
    assert_eq!(outcome.manual[0].rule_name, "cli-input-json");
    // Manual findings are computed against the already-fixed tree, so the
    // reported text carries the appended flags.
    assert!(outcome.manual[0].original_text.contains("--no-cli-pager"));
}

#[test]
fn test_s3_copy_tolerates_intervening_arguments() {
    let rule = S3CopyProps::new();
    let tree = ScriptTree::parse("aws s3 cp s3://a/k --quiet s3://b/\n").unwrap();
    assert_eq!(lint_for_rule(&tree, &rule).len(), 1);
}

#[test]
fn test_s3_copy_matches_concatenated_uris() {
    let rule = S3CopyProps::new();
    let tree = ScriptTree::parse("aws s3 sync s3://$SRC_BUCKET/data s3://$DST_BUCKET/data\n").unwrap();
    assert_eq!(lint_for_rule(&tree, &rule).len(), 1);
}

#[test]
fn test_s3_copy_ignores_non_copy_operations() {
    let rule = S3CopyProps::new();
    let tree = ScriptTree::parse("aws s3 ls s3://bucket s3://other\n").unwrap();
    assert!(lint_for_rule(&tree, &rule).is_empty());
}

#[test]
fn test_findings_are_ordered_left_to_right() {
    let source = "aws sts get-caller-identity\naws s3 ls\n";
    let tree = ScriptTree::parse(source).unwrap();
    let findings = lint_for_rule(&tree, &PagerByDefault);
    assert_eq!(findings.len(), 2);
    assert!(findings[0].line_start < findings[1].line_start);
    let first = findings[0].edit.as_ref().unwrap();
    let second = findings[1].edit.as_ref().unwrap();
    assert!(first.start_byte < second.start_byte);
}

#[test]
fn test_commands_inside_pipelines_and_substitutions_are_found() {
    let source = "aws s3 ls | grep bucket\nfor r in $(aws ec2 describe-regions); do echo \"$r\"; done\n";
    let outcome = run(source, &catalog()).unwrap();
    // Two aws invocations, two append rules each.
    assert_eq!(outcome.applied.len(), 4);
}

#[test]
fn test_malformed_script_degrades_to_no_match() {
    let source = "aws s3 ls ((((\nif then fi\n";
    let outcome = run(source, &catalog()).unwrap();
    assert!(outcome.manual.is_empty());
}
