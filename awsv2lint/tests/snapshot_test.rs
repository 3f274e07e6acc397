//! Snapshot of the fixed text a full catalog run produces.
#![allow(clippy::unwrap_used)]

use awsv2lint::engine::run;
use awsv2lint::rules::catalog;

#[test]
fn test_fixed_script_snapshot() {
    let source = "\
#!/bin/sh
aws s3 cp s3://one/a s3://two/a
aws cloudformation deploy --stack-name demo
aws ecr get-login
";
    let outcome = run(source, &catalog()).unwrap();

    assert_eq!(outcome.applied.len(), 6);
    assert_eq!(outcome.manual.len(), 1);
    insta::assert_snapshot!(outcome.text, @r"
    #!/bin/sh
    aws s3 cp s3://one/a s3://two/a --cli-binary-format raw-in-base64-out --no-cli-pager --copy-props none
    aws cloudformation deploy --stack-name demo --cli-binary-format raw-in-base64-out --no-cli-pager --fail-on-empty-changeset
    aws ecr get-login
    ");
}
