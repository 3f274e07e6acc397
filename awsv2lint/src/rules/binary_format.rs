use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

const DESCRIPTION: &str = "AWS CLI v2 treats binary input and output parameters as \
base64-encoded strings by default. Appending `--cli-binary-format raw-in-base64-out` restores \
the v1 behavior for file-based binary parameters. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-binaryparam";

const FIX_SUFFIX: &str = " --cli-binary-format raw-in-base64-out";

/// v2 changed the default encoding of binary parameters.
pub struct BinaryParamsBase64;

impl Rule for BinaryParamsBase64 {
    fn name(&self) -> &str {
        "binary-params-base64"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| !aws::command_has_token(*cmd, tree.text(), "--cli-binary-format"))
            .filter(|cmd| !aws::is_ecr_get_login(*cmd, tree.text()))
            .map(|cmd| aws::append_suffix_finding(tree, cmd, self.name(), DESCRIPTION, FIX_SUFFIX))
            .collect()
    }
}
