use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

const DESCRIPTION: &str = "`aws cloudformation deploy` no longer returns a failed exit code \
when the deployment produces an empty changeset. Appending `--fail-on-empty-changeset` restores \
the v1 default. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html";

const FIX_SUFFIX: &str = " --fail-on-empty-changeset";

/// v2 flipped the empty-changeset default of `cloudformation deploy`.
pub struct DeployEmptyChangeset;

impl Rule for DeployEmptyChangeset {
    fn name(&self) -> &str {
        "deploy-empty-changeset"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        let text = tree.text();
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| {
                aws::command_has_token(*cmd, text, "cloudformation")
                    && aws::command_has_token(*cmd, text, "deploy")
            })
            .filter(|cmd| {
                !aws::command_has_token(*cmd, text, "--fail-on-empty-changeset")
                    && !aws::command_has_token(*cmd, text, "--no-fail-on-empty-changeset")
            })
            .map(|cmd| aws::append_suffix_finding(tree, cmd, self.name(), DESCRIPTION, FIX_SUFFIX))
            .collect()
    }
}
