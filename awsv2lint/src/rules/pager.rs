use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

const DESCRIPTION: &str = "AWS CLI v2 sends all output through a pager program by default, \
which blocks scripts waiting on command output. Appending `--no-cli-pager` restores the v1 \
behavior of writing directly to stdout. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-output-pager";

const FIX_SUFFIX: &str = " --no-cli-pager";

/// v2 pipes output through a pager by default.
pub struct PagerByDefault;

impl Rule for PagerByDefault {
    fn name(&self) -> &str {
        "pager-by-default"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| !aws::command_has_token(*cmd, tree.text(), "--no-cli-pager"))
            .filter(|cmd| !aws::is_ecr_get_login(*cmd, tree.text()))
            .map(|cmd| aws::append_suffix_finding(tree, cmd, self.name(), DESCRIPTION, FIX_SUFFIX))
            .collect()
    }
}
