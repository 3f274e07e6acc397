use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

const DESCRIPTION: &str = "Skeleton files consumed through `--cli-input-json` may carry \
pagination parameters, and AWS CLI v2 treats those as an instruction to disable automatic \
pagination. Whether that changes this script's behavior depends on the JSON document, so the \
call needs a manual look. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html";

const SUGGESTION: &str = "Check the referenced JSON input for pagination parameters (for \
example `MaxItems`/`NextToken`) and remove them unless pagination is meant to be manual.";

/// `--cli-input-json` interacts with v2 pagination; flag for manual review.
pub struct CliInputJson;

impl Rule for CliInputJson {
    fn name(&self) -> &str {
        "cli-input-json"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn auto_fixable(&self) -> bool {
        false
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| aws::command_has_token(*cmd, tree.text(), "--cli-input-json"))
            .map(|cmd| aws::manual_finding(tree, cmd, self.name(), DESCRIPTION, SUGGESTION))
            .collect()
    }
}
