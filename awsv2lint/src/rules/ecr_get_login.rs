use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

const DESCRIPTION: &str = "`aws ecr get-login` was removed in AWS CLI v2 and there is no \
drop-in replacement; the command printed a `docker login` invocation with the password inline. \
See https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-ecr-get-login";

const SUGGESTION: &str = "Rewrite as `aws ecr get-login-password | docker login --username AWS \
--password-stdin <registry-uri>`.";

/// `ecr get-login` no longer exists in v2; flag for manual rework.
pub struct EcrGetLogin;

impl Rule for EcrGetLogin {
    fn name(&self) -> &str {
        "ecr-get-login"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn auto_fixable(&self) -> bool {
        false
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        let text = tree.text();
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| {
                aws::command_has_token(*cmd, text, "ecr")
                    && aws::command_has_token(*cmd, text, "get-login")
            })
            .map(|cmd| aws::manual_finding(tree, cmd, self.name(), DESCRIPTION, SUGGESTION))
            .collect()
    }
}
