//! Rule dispatch, findings, and the built-in v1→v2 rule catalog.

mod aws;
mod binary_format;
mod changeset;
mod cli_input_json;
mod ecr_get_login;
mod hidden_alias;
mod pager;
mod s3_copy;

pub use aws::{aws_command, aws_commands, command_has_token, quoted_token};
pub use binary_format::BinaryParamsBase64;
pub use changeset::DeployEmptyChangeset;
pub use cli_input_json::CliInputJson;
pub use ecr_get_login::EcrGetLogin;
pub use hidden_alias::{HiddenAlias, HiddenAliasRule, HIDDEN_ALIASES};
pub use pager::PagerByDefault;
pub use s3_copy::S3CopyProps;

use crate::syntax::{Edit, ScriptTree};
use serde::Serialize;

/// A single v1→v2 incompatibility detected on one command invocation.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    /// Name of the rule that produced this finding.
    pub rule_name: String,
    /// Explanation of the incompatibility, copied from the rule so it stays
    /// displayable independent of the rule object's lifetime.
    pub description: String,
    /// 0-based first line of the offending command.
    pub line_start: usize,
    /// 0-based last line of the offending command.
    pub line_end: usize,
    /// Proposed fix, present iff a safe automatic rewrite exists for this
    /// specific occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit: Option<Edit>,
    /// Exact source text of the matched command, used for diffing.
    pub original_text: String,
    /// Free-text guidance shown when no automatic fix exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_fix: Option<String>,
}

impl Finding {
    /// Whether this specific occurrence carries an applicable fix.
    #[must_use]
    pub fn auto_fixable(&self) -> bool {
        self.edit.is_some()
    }
}

/// Trait defining one v1→v2 migration rule.
pub trait Rule: Send + Sync {
    /// Stable identifier used for display, de-duplication, and sorting.
    fn name(&self) -> &str;
    /// Static explanation of the incompatibility and its remediation.
    fn description(&self) -> String;
    /// Whether this rule can ever propose an automatic fix.
    fn auto_fixable(&self) -> bool {
        true
    }
    /// Scans `tree` and returns one finding per matching command invocation,
    /// in document order. Never fails: constructs the rule does not
    /// understand are simply not matched.
    fn check(&self, tree: &ScriptTree) -> Vec<Finding>;
}

/// Builds the full rule catalog in its fixed execution order: the four
/// structural append rules, then every hidden-alias rule, then the two
/// manual-review rules.
///
/// The order is a contract: manual findings are computed against a tree that
/// already carries every automatic fix (stable line numbers for display),
/// and a command accumulates multiple appended flags without later rules
/// re-triggering on flags added by earlier ones.
#[must_use]
pub fn catalog() -> Vec<Box<dyn Rule>> {
    let mut rules: Vec<Box<dyn Rule>> = vec![
        Box::new(BinaryParamsBase64),
        Box::new(PagerByDefault),
        Box::new(DeployEmptyChangeset),
        Box::new(S3CopyProps::new()),
    ];
    rules.extend(
        HIDDEN_ALIASES
            .iter()
            .map(|entry| Box::new(HiddenAliasRule::new(entry)) as Box<dyn Rule>),
    );
    rules.push(Box::new(EcrGetLogin));
    rules.push(Box::new(CliInputJson));
    rules
}
