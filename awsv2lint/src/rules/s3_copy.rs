use super::{aws, Finding, Rule};
use crate::syntax::{follows, matching_children, Matcher, ScriptTree};
use regex::Regex;
use std::sync::OnceLock;

const DESCRIPTION: &str = "`aws s3 cp`/`mv`/`sync` between two S3 locations copies object \
properties (metadata, tags, ACLs) in v2, which needs extra API permissions and changes \
behavior for cross-account copies. Appending `--copy-props none` restores the v1 behavior. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-s3-copy-metadata";

const FIX_SUFFIX: &str = " --copy-props none";

const COPY_OPERATIONS: [&str; 3] = ["cp", "mv", "sync"];

/// Returns the compiled `s3://` URI prefix regex for unquoted forms.
fn s3_uri_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new("^s3://").expect("invalid S3 URI regex"))
}

/// Returns the compiled `s3://` URI prefix regex for quoted forms.
fn quoted_s3_uri_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    #[allow(clippy::expect_used)]
    RE.get_or_init(|| Regex::new("^[\"']s3://").expect("invalid quoted S3 URI regex"))
}

/// v2 copies object properties between S3 locations by default.
pub struct S3CopyProps {
    uri: Matcher,
}

impl S3CopyProps {
    /// Builds the rule with its S3-URI argument matcher: an unquoted word, a
    /// double- or single-quoted string, or a concatenation (URIs built from
    /// variable expansions) starting with `s3://`.
    #[must_use]
    pub fn new() -> Self {
        let uri = Matcher::any(vec![
            Matcher::token_matching("word", s3_uri_re()),
            Matcher::token_matching("string", quoted_s3_uri_re()),
            Matcher::token_matching("raw_string", quoted_s3_uri_re()),
            Matcher::token_matching("concatenation", s3_uri_re()),
        ]);
        Self { uri }
    }
}

impl Default for S3CopyProps {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for S3CopyProps {
    fn name(&self) -> &str {
        "s3-copy-props"
    }

    fn description(&self) -> String {
        DESCRIPTION.to_owned()
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        let text = tree.text();
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| aws::command_has_token(*cmd, text, "s3"))
            .filter(|cmd| {
                COPY_OPERATIONS
                    .iter()
                    .any(|op| aws::command_has_token(*cmd, text, op))
            })
            .filter(|cmd| !aws::command_has_token(*cmd, text, "--copy-props"))
            .filter(|cmd| {
                // Both the source and the destination must be S3 URIs, with
                // the destination anywhere after the source (other arguments
                // may sit in between).
                let uris = matching_children(*cmd, &self.uri, text);
                match uris.split_first() {
                    Some((first, rest)) => rest.iter().any(|uri| follows(*first, *uri)),
                    None => false,
                }
            })
            .map(|cmd| aws::append_suffix_finding(tree, cmd, self.name(), DESCRIPTION, FIX_SUFFIX))
            .collect()
    }
}
