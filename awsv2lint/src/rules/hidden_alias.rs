use super::{aws, Finding, Rule};
use crate::syntax::ScriptTree;

/// One row of the hidden-alias table from the v2 migration guide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenAlias {
    /// Service token (e.g. `iam`).
    pub service: &'static str,
    /// Operation token (e.g. `enable-mfa-device`).
    pub operation: &'static str,
    /// Undocumented v1 parameter name, without the leading `--`.
    pub alias: &'static str,
    /// Documented replacement parameter name, without the leading `--`.
    pub alternative: &'static str,
    /// Whether the owning service itself was removed from v2.
    pub deprecated: bool,
}

const fn alias(
    service: &'static str,
    operation: &'static str,
    alias: &'static str,
    alternative: &'static str,
) -> HiddenAlias {
    HiddenAlias {
        service,
        operation,
        alias,
        alternative,
        deprecated: false,
    }
}

const fn removed(
    service: &'static str,
    operation: &'static str,
    alias: &'static str,
    alternative: &'static str,
) -> HiddenAlias {
    HiddenAlias {
        service,
        operation,
        alias,
        alternative,
        deprecated: true,
    }
}

/// Undocumented parameter aliases dropped in v2, one rule instance per row.
///
/// The `importexport` rows are flagged as removed: the service itself is no
/// longer part of v2, which only changes the wording of the finding, not the
/// detection or the rewrite.
pub static HIDDEN_ALIASES: [HiddenAlias; 21] = [
    alias(
        "cognito-identity",
        "create-identity-pool",
        "open-id-connect-provider-ar-ns",
        "open-id-connect-provider-arns",
    ),
    alias("ec2", "bundle-instance", "owner-akid", "owner-access-key-id"),
    alias("ec2", "bundle-instance", "owner-sak", "owner-secret-access-key"),
    alias(
        "iam",
        "enable-mfa-device",
        "authentication-code-1",
        "authentication-code1",
    ),
    alias(
        "iam",
        "enable-mfa-device",
        "authentication-code-2",
        "authentication-code2",
    ),
    alias(
        "iam",
        "resync-mfa-device",
        "authentication-code-1",
        "authentication-code1",
    ),
    alias(
        "iam",
        "resync-mfa-device",
        "authentication-code-2",
        "authentication-code2",
    ),
    removed("importexport", "create-job", "a-pi-version", "api-version"),
    removed("importexport", "update-job", "a-pi-version", "api-version"),
    removed("importexport", "get-status", "a-pi-version", "api-version"),
    removed("importexport", "cancel-job", "a-pi-version", "api-version"),
    removed("importexport", "get-shipping-label", "street-1", "street1"),
    removed("importexport", "get-shipping-label", "street-2", "street2"),
    removed("importexport", "get-shipping-label", "street-3", "street3"),
    alias("lambda", "publish-version", "code-sha-256", "code-sha256"),
    alias(
        "lightsail",
        "import-key-pair",
        "public-key-b-ase64",
        "public-key-base64",
    ),
    alias(
        "opsworks",
        "register-volume",
        "ec-2-volume-id",
        "ec2-volume-id",
    ),
    alias("route53domains", "view-billing", "start-time", "start"),
    alias(
        "storagegateway",
        "create-tapes",
        "tape-size-in-b-ytes",
        "tape-size-in-bytes",
    ),
    alias(
        "storagegateway",
        "create-cached-iscsi-volume",
        "volume-size-in-b-ytes",
        "volume-size-in-bytes",
    ),
    alias(
        "storagegateway",
        "create-stored-iscsi-volume",
        "volume-size-in-b-ytes",
        "volume-size-in-bytes",
    ),
];

/// Detects one undocumented parameter alias on one service operation.
///
/// The rewrite is a plain substring replacement of `--{alias}` with
/// `--{alternative}` inside the command's text. A coincidental occurrence of
/// the alias string inside a value argument would be rewritten too; this
/// mirrors the matching the aliases had in v1 and has not been observed in
/// practice.
pub struct HiddenAliasRule {
    name: String,
    flag: String,
    entry: &'static HiddenAlias,
}

impl HiddenAliasRule {
    /// Builds the rule instance for one table row.
    #[must_use]
    pub fn new(entry: &'static HiddenAlias) -> Self {
        Self {
            name: format!(
                "hidden-alias-{}-{}-{}",
                entry.service, entry.operation, entry.alias
            ),
            flag: format!("--{}", entry.alias),
            entry,
        }
    }
}

impl Rule for HiddenAliasRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> String {
        let entry = self.entry;
        if entry.deprecated {
            format!(
                "The `{}` service was removed from AWS CLI v2 along with the undocumented \
`--{}` alias of `aws {} {}`; the documented parameter name is `--{}`. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-aliases",
                entry.service, entry.alias, entry.service, entry.operation, entry.alternative
            )
        } else {
            format!(
                "AWS CLI v2 drops the undocumented `--{}` alias of `aws {} {}`; use the \
documented `--{}` parameter instead. See \
https://docs.aws.amazon.com/cli/latest/userguide/cliv2-migration.html#cliv2-migration-aliases",
                entry.alias, entry.service, entry.operation, entry.alternative
            )
        }
    }

    fn check(&self, tree: &ScriptTree) -> Vec<Finding> {
        let text = tree.text();
        let replacement = format!("--{}", self.entry.alternative);
        aws::aws_commands(tree)
            .into_iter()
            .filter(|cmd| {
                aws::command_has_token(*cmd, text, self.entry.service)
                    && aws::command_has_token(*cmd, text, self.entry.operation)
                    && aws::command_has_token(*cmd, text, &self.flag)
            })
            .map(|cmd| {
                let original = tree.node_text(cmd).to_owned();
                let (line_start, line_end) = tree.line_range(cmd);
                let fixed = original.replace(&self.flag, &replacement);
                Finding {
                    rule_name: self.name.clone(),
                    description: self.description(),
                    line_start,
                    line_end,
                    edit: Some(tree.replace(cmd, fixed)),
                    original_text: original,
                    suggested_fix: None,
                }
            })
            .collect()
    }
}
