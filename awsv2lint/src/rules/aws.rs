//! Shared building blocks for the rule catalog: the `aws`-command predicate
//! and the finding constructors every rule goes through.

use super::Finding;
use crate::syntax::{find_all, Matcher, ScriptTree};
use tree_sitter::Node;

/// Matches one token in the three lexical forms the linter recognizes: a
/// bare word, a double-quoted string, or a raw (single-quoted) string.
///
/// Escaped characters, command substitution, and variable-prefixed forms are
/// deliberately not recognized; widening the set would change which findings
/// existing scripts report.
#[must_use]
pub fn quoted_token(text: &str) -> Matcher {
    Matcher::any(vec![
        Matcher::token("word", text),
        Matcher::token("string", format!("\"{text}\"")),
        Matcher::token("raw_string", format!("'{text}'")),
    ])
}

/// Matches a shell command node whose program token is exactly `aws`.
///
/// The program token sits inside the command's `command_name` node, so a
/// first token that merely contains `aws` (`myaws`, `./aws-wrapper`) never
/// matches.
#[must_use]
pub fn aws_command() -> Matcher {
    Matcher::all(vec![
        Matcher::Kind("command"),
        Matcher::has_child(Matcher::all(vec![
            Matcher::Kind("command_name"),
            Matcher::has_child(quoted_token("aws")),
        ])),
    ])
}

/// All `aws` invocations in `tree`, in document order.
#[must_use]
pub fn aws_commands(tree: &ScriptTree) -> Vec<Node<'_>> {
    find_all(tree, &aws_command())
}

/// Whether `command` carries `token` as a direct argument, in any of the
/// three recognized quote forms.
#[must_use]
pub fn command_has_token(command: Node<'_>, source: &str, token: &str) -> bool {
    Matcher::has_child(quoted_token(token)).matches(command, source)
}

/// Whether `command` is an `aws ecr get-login` invocation. The command was
/// removed entirely in v2, so the append rules must not decorate it with
/// v2-only flags.
#[must_use]
pub(super) fn is_ecr_get_login(command: Node<'_>, source: &str) -> bool {
    command_has_token(command, source, "ecr") && command_has_token(command, source, "get-login")
}

/// Builds the append-suffix finding shared by the structural rules: the fix
/// replaces the whole command node with its original text plus `suffix`.
pub(super) fn append_suffix_finding(
    tree: &ScriptTree,
    command: Node<'_>,
    rule_name: &str,
    description: &str,
    suffix: &str,
) -> Finding {
    let original = tree.node_text(command).to_owned();
    let (line_start, line_end) = tree.line_range(command);
    let edit = tree.replace(command, format!("{original}{suffix}"));
    Finding {
        rule_name: rule_name.to_owned(),
        description: description.to_owned(),
        line_start,
        line_end,
        edit: Some(edit),
        original_text: original,
        suggested_fix: None,
    }
}

/// Builds a manual-review finding: no edit, guidance text instead.
pub(super) fn manual_finding(
    tree: &ScriptTree,
    command: Node<'_>,
    rule_name: &str,
    description: &str,
    suggestion: &str,
) -> Finding {
    let (line_start, line_end) = tree.line_range(command);
    Finding {
        rule_name: rule_name.to_owned(),
        description: description.to_owned(),
        line_start,
        line_end,
        edit: None,
        original_text: tree.node_text(command).to_owned(),
        suggested_fix: Some(suggestion.to_owned()),
    }
}
