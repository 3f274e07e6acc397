//! Linting engine: runs rules against a tree, orders findings, and applies
//! fix batches.
//!
//! Edits carry byte offsets into the text their tree was parsed from, so a
//! batch is only ever applied to the tree that produced it, and the result
//! is re-parsed before the next rule runs.

use crate::rules::{Finding, Rule};
use crate::syntax::{Edit, ScriptTree};
use anyhow::Result;

fn finding_sort_key(finding: &Finding) -> (usize, usize) {
    match &finding.edit {
        Some(edit) => (edit.start_byte, edit.end_byte),
        None => (finding.line_start, finding.line_end),
    }
}

/// Runs one rule and returns its findings in deterministic left-to-right
/// order, independent of the tree traversal order that produced them.
#[must_use]
pub fn lint_for_rule(tree: &ScriptTree, rule: &dyn Rule) -> Vec<Finding> {
    let mut findings = rule.check(tree);
    findings.sort_by_key(finding_sort_key);
    findings
}

/// Runs every rule against one tree, pairing each finding with the rule that
/// produced it, all sorted by the shared left-to-right key.
#[must_use]
pub fn lint<'r>(tree: &ScriptTree, rules: &'r [Box<dyn Rule>]) -> Vec<(Finding, &'r dyn Rule)> {
    let mut out: Vec<(Finding, &dyn Rule)> = Vec::new();
    for rule in rules {
        for finding in rule.check(tree) {
            out.push((finding, rule.as_ref()));
        }
    }
    out.sort_by_key(|(finding, _)| finding_sort_key(finding));
    out
}

/// Applies the fixes carried by `findings` to `tree`'s document and returns
/// the resulting text. Findings without an edit are skipped; when no edit
/// remains the current text is returned unchanged.
#[must_use]
pub fn apply_fixes(tree: &ScriptTree, findings: &[Finding]) -> String {
    let edits: Vec<Edit> = findings.iter().filter_map(|f| f.edit.clone()).collect();
    if edits.is_empty() {
        return tree.text().to_owned();
    }
    tree.commit_edits(&edits)
}

/// Outcome of a full sequential run of a rule list over one script.
#[derive(Debug)]
pub struct RunOutcome {
    /// Final document text after every applied fix.
    pub text: String,
    /// Auto-fixable findings whose edits were applied, in application order.
    pub applied: Vec<Finding>,
    /// Manual-review findings. Their line numbers are valid in the final
    /// text because the manual rules run after every fixing rule.
    pub manual: Vec<Finding>,
}

impl RunOutcome {
    /// Whether any rule produced any finding.
    #[must_use]
    pub fn has_findings(&self) -> bool {
        !self.applied.is_empty() || !self.manual.is_empty()
    }
}

/// Runs `rules` in order over `source`: per rule, lint, partition into
/// auto-fixable and manual, commit the auto-fixable batch, then re-parse the
/// new text before the next rule (committed edits invalidate byte offsets).
pub fn run(source: &str, rules: &[Box<dyn Rule>]) -> Result<RunOutcome> {
    let mut tree = ScriptTree::parse(source)?;
    let mut applied = Vec::new();
    let mut manual = Vec::new();

    for rule in rules {
        let findings = lint_for_rule(&tree, rule.as_ref());
        let (fixable, review): (Vec<_>, Vec<_>) =
            findings.into_iter().partition(Finding::auto_fixable);
        manual.extend(review);
        if fixable.is_empty() {
            continue;
        }
        let next_text = apply_fixes(&tree, &fixable);
        applied.extend(fixable);
        tree = ScriptTree::parse(next_text)?;
    }

    Ok(RunOutcome {
        text: tree.text().to_owned(),
        applied,
        manual,
    })
}
