//! Interactive fix sessions: one accept/reject prompt per auto-fixable
//! finding, over an injected input/output pair so tests can drive them.

use crate::engine::{apply_fixes, lint_for_rule};
use crate::rules::{Finding, Rule};
use crate::syntax::ScriptTree;
use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

/// Outcome of an interactive session over one script.
#[derive(Debug)]
pub struct SessionOutcome {
    /// Final text with every accepted fix applied.
    pub text: String,
    /// Accepted findings, in application order.
    pub accepted: Vec<Finding>,
    /// Declined findings.
    pub declined: Vec<Finding>,
    /// Manual-review findings encountered before the session ended. Never
    /// prompted, always reported.
    pub manual: Vec<Finding>,
    /// Whether the user quit before the last rule finished.
    pub quit: bool,
}

enum Choice {
    Yes,
    No,
    Quit,
}

/// Walks the user through each auto-fixable finding, rule by rule. Accepted
/// edits of the rule pass in progress are committed before an early quit, so
/// confirmed work is never discarded; the tree is re-parsed after every
/// committed batch.
pub fn run_session<R: BufRead, W: Write>(
    source: &str,
    rules: &[Box<dyn Rule>],
    input: &mut R,
    output: &mut W,
) -> Result<SessionOutcome> {
    let mut tree = ScriptTree::parse(source)?;
    let mut accepted = Vec::new();
    let mut declined = Vec::new();
    let mut manual = Vec::new();
    let mut quit = false;

    for rule in rules {
        let findings = lint_for_rule(&tree, rule.as_ref());
        let mut batch = Vec::new();
        for finding in findings {
            if !finding.auto_fixable() {
                manual.push(finding);
                continue;
            }
            show_finding(output, &finding)?;
            match prompt(input, output)? {
                Choice::Yes => batch.push(finding),
                Choice::No => declined.push(finding),
                Choice::Quit => {
                    quit = true;
                    break;
                }
            }
        }
        if !batch.is_empty() {
            let next_text = apply_fixes(&tree, &batch);
            accepted.extend(batch);
            tree = ScriptTree::parse(next_text)?;
        }
        if quit {
            break;
        }
    }

    Ok(SessionOutcome {
        text: tree.text().to_owned(),
        accepted,
        declined,
        manual,
        quit,
    })
}

fn show_finding<W: Write>(output: &mut W, finding: &Finding) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(
        output,
        "{} {} (line {})",
        "Rule:".cyan().bold(),
        finding.rule_name,
        finding.line_start + 1
    )?;
    writeln!(output, "{}", finding.description)?;
    writeln!(
        output,
        "{} {}",
        "-".red(),
        finding.original_text.trim_end()
    )?;
    if let Some(edit) = &finding.edit {
        writeln!(output, "{} {}", "+".green(), edit.new_text.trim_end())?;
    }
    Ok(())
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Choice> {
    loop {
        write!(output, "{}", "Apply this fix? [y]es / [n]o / [q]uit: ".bold())?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF behaves like quit so piped input cannot loop forever.
            return Ok(Choice::Quit);
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Choice::Yes),
            "n" | "no" => return Ok(Choice::No),
            "q" | "quit" => return Ok(Choice::Quit),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::catalog;
    use std::io::Cursor;

    #[test]
    fn test_session_applies_accepted_and_skips_declined() {
        colored::control::set_override(false);
        let source = "aws s3 ls\naws ec2 describe-instances\n";
        let mut input = Cursor::new(b"y\nn\nq\n".to_vec());
        let mut output = Vec::new();

        let session = run_session(source, &catalog(), &mut input, &mut output).unwrap();

        // First rule (binary format): first command accepted, second
        // declined; second rule (pager): quit on its first prompt.
        assert_eq!(session.accepted.len(), 1);
        assert_eq!(session.declined.len(), 1);
        assert!(session.quit);
        assert_eq!(
            session.text,
            "aws s3 ls --cli-binary-format raw-in-base64-out\naws ec2 describe-instances\n"
        );
    }

    #[test]
    fn test_session_reports_manual_findings_without_prompting() {
        colored::control::set_override(false);
        let source = "aws ecr get-login\n";
        let mut input = Cursor::new(Vec::new());
        let mut output = Vec::new();

        let session = run_session(source, &catalog(), &mut input, &mut output).unwrap();

        assert!(session.accepted.is_empty());
        assert!(!session.quit);
        assert_eq!(session.manual.len(), 1);
        assert_eq!(session.manual[0].rule_name, "ecr-get-login");
        assert_eq!(session.text, source);
    }
}
