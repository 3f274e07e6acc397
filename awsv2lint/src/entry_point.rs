//! Shared entry point used by the CLI binary and the integration tests, so
//! both exercise identical code paths.

use crate::cli::Cli;
use crate::config::{load_config, Config};
use crate::engine::{run, RunOutcome};
use crate::interactive;
use crate::output::{self, FileReport, FindingsDisplay};
use crate::rules::{self, Rule};
use crate::utils::{collect_scripts, normalize_display_path};
use anyhow::{bail, Context, Result};
use clap::Parser;
use colored::Colorize;
use rustc_hash::FxHashSet;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Runs the linter with the given arguments using stdout as the writer.
///
/// # Errors
///
/// Returns an error if a script cannot be read or written.
pub fn run_with_args(args: Vec<String>) -> Result<i32> {
    run_with_args_to(args, &mut std::io::stdout())
}

/// Runs the linter with the given arguments, writing output to `writer`.
/// This is the testable variant of [`run_with_args`].
///
/// # Errors
///
/// Returns an error if a script cannot be read or written.
pub fn run_with_args_to<W: Write>(args: Vec<String>, writer: &mut W) -> Result<i32> {
    let mut program_args = vec!["awsv2lint".to_owned()];
    program_args.extend(args);
    let cli = match Cli::try_parse_from(program_args) {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                write!(writer, "{e}")?;
                writer.flush()?;
                return Ok(0);
            }
            _ => {
                eprint!("{e}");
                return Ok(2);
            }
        },
    };

    if cli.no_color || cli.json {
        colored::control::set_override(false);
    }

    let scripts = collect_scripts(&cli.paths);
    if scripts.is_empty() {
        bail!("no shell scripts found under the given paths");
    }
    if cli.output.is_some() && scripts.len() > 1 {
        bail!("--output requires exactly one input script");
    }

    let config = load_config(&scripts[0]);
    let active = active_rules(&cli, &config);

    if cli.interactive {
        run_interactive(&cli, &scripts, &active, writer)
    } else {
        run_batch(&cli, &config, &scripts, &active, writer)
    }
}

/// The catalog minus every rule disabled through the config file or the
/// command line.
fn active_rules(cli: &Cli, config: &Config) -> Vec<Box<dyn Rule>> {
    let disabled: FxHashSet<&str> = config
        .awsv2lint
        .disabled_rules
        .iter()
        .chain(cli.disabled_rules.iter())
        .map(String::as_str)
        .collect();
    rules::catalog()
        .into_iter()
        .filter(|rule| !disabled.contains(rule.name()))
        .collect()
}

struct LintedScript {
    path: PathBuf,
    source: String,
    outcome: RunOutcome,
}

fn run_batch<W: Write>(
    cli: &Cli,
    config: &Config,
    scripts: &[PathBuf],
    rules: &[Box<dyn Rule>],
    writer: &mut W,
) -> Result<i32> {
    let mut linted = Vec::new();
    for path in scripts {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let outcome = run(&source, rules)?;
        linted.push(LintedScript {
            path: path.clone(),
            source,
            outcome,
        });
    }

    let writes_fixes = cli.apply || cli.output.is_some();

    if cli.json {
        let reports: Vec<FileReport<'_>> = linted
            .iter()
            .map(|script| FileReport {
                file: normalize_display_path(&script.path),
                applied: &script.outcome.applied,
                manual: &script.outcome.manual,
                fixed_text: &script.outcome.text,
            })
            .collect();
        writeln!(writer, "{}", output::json_report(&reports)?)?;
    } else {
        let display = if writes_fixes {
            FindingsDisplay::Applied
        } else {
            FindingsDisplay::Fixable
        };
        for script in &linted {
            output::print_findings(writer, &script.path, &script.outcome, display)?;
            if cli.fix {
                output::print_diff(writer, &script.source, &script.outcome.text)?;
            }
        }
    }

    if writes_fixes {
        write_fixes(cli, &linted, writer)?;
    }

    let fixed: usize = linted.iter().map(|s| s.outcome.applied.len()).sum();
    let manual: usize = linted.iter().map(|s| s.outcome.manual.len()).sum();

    if !cli.json {
        if cli.summary {
            let outcomes: Vec<(PathBuf, RunOutcome)> = linted
                .into_iter()
                .map(|script| (script.path, script.outcome))
                .collect();
            output::print_rule_summary(writer, &outcomes)?;
        }
        let display = if writes_fixes {
            FindingsDisplay::Applied
        } else {
            FindingsDisplay::Fixable
        };
        output::print_run_summary(writer, fixed, manual, display)?;
    }

    Ok(exit_code(config, writes_fixes, fixed, manual))
}

fn write_fixes<W: Write>(cli: &Cli, linted: &[LintedScript], writer: &mut W) -> Result<()> {
    for script in linted {
        if script.outcome.applied.is_empty() {
            continue;
        }
        let target = cli.output.clone().unwrap_or_else(|| script.path.clone());
        fs::write(&target, &script.outcome.text)
            .with_context(|| format!("failed to write {}", target.display()))?;
        if !cli.json {
            writeln!(
                writer,
                "{} {} ({} applied)",
                "Fixed:".green(),
                normalize_display_path(&target),
                script.outcome.applied.len()
            )?;
        }
    }
    Ok(())
}

fn run_interactive<W: Write>(
    cli: &Cli,
    scripts: &[PathBuf],
    rules: &[Box<dyn Rule>],
    writer: &mut W,
) -> Result<i32> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut manual_total = 0;

    for path in scripts {
        let source = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        writeln!(writer, "\n{}", normalize_display_path(path).bold().underline())?;

        let session = interactive::run_session(&source, rules, &mut input, writer)?;
        manual_total += session.manual.len();
        for finding in &session.manual {
            output::print_manual_finding(writer, finding)?;
        }
        if !session.accepted.is_empty() {
            let target = cli.output.clone().unwrap_or_else(|| path.clone());
            fs::write(&target, &session.text)
                .with_context(|| format!("failed to write {}", target.display()))?;
            writeln!(
                writer,
                "{} {} ({} applied)",
                "Fixed:".green(),
                normalize_display_path(&target),
                session.accepted.len()
            )?;
        }
        if session.quit {
            break;
        }
    }

    Ok(i32::from(manual_total > 0))
}

/// A run that writes fixes only fails on remaining manual findings; a
/// read-only run fails on any finding. `fail_on_findings = false` always
/// exits 0.
fn exit_code(config: &Config, writes_fixes: bool, fixed: usize, manual: usize) -> i32 {
    if !config.awsv2lint.fail_on_findings.unwrap_or(true) {
        return 0;
    }
    let failing = if writes_fixes { manual } else { fixed + manual };
    i32::from(failing > 0)
}
