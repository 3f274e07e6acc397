use crate::engine::RunOutcome;
use crate::rules::Finding;
use crate::utils::normalize_display_path;
use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};
use rustc_hash::FxHashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

/// How auto-fixable findings are labelled in the findings table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingsDisplay {
    /// Fixes were only computed, not written.
    Fixable,
    /// Fixes were written out.
    Applied,
}

impl FindingsDisplay {
    const fn label(self) -> &'static str {
        match self {
            FindingsDisplay::Fixable => "auto-fixable",
            FindingsDisplay::Applied => "fixed",
        }
    }
}

fn create_table(headers: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(headers);
    table
}

fn command_preview(finding: &Finding) -> String {
    let first_line = finding.original_text.lines().next().unwrap_or_default();
    if first_line.chars().count() > 60 {
        let truncated: String = first_line.chars().take(59).collect();
        format!("{truncated}…")
    } else {
        first_line.to_owned()
    }
}

/// Prints the findings table for one script, followed by the manual-review
/// details. Prints nothing for a clean script.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_findings(
    writer: &mut impl Write,
    path: &Path,
    outcome: &RunOutcome,
    display: FindingsDisplay,
) -> std::io::Result<()> {
    if !outcome.has_findings() {
        return Ok(());
    }

    writeln!(
        writer,
        "\n{}",
        normalize_display_path(path).bold().underline()
    )?;
    let mut table = create_table(vec!["Rule", "Line", "Status", "Command"]);
    for finding in &outcome.applied {
        table.add_row(vec![
            Cell::new(&finding.rule_name).add_attribute(Attribute::Dim),
            Cell::new(finding.line_start + 1),
            Cell::new(display.label()).fg(Color::Green),
            Cell::new(command_preview(finding)),
        ]);
    }
    for finding in &outcome.manual {
        table.add_row(vec![
            Cell::new(&finding.rule_name).add_attribute(Attribute::Dim),
            Cell::new(finding.line_start + 1),
            Cell::new("manual review").fg(Color::Yellow),
            Cell::new(command_preview(finding)),
        ]);
    }
    writeln!(writer, "{table}")?;

    for finding in &outcome.manual {
        print_manual_finding(writer, finding)?;
    }
    Ok(())
}

/// Prints the description and suggestion for one manual-review finding.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_manual_finding(writer: &mut impl Write, finding: &Finding) -> std::io::Result<()> {
    writeln!(
        writer,
        "{} {} (line {})",
        "Review:".yellow().bold(),
        finding.rule_name,
        finding.line_start + 1
    )?;
    writeln!(writer, "  {}", finding.description)?;
    if let Some(suggestion) = &finding.suggested_fix {
        writeln!(writer, "  {} {suggestion}", "Suggestion:".cyan())?;
    }
    Ok(())
}

/// Prints the closing summary with colored pills.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_run_summary(
    writer: &mut impl Write,
    fixed: usize,
    manual: usize,
    display: FindingsDisplay,
) -> std::io::Result<()> {
    fn pill(label: &str, count: usize) -> String {
        if count == 0 {
            format!("{}: {}", label, count.to_string().green())
        } else {
            format!("{}: {}", label, count.to_string().red().bold())
        }
    }

    let fixed_label = match display {
        FindingsDisplay::Fixable => "Auto-fixable",
        FindingsDisplay::Applied => "Fixed",
    };
    writeln!(
        writer,
        "\n{}  {}",
        pill(fixed_label, fixed),
        pill("Manual review", manual)
    )?;
    Ok(())
}

/// Prints a per-rule summary table across every linted script.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_rule_summary(
    writer: &mut impl Write,
    outcomes: &[(PathBuf, RunOutcome)],
) -> std::io::Result<()> {
    let mut counts: FxHashMap<&str, (usize, usize)> = FxHashMap::default();
    for (_, outcome) in outcomes {
        for finding in &outcome.applied {
            counts.entry(&finding.rule_name).or_default().0 += 1;
        }
        for finding in &outcome.manual {
            counts.entry(&finding.rule_name).or_default().1 += 1;
        }
    }
    if counts.is_empty() {
        return Ok(());
    }

    let mut rows: Vec<(&str, (usize, usize))> = counts.into_iter().collect();
    rows.sort_unstable();

    writeln!(writer, "\n{}", "Findings per rule".bold().underline())?;
    let mut table = create_table(vec!["Rule", "Auto-fixes", "Manual"]);
    for (rule, (auto_fixes, manual)) in rows {
        table.add_row(vec![
            Cell::new(rule).add_attribute(Attribute::Dim),
            Cell::new(auto_fixes),
            Cell::new(manual),
        ]);
    }
    writeln!(writer, "{table}")?;
    Ok(())
}
