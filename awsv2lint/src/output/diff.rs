use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::io::Write;

/// Prints a colored, context-limited diff of the original script against the
/// fixed text. Nothing is printed when the texts are identical.
///
/// # Errors
///
/// Returns an error if writing to the output fails.
pub fn print_diff(writer: &mut impl Write, original: &str, fixed: &str) -> std::io::Result<()> {
    if original == fixed {
        return Ok(());
    }

    let diff = TextDiff::from_lines(original, fixed);
    for (index, group) in diff.grouped_ops(2).iter().enumerate() {
        if index > 0 {
            writeln!(writer, "{}", "  ···".dimmed())?;
        }
        for op in group {
            for change in diff.iter_changes(op) {
                match change.tag() {
                    ChangeTag::Delete => write!(writer, "{}", format!("- {change}").red())?,
                    ChangeTag::Insert => write!(writer, "{}", format!("+ {change}").green())?,
                    ChangeTag::Equal => write!(writer, "  {change}")?,
                }
            }
        }
    }
    Ok(())
}
