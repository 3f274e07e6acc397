use crate::rules::Finding;
use anyhow::Result;
use serde::Serialize;

/// Machine-readable report for one linted script.
#[derive(Debug, Serialize)]
pub struct FileReport<'a> {
    /// Script path, normalized for display.
    pub file: String,
    /// Findings whose fixes were (or would be) applied.
    pub applied: &'a [Finding],
    /// Findings requiring manual review.
    pub manual: &'a [Finding],
    /// Final text after every applied fix.
    pub fixed_text: &'a str,
}

/// Serializes the reports for every linted file as pretty-printed JSON.
pub fn json_report(reports: &[FileReport<'_>]) -> Result<String> {
    Ok(serde_json::to_string_pretty(reports)?)
}
