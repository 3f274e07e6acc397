//! Terminal and JSON rendering of lint results.

mod diff;
mod json;
mod report;

pub use diff::print_diff;
pub use json::{json_report, FileReport};
pub use report::{
    print_findings, print_manual_finding, print_rule_summary, print_run_summary, FindingsDisplay,
};
