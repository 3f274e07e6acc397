//! Command-line surface.

use clap::Parser;
use std::path::PathBuf;

/// Help text for configuration file options, shown at the bottom of --help.
const CONFIG_HELP: &str = "\
CONFIGURATION FILE (.awsv2lint.toml):
  Create this file next to your scripts to set defaults. It is discovered by
  walking up from the first linted path.

  [awsv2lint]
  disabled_rules = [\"pager-by-default\"]   # rule names to skip
  fail_on_findings = true                  # exit 1 when findings remain
";

/// Command line interface configuration using `clap`.
/// This struct defines the arguments and flags accepted by the program.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "awsv2lint - Find and fix AWS CLI v1 usages in shell scripts that break under AWS CLI v2",
    long_about = None,
    after_help = CONFIG_HELP
)]
pub struct Cli {
    /// Shell scripts or directories to lint. Directories are walked
    /// gitignore-aware for *.sh/*.bash files and shell shebangs.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Preview the fixes this run would apply, as a diff. Writes nothing
    /// without --apply.
    #[arg(long)]
    pub fix: bool,

    /// Write fixes back to the script in place (use with --fix).
    #[arg(short = 'a', long)]
    pub apply: bool,

    /// Ask before each fix instead of applying all of them. Accepted fixes
    /// are written back to the script.
    #[arg(short = 'i', long, conflicts_with = "fix")]
    pub interactive: bool,

    /// Write the fixed script to this path instead of in place. Requires a
    /// single input script.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Output findings and the fixed text as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print a per-rule summary table.
    #[arg(long)]
    pub summary: bool,

    /// Disable a rule by name (repeatable; merged with the config file).
    #[arg(long = "disable-rule", value_name = "NAME")]
    pub disabled_rules: Vec<String>,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,
}
