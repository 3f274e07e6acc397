//! Configuration loading for `.awsv2lint.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the configuration file discovered next to linted scripts.
pub const CONFIG_FILENAME: &str = ".awsv2lint.toml";

/// Top-level configuration document.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// The `[awsv2lint]` table.
    #[serde(default)]
    pub awsv2lint: LintConfig,
    /// Path the configuration was loaded from; `None` when defaults apply.
    #[serde(skip)]
    pub config_file_path: Option<PathBuf>,
}

/// Options for the linter.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LintConfig {
    /// Rule names that are never run.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Whether a run that leaves findings exits nonzero. Defaults to true.
    pub fail_on_findings: Option<bool>,
}

/// Loads configuration by walking up parent directories from `path`; falls
/// back to defaults when no file is found or a found file does not parse.
#[must_use]
pub fn load_config(path: &Path) -> Config {
    let mut current = path.to_path_buf();
    if current.is_file() {
        current.pop();
    }

    loop {
        let candidate = current.join(CONFIG_FILENAME);
        if candidate.exists() {
            if let Ok(content) = fs::read_to_string(&candidate) {
                if let Ok(mut config) = toml::from_str::<Config>(&content) {
                    config.config_file_path = Some(candidate);
                    return config;
                }
            }
        }
        if !current.pop() {
            break;
        }
    }

    Config::default()
}
