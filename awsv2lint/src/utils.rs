//! Path helpers and shell-script discovery.

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Normalizes a path for CLI display.
///
/// - Converts backslashes to forward slashes (for cross-platform consistency)
/// - Strips leading "./" or ".\" prefix (for cleaner output)
#[must_use]
pub fn normalize_display_path(path: &Path) -> String {
    let s = path.to_string_lossy();
    let normalized = s.replace('\\', "/");
    normalized
        .strip_prefix("./")
        .unwrap_or(&normalized)
        .to_owned()
}

/// Whether `path` looks like a shell script: a `.sh`/`.bash` extension, or a
/// shebang line naming a shell interpreter.
#[must_use]
pub fn is_shell_script(path: &Path) -> bool {
    if matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("sh" | "bash")
    ) {
        return true;
    }
    has_shell_shebang(path)
}

fn has_shell_shebang(path: &Path) -> bool {
    let Ok(file) = File::open(path) else {
        return false;
    };
    let mut first_line = String::new();
    if BufReader::new(file).read_line(&mut first_line).is_err() {
        return false;
    }
    let Some(rest) = first_line.trim_end().strip_prefix("#!") else {
        return false;
    };

    let mut tokens = rest.split_whitespace();
    let Some(interpreter) = tokens.next().and_then(basename) else {
        return false;
    };
    let program = if interpreter == "env" {
        match tokens.next().and_then(basename) {
            Some(p) => p,
            None => return false,
        }
    } else {
        interpreter
    };
    matches!(program, "sh" | "bash" | "dash" | "ksh" | "zsh")
}

fn basename(token: &str) -> Option<&str> {
    token.rsplit('/').next()
}

/// Collects the shell scripts under `paths`: explicit files are taken
/// as-is, directories are walked gitignore-aware. The result is sorted and
/// de-duplicated.
#[must_use]
pub fn collect_scripts(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut seen: FxHashSet<PathBuf> = FxHashSet::default();
    let mut scripts = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkBuilder::new(path).build().flatten() {
                let candidate = entry.path();
                if entry.file_type().is_some_and(|t| t.is_file())
                    && is_shell_script(candidate)
                    && seen.insert(candidate.to_path_buf())
                {
                    scripts.push(candidate.to_path_buf());
                }
            }
        } else if path.is_file() && seen.insert(path.clone()) {
            scripts.push(path.clone());
        }
    }

    scripts.sort();
    scripts
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_normalize_display_path() {
        assert_eq!(normalize_display_path(Path::new("./scripts/a.sh")), "scripts/a.sh");
        assert_eq!(normalize_display_path(Path::new(".\\scripts\\a.sh")), "scripts/a.sh");
    }

    #[test]
    fn test_is_shell_script_by_extension() {
        assert!(is_shell_script(Path::new("deploy.sh")));
        assert!(is_shell_script(Path::new("deploy.bash")));
        assert!(!is_shell_script(Path::new("deploy.py")));
    }

    #[test]
    fn test_is_shell_script_by_shebang() {
        let dir = tempdir().unwrap();
        let bash = dir.path().join("deploy");
        fs::write(&bash, "#!/usr/bin/env bash\naws s3 ls\n").unwrap();
        assert!(is_shell_script(&bash));

        let python = dir.path().join("tool");
        fs::write(&python, "#!/usr/bin/env python3\nprint()\n").unwrap();
        assert!(!is_shell_script(&python));
    }

    #[test]
    fn test_collect_scripts_walks_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.sh"), "aws s3 ls\n").unwrap();
        fs::write(dir.path().join("b.txt"), "not a script\n").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.bash"), "aws s3 ls\n").unwrap();

        let scripts = collect_scripts(&[dir.path().to_path_buf()]);
        let names: Vec<String> = scripts
            .iter()
            .filter_map(|p| p.file_name().map(|n| n.to_string_lossy().into_owned()))
            .collect();
        assert_eq!(names, ["a.sh", "c.bash"]);
    }
}
