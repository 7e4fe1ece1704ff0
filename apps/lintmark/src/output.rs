//! Report sinks: stdout, a report file, and the CI step summary.

use crate::error::{Error, Result};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Variable naming the file whose contents become the CI job summary.
pub const STEP_SUMMARY_VAR: &str = "GITHUB_STEP_SUMMARY";

/// Print the report to stdout. An empty report prints nothing.
pub fn print_report(markdown: &str) {
    if !markdown.is_empty() {
        println!("{}", markdown);
    }
}

/// Write the report to `path`, creating parent directories as needed.
pub fn write_report(path: &Path, markdown: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, with_newline(markdown)).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Append the report to the step summary file named by `target`, which is
/// normally the value of `GITHUB_STEP_SUMMARY`.
pub fn append_step_summary(target: Option<String>, markdown: &str) -> Result<PathBuf> {
    let path = target
        .filter(|t| !t.is_empty())
        .map(PathBuf::from)
        .ok_or_else(|| Error::Config(format!("{} is not set", STEP_SUMMARY_VAR)))?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    file.write_all(with_newline(markdown).as_bytes())
        .map_err(|source| Error::Write {
            path: path.clone(),
            source,
        })?;
    Ok(path)
}

fn with_newline(markdown: &str) -> String {
    if markdown.is_empty() || markdown.ends_with('\n') {
        markdown.to_string()
    } else {
        format!("{}\n", markdown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_report_creates_parents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("reports/lint.md");
        write_report(&path, "## a.js").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "## a.js\n");
    }

    #[test]
    fn test_step_summary_appends() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("summary.md");
        fs::write(&path, "# Build\n").unwrap();
        let target = Some(path.to_string_lossy().to_string());
        let written = append_step_summary(target, "## a.js").unwrap();
        assert_eq!(written, path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Build\n## a.js\n");
    }

    #[test]
    fn test_step_summary_requires_target() {
        let err = append_step_summary(None, "x").unwrap_err();
        assert_eq!(err.to_string(), "GITHUB_STEP_SUMMARY is not set");
        assert!(append_step_summary(Some(String::new()), "x").is_err());
    }
}
