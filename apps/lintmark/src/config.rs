//! Configuration discovery and effective settings resolution.
//!
//! lintmark reads `lintmark.toml|yaml|yml` from the repository root (or the
//! closest ancestor) and merges it with CLI flags into an `Effective` config.
//! Defaults:
//! - `cwd`: the process working directory
//! - `links`: `message`
//! - `output`: none (stdout only)
//! - `step_summary`: false
//! - `about.manifest`: `package.json`
//!
//! Relative paths from the config file are resolved against the repository
//! root; relative CLI paths against the process working directory.
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::{Error, Result};
use crate::models::LinkMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILES: [&str; 3] = ["lintmark.toml", "lintmark.yaml", "lintmark.yml"];

#[derive(Debug, Default, Deserialize, Clone)]
/// Settings for the `about` command under `[about]`.
pub struct AboutCfg {
    pub manifest: Option<String>,
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `lintmark.toml|yaml`.
pub struct LintmarkConfig {
    pub cwd: Option<String>,
    pub links: Option<LinkMode>,
    pub output: Option<String>,
    pub step_summary: Option<bool>,
    #[serde(default)]
    pub about: Option<AboutCfg>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub cwd: String,
    pub links: LinkMode,
    pub output: Option<PathBuf>,
    pub step_summary: bool,
    pub manifest: PathBuf,
}

#[derive(Debug, Default, Clone)]
/// Raw CLI overrides; `None` means "not given".
pub struct Overrides {
    pub repo_root: Option<String>,
    pub cwd: Option<String>,
    pub links: Option<LinkMode>,
    pub output: Option<String>,
    pub step_summary: Option<bool>,
    pub manifest: Option<String>,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a `lintmark.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `LintmarkConfig` from `root` if a config file is present.
pub fn load_config(root: &Path) -> Result<Option<LintmarkConfig>> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        let s = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        let cfg: LintmarkConfig = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| Error::Config(format!("{}: {}", name, e)))?
        } else {
            serde_yaml::from_str(&s).map_err(|e| Error::Config(format!("{}: {}", name, e)))?
        };
        return Ok(Some(cfg));
    }
    Ok(None)
}

fn current_dir() -> Result<PathBuf> {
    std::env::current_dir()
        .map_err(|e| Error::Config(format!("cannot determine working directory: {}", e)))
}

/// `p` resolved against `base`, with `.` components and trailing separators
/// dropped.
fn under(base: &Path, p: &str) -> PathBuf {
    let p = Path::new(p);
    let joined = if p.is_absolute() {
        p.to_path_buf()
    } else {
        base.join(p)
    };
    joined.components().collect()
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Result<Effective> {
    let here = current_dir()?;
    let start = under(&here, cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let cwd = match (&cli.cwd, &cfg.cwd) {
        (Some(c), _) => under(&here, c),
        (None, Some(c)) => under(&repo_root, c),
        (None, None) => here.clone(),
    };
    let cwd = cwd.to_string_lossy().to_string();

    let links = cli.links.or(cfg.links).unwrap_or_default();

    let output = match (&cli.output, &cfg.output) {
        (Some(o), _) => Some(under(&here, o)),
        (None, Some(o)) => Some(under(&repo_root, o)),
        (None, None) => None,
    };

    let step_summary = cli.step_summary.or(cfg.step_summary).unwrap_or(false);

    let cfg_manifest = cfg.about.as_ref().and_then(|a| a.manifest.as_deref());
    let manifest = match (&cli.manifest, cfg_manifest) {
        (Some(m), _) => under(&here, m),
        (None, Some(m)) => under(&repo_root, m),
        (None, None) => here.join("package.json"),
    };

    Ok(Effective {
        repo_root,
        config_found,
        cwd,
        links,
        output,
        step_summary,
        manifest,
    })
}
