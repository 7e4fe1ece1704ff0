//! Run context handed to the report renderer.
//!
//! The renderer never touches the process environment; the CLI builds a
//! `RunContext` once (see `RunContext::from_env`) and passes it down.

use serde::Deserialize;
use std::str::FromStr;

/// Indicator variable; CI coordinates are only read when it equals `"true"`.
pub const CI_INDICATOR: &str = "GITHUB_ACTIONS";
pub const CI_SERVER_URL: &str = "GITHUB_SERVER_URL";
pub const CI_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const CI_SHA: &str = "GITHUB_SHA";
pub const CI_WORKSPACE: &str = "GITHUB_WORKSPACE";

#[derive(Debug, Clone, PartialEq, Eq)]
/// Coordinates of the hosted repository used to build permalinks.
pub struct CiCoordinates {
    pub server_url: String,
    pub repository: String,
    pub sha: String,
    pub workspace: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Where CI links are placed in the report.
pub enum LinkMode {
    /// Line and column cells of every row link to the exact location.
    #[default]
    Message,
    /// Only the file heading links to the file.
    File,
    /// No links even when CI coordinates are known.
    None,
}

impl FromStr for LinkMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "message" => Ok(LinkMode::Message),
            "file" => Ok(LinkMode::File),
            "none" => Ok(LinkMode::None),
            other => Err(format!(
                "invalid link mode '{}' (expected message|file|none)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Inputs of a render besides the results themselves.
pub struct RunContext {
    /// Working directory used to relativize file paths.
    pub cwd: String,
    pub ci: Option<CiCoordinates>,
    pub link_mode: LinkMode,
}

impl RunContext {
    pub fn new(cwd: impl Into<String>) -> Self {
        Self {
            cwd: cwd.into(),
            ci: None,
            link_mode: LinkMode::default(),
        }
    }

    pub fn with_ci(mut self, ci: CiCoordinates) -> Self {
        self.ci = Some(ci);
        self
    }

    pub fn with_link_mode(mut self, mode: LinkMode) -> Self {
        self.link_mode = mode;
        self
    }

    /// Coordinates to link with, honoring the link mode.
    pub fn links(&self) -> Option<&CiCoordinates> {
        match self.link_mode {
            LinkMode::None => None,
            _ => self.ci.as_ref(),
        }
    }

    /// Build a context from the process environment.
    pub fn from_env(cwd: impl Into<String>, link_mode: LinkMode) -> Self {
        Self::from_lookup(cwd, link_mode, |k| std::env::var(k).ok())
    }

    /// Build a context from an arbitrary variable lookup.
    pub fn from_lookup<F>(cwd: impl Into<String>, link_mode: LinkMode, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let ci = if lookup(CI_INDICATOR).as_deref() == Some("true") {
            Some(CiCoordinates {
                server_url: lookup(CI_SERVER_URL).unwrap_or_default(),
                repository: lookup(CI_REPOSITORY).unwrap_or_default(),
                sha: lookup(CI_SHA).unwrap_or_default(),
                workspace: lookup(CI_WORKSPACE).unwrap_or_default(),
            })
        } else {
            None
        };
        Self {
            cwd: cwd.into(),
            ci,
            link_mode,
        }
    }
}
