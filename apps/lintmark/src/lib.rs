//! lintmark core library.
//!
//! Renders ESLint results as a Markdown report, optionally linking each
//! location to the hosted repository when running in CI, and reads values
//! from package manifests.
//!
//! High-level modules:
//! - `report`: Markdown rendering (table layout, escaping, sections).
//! - `summary`: Per-file problem statistics and summary line.
//! - `links`: Path relativization and permalinks into the repository.
//! - `models`: Lint result schema and the run context.
//! - `about`: Manifest key-path lookup.
//! - `input`: Loading results from files, globs or stdin.
//! - `output`: Report sinks (stdout, file, CI step summary).
//! - `config`: Discovery and effective configuration resolution.
//! - `cli`: CLI argument parsing (binary uses this).
//! - `utils`: Colored diagnostic prefixes.
pub mod about;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod links;
pub mod models;
pub mod output;
pub mod report;
pub mod summary;
pub mod utils;

pub use error::{Error, Result};
pub use models::{LintMessage, LintResult, RunContext};
pub use report::render;
