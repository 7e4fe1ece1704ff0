//! Shared data models: lint results consumed by the report and the run
//! context threaded into it.

pub mod context;
pub mod lint;

pub use context::{CiCoordinates, LinkMode, RunContext};
pub use lint::{Fix, LintMessage, LintResult, Severity};
