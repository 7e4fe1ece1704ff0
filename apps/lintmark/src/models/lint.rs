//! Lint result schema, matching the JSON emitted by `eslint --format json`.
//!
//! Only the fields the report reads are modeled strictly; the rest are kept
//! as optional so that newer ESLint versions still deserialize.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "i64", into = "i64")]
/// Message severity. ESLint uses 0 (off), 1 (warn) and 2 (error); any other
/// value is preserved as `Unknown`.
pub enum Severity {
    Off,
    Warn,
    Error,
    Unknown(i64),
}

impl From<i64> for Severity {
    fn from(v: i64) -> Self {
        match v {
            0 => Severity::Off,
            1 => Severity::Warn,
            2 => Severity::Error,
            other => Severity::Unknown(other),
        }
    }
}

impl From<Severity> for i64 {
    fn from(s: Severity) -> Self {
        match s {
            Severity::Off => 0,
            Severity::Warn => 1,
            Severity::Error => 2,
            Severity::Unknown(v) => v,
        }
    }
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Off => "off",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
/// Autofix payload: replace `range` (byte offsets) with `text`.
pub struct Fix {
    pub range: [usize; 2],
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
/// A single diagnostic at a file location.
pub struct LintMessage {
    /// Absent for file-level messages such as "File ignored because of a
    /// matching ignore pattern."
    #[serde(default)]
    pub line: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
    #[serde(default)]
    pub end_line: Option<u32>,
    #[serde(default)]
    pub end_column: Option<u32>,
    pub severity: Severity,
    pub message: String,
    #[serde(default)]
    pub rule_id: Option<String>,
    #[serde(default)]
    pub fix: Option<Fix>,
    #[serde(default)]
    pub fatal: Option<bool>,
    #[serde(default)]
    pub message_id: Option<String>,
    #[serde(default)]
    pub node_type: Option<String>,
}

impl LintMessage {
    /// Minimal message, mostly useful for building fixtures.
    pub fn new(line: u32, column: u32, severity: i64, message: &str) -> Self {
        Self {
            line: Some(line),
            column: Some(column),
            end_line: None,
            end_column: None,
            severity: Severity::from(severity),
            message: message.to_string(),
            rule_id: None,
            fix: None,
            fatal: None,
            message_id: None,
            node_type: None,
        }
    }

    pub fn with_rule(mut self, rule: &str) -> Self {
        self.rule_id = Some(rule.to_string());
        self
    }

    pub fn with_end(mut self, end_line: u32, end_column: Option<u32>) -> Self {
        self.end_line = Some(end_line);
        self.end_column = end_column;
        self
    }

    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    pub fn is_fixable(&self) -> bool {
        self.fix.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
/// Lint outcome for one source file.
pub struct LintResult {
    pub file_path: String,
    #[serde(default)]
    pub messages: Vec<LintMessage>,
    #[serde(default)]
    pub suppressed_messages: Vec<Json>,
    #[serde(default)]
    pub error_count: usize,
    #[serde(default)]
    pub fatal_error_count: usize,
    #[serde(default)]
    pub warning_count: usize,
    #[serde(default)]
    pub fixable_error_count: usize,
    #[serde(default)]
    pub fixable_warning_count: usize,
    #[serde(default)]
    pub used_deprecated_rules: Vec<Json>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl LintResult {
    /// Result for `file_path` with counts derived from `messages`.
    pub fn from_messages(file_path: &str, messages: Vec<LintMessage>) -> Self {
        let errors = messages.iter().filter(|m| m.severity == Severity::Error);
        let warnings = messages.iter().filter(|m| m.severity == Severity::Warn);
        let error_count = errors.clone().count();
        let fixable_error_count = errors.filter(|m| m.is_fixable()).count();
        let warning_count = warnings.clone().count();
        let fixable_warning_count = warnings.filter(|m| m.is_fixable()).count();
        let fatal_error_count = messages
            .iter()
            .filter(|m| m.fatal.unwrap_or(false))
            .count();
        Self {
            file_path: file_path.to_string(),
            messages,
            suppressed_messages: Vec::new(),
            error_count,
            fatal_error_count,
            warning_count,
            fixable_error_count,
            fixable_warning_count,
            used_deprecated_rules: Vec::new(),
            source: None,
        }
    }

    /// True when the aggregate counts report at least one issue.
    pub fn has_issues(&self) -> bool {
        self.error_count + self.fatal_error_count + self.warning_count > 0
    }
}
