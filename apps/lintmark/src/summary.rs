//! Per-file problem statistics and the summary line printed under each table.

use crate::models::{LintMessage, Severity};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
/// Counts derived from a message list. Only warnings and errors count as
/// problems.
pub struct Statistics {
    pub problems: usize,
    pub errors: usize,
    pub warnings: usize,
    pub fixable_problems: usize,
    pub fixable_errors: usize,
    pub fixable_warnings: usize,
}

impl Statistics {
    pub fn from_messages(messages: &[LintMessage]) -> Self {
        let mut st = Statistics::default();
        for m in messages {
            let fixable = m.is_fixable();
            match m.severity {
                Severity::Warn => {
                    st.warnings += 1;
                    if fixable {
                        st.fixable_warnings += 1;
                    }
                }
                Severity::Error => {
                    st.errors += 1;
                    if fixable {
                        st.fixable_errors += 1;
                    }
                }
                _ => continue,
            }
            st.problems += 1;
            if fixable {
                st.fixable_problems += 1;
            }
        }
        st
    }
}

fn plural(n: usize, one: &str, many: &str) -> String {
    format!("{} {}", n, if n == 1 { one } else { many })
}

/// Summary for a message list, or `None` when it contains no problems.
///
/// With fixable problems the text spans two lines joined by a Markdown hard
/// line break (` \`).
pub fn summarize(messages: &[LintMessage]) -> Option<String> {
    let st = Statistics::from_messages(messages);
    if st.problems == 0 {
        return None;
    }
    let problems = format!(
        "{} ({}, {})",
        plural(st.problems, "problem", "problems"),
        plural(st.errors, "error", "errors"),
        plural(st.warnings, "warning", "warnings"),
    );
    if st.fixable_problems == 0 {
        return Some(problems);
    }
    Some(format!(
        "{} \\\n{} and {} potentially fixable with the `--fix` option.",
        problems,
        plural(st.fixable_errors, "error", "errors"),
        plural(st.fixable_warnings, "warning", "warnings"),
    ))
}
