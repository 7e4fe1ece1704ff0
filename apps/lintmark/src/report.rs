//! Markdown report renderer.
//!
//! Each file with issues becomes a section: a heading with its display path,
//! an aligned table of messages and a summary line. Files without issues
//! contribute nothing. Rendering is pure: the same results and context
//! always produce the same text.

use crate::links::{file_url, message_url, relativize};
use crate::models::{LinkMode, LintMessage, LintResult, RunContext};
use crate::summary::summarize;
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Table columns, in display order.
pub enum Column {
    Line,
    Column,
    Severity,
    Message,
    Rule,
}

pub const COLUMNS: [Column; 5] = [
    Column::Line,
    Column::Column,
    Column::Severity,
    Column::Message,
    Column::Rule,
];

impl Column {
    pub fn heading(self) -> &'static str {
        match self {
            Column::Line => "L",
            Column::Column => "C",
            Column::Severity => "Severity",
            Column::Message => "Message",
            Column::Rule => "Rule",
        }
    }
}

type CellFormatter = fn(&LintMessage) -> String;

fn severity_cell(msg: &LintMessage) -> String {
    msg.severity.label().to_string()
}

/// Columns whose value needs more than its plain string form.
const CELL_FORMATTERS: &[(Column, CellFormatter)] = &[(Column::Severity, severity_cell)];

/// Plain string form of a field; absent optional fields are empty.
fn default_cell(column: Column, msg: &LintMessage) -> String {
    match column {
        Column::Line => msg.line.map(|l| l.to_string()).unwrap_or_default(),
        Column::Column => msg.column.map(|c| c.to_string()).unwrap_or_default(),
        Column::Severity => i64::from(msg.severity).to_string(),
        Column::Message => msg.message.clone(),
        Column::Rule => msg.rule_id.clone().unwrap_or_default(),
    }
}

/// Unescaped text of `column` for `msg`.
pub fn format_cell(column: Column, msg: &LintMessage) -> String {
    CELL_FORMATTERS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, f)| f(msg))
        .unwrap_or_else(|| default_cell(column, msg))
}

/// Escape text so it renders literally inside Markdown.
///
/// `&`, `<` and `>` become entities; backslash, backtick, brackets, `*`,
/// `_`, `#` and `|` get a backslash. Each input character is mapped once,
/// so an escape is never escaped again.
pub fn escape_markdown(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\\' | '`' | '[' | ']' | '*' | '_' | '#' | '|' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

fn width(s: &str) -> usize {
    s.chars().count()
}

/// Final cell markup for every message row.
fn message_cells(result: &LintResult, ctx: &RunContext) -> Vec<Vec<String>> {
    let ci = match ctx.link_mode {
        LinkMode::Message => ctx.links(),
        _ => None,
    };
    result
        .messages
        .iter()
        .map(|msg| {
            COLUMNS
                .iter()
                .map(|&col| {
                    let text = escape_markdown(&format_cell(col, msg));
                    let url = match (col, ci) {
                        (Column::Line | Column::Column, Some(ci)) if !text.is_empty() => {
                            message_url(ci, &result.file_path, msg)
                        }
                        _ => None,
                    };
                    match url {
                        Some(url) => format!("[{}]({})", text, url),
                        None => text,
                    }
                })
                .collect()
        })
        .collect()
}

/// Width of each column: the longest of the heading and all cells.
pub fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    COLUMNS
        .iter()
        .enumerate()
        .map(|(i, col)| {
            rows.iter()
                .filter_map(|r| r.get(i))
                .map(|c| width(c))
                .fold(width(col.heading()), usize::max)
        })
        .collect()
}

fn table_row<S: AsRef<str>>(cells: &[S], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, w)| format!("{:<w$}", c.as_ref(), w = *w))
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn separator_row(widths: &[usize]) -> String {
    let dashes: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    format!("|-{}-|", dashes.join("-|-"))
}

/// Render the section for one file, or an empty string when it has no issues.
pub fn render_file(result: &LintResult, ctx: &RunContext) -> String {
    if !result.has_issues() {
        return String::new();
    }
    let display = relativize(&result.file_path, &ctx.cwd);
    let rows = message_cells(result, ctx);
    let widths = column_widths(&rows);
    let mut lines: Vec<String> = Vec::with_capacity(rows.len() + 8);

    match ctx.links() {
        Some(ci) if ctx.link_mode == LinkMode::File => {
            lines.push(format!("## [{}]({})", display, file_url(ci, &result.file_path)));
            lines.push(String::new());
        }
        Some(_) => {
            lines.push(format!("## {}", display));
            lines.push(String::new());
        }
        None => {
            lines.push(format!("## {}", display));
            lines.push(String::new());
            if display != result.file_path {
                lines.push(format!("(`{}`)", result.file_path));
                lines.push(String::new());
            }
        }
    }

    let headings: Vec<&str> = COLUMNS.iter().map(|c| c.heading()).collect();
    lines.push(table_row(&headings, &widths));
    lines.push(separator_row(&widths));
    for row in &rows {
        lines.push(table_row(row, &widths));
    }
    lines.push(String::new());
    lines.push(summarize(&result.messages).unwrap_or_default());
    lines.join("\n")
}

/// Render all results into one Markdown document, sections in input order.
pub fn render(results: &[LintResult], ctx: &RunContext) -> String {
    let sections: Vec<String> = results.par_iter().map(|r| render_file(r, ctx)).collect();
    sections.concat()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CiCoordinates, Fix};
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn ci() -> CiCoordinates {
        CiCoordinates {
            server_url: "https://github.com".into(),
            repository: "o/r".into(),
            sha: "abc123".into(),
            workspace: "/repo".into(),
        }
    }

    fn sample() -> LintResult {
        LintResult::from_messages(
            "/repo/src/a.js",
            vec![
                LintMessage::new(1, 7, 2, "'x' is unused.").with_rule("no-unused-vars"),
                LintMessage::new(12, 1, 1, "Use `===`").with_rule("eqeqeq"),
            ],
        )
    }

    #[test]
    fn test_render_plain_table() {
        let out = render(&[sample()], &RunContext::new("/repo"));
        let expected = indoc! {r#"
            ## src/a.js

            (`/repo/src/a.js`)

            | L  | C | Severity | Message        | Rule           |
            |----|---|----------|----------------|----------------|
            | 1  | 7 | error    | 'x' is unused. | no-unused-vars |
            | 12 | 1 | warn     | Use \`===\`    | eqeqeq         |

            2 problems (1 error, 1 warning)"#};
        assert_eq!(out, expected);
    }

    #[test]
    fn test_path_outside_cwd_is_shown_once() {
        let out = render(&[sample()], &RunContext::new("/elsewhere"));
        assert!(out.starts_with("## /repo/src/a.js\n\n| L "));
        assert!(!out.contains("(`"));
    }

    #[test]
    fn test_clean_files_are_skipped() {
        let clean = LintResult::from_messages("/repo/ok.js", vec![]);
        let off_only =
            LintResult::from_messages("/repo/off.js", vec![LintMessage::new(1, 1, 0, "off")]);
        assert_eq!(render_file(&clean, &RunContext::new("/repo")), "");
        assert_eq!(render_file(&off_only, &RunContext::new("/repo")), "");
        let out = render(&[clean, sample()], &RunContext::new("/repo"));
        assert!(out.starts_with("## src/a.js"));
    }

    #[test]
    fn test_counts_without_messages_render_empty_summary() {
        let mut r = LintResult::from_messages("/repo/a.js", vec![]);
        r.error_count = 1;
        let out = render_file(&r, &RunContext::new("/repo"));
        assert!(out.contains("| L | C | Severity | Message | Rule |"));
        assert!(out.ends_with("|---|---|----------|---------|------|\n\n"));
    }

    #[test]
    fn test_sections_concatenate_in_input_order() {
        let a = LintResult::from_messages("/repo/a.js", vec![LintMessage::new(1, 1, 2, "x")]);
        let b = LintResult::from_messages("/repo/b.js", vec![LintMessage::new(1, 1, 1, "y")]);
        let ctx = RunContext::new("/repo");
        let out = render(&[a.clone(), b.clone()], &ctx);
        assert_eq!(out, format!("{}{}", render_file(&a, &ctx), render_file(&b, &ctx)));
        assert!(out.contains("(1 error, 0 warnings)## b.js"));
    }

    #[test]
    fn test_columns_are_aligned() {
        let r = LintResult::from_messages(
            "/repo/a.js",
            vec![
                LintMessage::new(100, 22, 2, "long message with <html> & stuff")
                    .with_rule("@scope/rule-name"),
                LintMessage::new(1, 1, 9, "short"),
            ],
        );
        let out = render_file(&r, &RunContext::new("/repo"));
        let table: Vec<&str> = out.lines().filter(|l| l.starts_with('|')).collect();
        assert_eq!(table.len(), 4);
        let len = table[0].chars().count();
        assert!(table.iter().all(|l| l.chars().count() == len));
        assert!(out.contains("| unknown  |"));

        let rows = message_cells(&r, &RunContext::new("/repo"));
        let widths = column_widths(&rows);
        for (i, col) in COLUMNS.iter().enumerate() {
            let expected = rows
                .iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(col.heading().len()))
                .max()
                .unwrap();
            assert_eq!(widths[i], expected);
        }
    }

    #[test]
    fn test_severity_cells() {
        for (raw, label) in [(0, "off"), (1, "warn"), (2, "error"), (3, "unknown")] {
            let m = LintMessage::new(1, 1, raw, "m");
            assert_eq!(format_cell(Column::Severity, &m), label);
        }
    }

    #[test]
    fn test_missing_rule_is_empty_cell() {
        let m = LintMessage::new(3, 4, 2, "Parsing error");
        assert_eq!(format_cell(Column::Rule, &m), "");
        assert_eq!(format_cell(Column::Line, &m), "3");
        assert_eq!(format_cell(Column::Message, &m), "Parsing error");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a_b*c#d"), "a\\_b\\*c\\#d");
        assert_eq!(escape_markdown("[x](y)"), "\\[x\\](y)");
        assert_eq!(escape_markdown("<a> & `b`"), "&lt;a&gt; &amp; \\`b\\`");
        assert_eq!(escape_markdown("\\_"), "\\\\\\_");
        assert_eq!(escape_markdown("&lt;"), "&amp;lt;");
        assert_eq!(escape_markdown("a|b"), "a\\|b");
    }

    #[test]
    fn test_escaped_output_has_no_bare_control_characters() {
        let escaped = escape_markdown("\\<>&`[]*_#");
        let chars: Vec<char> = escaped.chars().collect();
        for (i, ch) in chars.iter().enumerate() {
            if matches!(ch, '`' | '[' | ']' | '*' | '_' | '#') {
                assert_eq!(chars[i - 1], '\\', "unescaped {:?} in {}", ch, escaped);
            }
            assert!(*ch != '<' && *ch != '>');
        }
    }

    #[test]
    fn test_message_links() {
        let r = LintResult::from_messages(
            "/repo/src/x.js",
            vec![LintMessage::new(10, 5, 2, "Bad").with_rule("r")],
        );
        let ctx = RunContext::new("/repo").with_ci(ci());
        let out = render_file(&r, &ctx);
        let url = "https://github.com/o/r/blob/abc123/src/x.js#L10C5";
        assert!(out.starts_with("## src/x.js\n\n| L "));
        assert!(out.contains(&format!("| [10]({}) | [5]({}) | error    | Bad", url, url)));
        assert!(!out.contains("(`"));
    }

    #[test]
    fn test_message_links_with_range() {
        let r = LintResult::from_messages(
            "/repo/src/x.js",
            vec![LintMessage::new(10, 5, 1, "Bad").with_end(11, Some(2))],
        );
        let ctx = RunContext::new("/repo").with_ci(ci());
        let out = render_file(&r, &ctx);
        assert!(out.contains("src/x.js#L10C5-L11C2)"));
    }

    #[test]
    fn test_ignored_file_warning_renders_empty_location() {
        let raw = r#"[{
            "filePath": "/repo/dist/bundle.js",
            "messages": [{"fatal": false, "severity": 1,
                "message": "File ignored because of a matching ignore pattern."}],
            "errorCount": 0, "fatalErrorCount": 0, "warningCount": 1,
            "fixableErrorCount": 0, "fixableWarningCount": 0
        }]"#;
        let results: Vec<LintResult> = serde_json::from_str(raw).unwrap();
        let plain = render(&results, &RunContext::new("/repo"));
        assert!(plain.contains(
            "|   |   | warn     | File ignored because of a matching ignore pattern. |      |"
        ));

        let linked = render(&results, &RunContext::new("/repo").with_ci(ci()));
        assert!(!linked.contains("#L"));
        assert!(linked.contains("|   |   | warn     |"));
    }

    #[test]
    fn test_file_link_mode() {
        let r = LintResult::from_messages(
            "/repo/src/x.js",
            vec![LintMessage::new(10, 5, 2, "Bad")
                .with_rule("r")
                .with_fix(Fix {
                    range: [0, 1],
                    text: String::new(),
                })],
        );
        let ctx = RunContext::new("/repo")
            .with_ci(ci())
            .with_link_mode(LinkMode::File);
        let out = render_file(&r, &ctx);
        assert!(out
            .starts_with("## [src/x.js](https://github.com/o/r/blob/abc123/src/x.js)\n\n| L  |"));
        assert!(out.contains("| 10 | 5 | error    | Bad     | r    |"));
        assert!(out.ends_with(
            "1 problem (1 error, 0 warnings) \\\n1 error and 0 warnings potentially fixable with the `--fix` option."
        ));
    }

    #[test]
    fn test_link_mode_none_falls_back_to_absolute_path() {
        let ctx = RunContext::new("/repo")
            .with_ci(ci())
            .with_link_mode(LinkMode::None);
        let out = render_file(&sample(), &ctx);
        assert!(out.contains("(`/repo/src/a.js`)"));
        assert!(!out.contains("https://"));
    }
}
