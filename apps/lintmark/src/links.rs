//! Permalinks into the hosted repository.
//!
//! URLs have the shape `<server>/<repo>/blob/<sha>/<path>` with an optional
//! `#L<line>C<col>[-L<endLine>[C<endCol>]]` fragment.

use crate::models::{CiCoordinates, LintMessage};

fn is_separator(ch: char) -> bool {
    ch == '/' || ch == '\\'
}

/// Strip `base` plus the following separator from `path`.
///
/// Returns `path` unchanged when `base` is empty, when `path` is not inside
/// `base` (`/repo2/x.js` is not inside `/repo`), or when nothing would be
/// left after stripping.
pub fn relativize<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    let rest = match path.strip_prefix(base) {
        Some(rest) => rest,
        None => return path,
    };
    let rest = if base.ends_with(is_separator) {
        rest
    } else {
        match rest.strip_prefix(is_separator) {
            Some(r) => r,
            None => return path,
        }
    };
    if rest.is_empty() {
        path
    } else {
        rest
    }
}

/// Percent-encode one path segment, keeping RFC 3986 unreserved characters.
fn encode_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for b in segment.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{:02X}", b)),
        }
    }
    out
}

/// URL of `file_path` at the commit.
pub fn file_url(ci: &CiCoordinates, file_path: &str) -> String {
    let rel = relativize(file_path, &ci.workspace).replace('\\', "/");
    let encoded: Vec<String> = rel.split('/').map(encode_segment).collect();
    format!(
        "{}/{}/blob/{}/{}",
        ci.server_url.trim_end_matches('/'),
        ci.repository,
        ci.sha,
        encoded.join("/").trim_start_matches('/')
    )
}

/// Fragment identifying the location range of `msg`, without the `#`.
///
/// `None` when the message has no line (e.g. ESLint's "File ignored"
/// warning).
pub fn location_fragment(msg: &LintMessage) -> Option<String> {
    let line = msg.line?;
    let mut out = format!("L{}", line);
    if let Some(column) = msg.column {
        out.push_str(&format!("C{}", column));
    }
    if let Some(end_line) = msg.end_line {
        out.push_str(&format!("-L{}", end_line));
        if let Some(end_column) = msg.end_column {
            out.push_str(&format!("C{}", end_column));
        }
    }
    Some(out)
}

/// URL of the exact location of `msg` in `file_path`, when it has one.
pub fn message_url(ci: &CiCoordinates, file_path: &str, msg: &LintMessage) -> Option<String> {
    location_fragment(msg).map(|frag| format!("{}#{}", file_url(ci, file_path), frag))
}
