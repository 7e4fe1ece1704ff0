//! Colored prefixes for diagnostics printed to stderr.

use owo_colors::OwoColorize;

/// Colors are on unless `NO_COLOR` is set.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

fn prefix(label: &str, paint: fn(&str) -> String) -> String {
    if use_colors() {
        paint(label)
    } else {
        label.to_string()
    }
}

pub fn error_prefix() -> String {
    prefix("error:", |s| s.red().bold().to_string())
}

pub fn note_prefix() -> String {
    prefix("note:", |s| s.yellow().bold().to_string())
}

pub fn info_prefix() -> String {
    prefix("info:", |s| s.blue().bold().to_string())
}

pub fn error(msg: impl std::fmt::Display) {
    eprintln!("{} {}", error_prefix(), msg);
}

pub fn note(msg: impl std::fmt::Display) {
    eprintln!("{} {}", note_prefix(), msg);
}

pub fn info(msg: impl std::fmt::Display) {
    eprintln!("{} {}", info_prefix(), msg);
}
