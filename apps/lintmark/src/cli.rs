//! CLI argument parsing via `clap`.

use crate::models::LinkMode;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "lintmark",
    version,
    about = "Lint results as Markdown",
    long_about = "lintmark — render ESLint JSON results as a Markdown report for CI summaries and PR comments, and read values from package manifests.\n\nConfiguration precedence: CLI > lintmark.toml > defaults.",
    after_help = "Examples:\n  eslint -f json . | lintmark report\n  lintmark report eslint.json --output lint.md\n  lintmark report 'reports/*.json' --step-summary\n  lintmark about engines node",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current lintmark version.")]
    Version,
    /// Render lint results as Markdown
    #[command(
        about = "Render a Markdown lint report",
        long_about = "Read ESLint JSON results (files, glob patterns or stdin) and print a Markdown report. When GITHUB_ACTIONS=true, locations link to the file at GITHUB_SHA.",
        after_help = "Examples:\n  eslint -f json . | lintmark report\n  lintmark report eslint.json --links file\n  lintmark report 'reports/*.json' --output lint.md --step-summary"
    )]
    Report {
        #[arg(help = "ESLint JSON result files or glob patterns (default: stdin)")]
        inputs: Vec<String>,
        #[arg(long, help = "Repository root used to find lintmark.toml (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Directory file paths are shown relative to (default: current dir)")]
        cwd: Option<String>,
        #[arg(long, help = "CI link placement: message|file|none (default: message)")]
        links: Option<LinkMode>,
        #[arg(long, help = "Also write the report to this file")]
        output: Option<String>,
        #[arg(long, action = clap::ArgAction::SetTrue, help = "Append the report to $GITHUB_STEP_SUMMARY")]
        step_summary: bool,
    },
    /// Show information from package.json
    #[command(
        about = "Show information from package.json",
        long_about = "Print the value found by following KEY... from the manifest root. Strings print raw; objects and arrays print as JSON.",
        after_help = "Examples:\n  lintmark about engines node\n  lintmark about --manifest Cargo.toml package version\n\nHint:\n  If used via pnpm, invoke with \"pnpm --silent\" to suppress additional output."
    )]
    About {
        #[arg(long, help = "Repository root used to find lintmark.toml (default: current dir)")]
        repo_root: Option<String>,
        #[arg(long, help = "Manifest to read (default: package.json)")]
        manifest: Option<String>,
        #[arg(required = true, help = "Key path to select, one key per argument")]
        keys: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report() {
        let cli = Cli::try_parse_from([
            "lintmark",
            "report",
            "a.json",
            "b/*.json",
            "--links",
            "file",
            "--step-summary",
        ])
        .unwrap();
        match cli.cmd {
            Commands::Report {
                inputs,
                links,
                step_summary,
                output,
                ..
            } => {
                assert_eq!(inputs, vec!["a.json", "b/*.json"]);
                assert_eq!(links, Some(LinkMode::File));
                assert!(step_summary);
                assert!(output.is_none());
            }
            _ => panic!("expected report"),
        }
    }

    #[test]
    fn test_about_requires_keys() {
        assert!(Cli::try_parse_from(["lintmark", "about"]).is_err());
        let cli = Cli::try_parse_from(["lintmark", "about", "engines", "node"]).unwrap();
        assert!(matches!(cli.cmd, Commands::About { ref keys, .. } if keys.len() == 2));
    }

    #[test]
    fn test_invalid_link_mode() {
        assert!(Cli::try_parse_from(["lintmark", "report", "--links", "row"]).is_err());
    }
}
