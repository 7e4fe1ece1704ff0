//! lintmark CLI binary entry point.
//! Resolves configuration and environment, then delegates to the library.

use clap::Parser;
use lintmark::cli::{Cli, Commands};
use lintmark::config::{self, Overrides};
use lintmark::error::Error;
use lintmark::models::{LinkMode, RunContext};
use lintmark::{about, input, output, report, utils};

fn main() {
    let cli = Cli::parse();
    match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Report {
            inputs,
            repo_root,
            cwd,
            links,
            output: out_file,
            step_summary,
        } => {
            let links_requested = links.is_some();
            let eff = resolve(Overrides {
                repo_root,
                cwd,
                links,
                output: out_file,
                step_summary: if step_summary { Some(true) } else { None },
                manifest: None,
            });
            if !eff.config_found {
                utils::note("No lintmark.toml found; using defaults.");
            }
            let results = input::load_results(&inputs).unwrap_or_else(|e| fail(e, 2));
            let ctx = RunContext::from_env(eff.cwd.clone(), eff.links);
            if should_note_unlinked(links_requested, &ctx) {
                utils::info("Not running in CI; locations are not linked.");
            }
            let markdown = report::render(&results, &ctx);
            output::print_report(&markdown);
            if let Some(path) = eff.output.as_ref() {
                output::write_report(path, &markdown).unwrap_or_else(|e| fail(e, 2));
            }
            if eff.step_summary {
                let target = std::env::var(output::STEP_SUMMARY_VAR).ok();
                output::append_step_summary(target, &markdown).unwrap_or_else(|e| fail(e, 2));
            }
        }
        Commands::About {
            repo_root,
            manifest,
            keys,
        } => {
            let eff = resolve(Overrides {
                repo_root,
                manifest,
                ..Default::default()
            });
            match about::about(&eff.manifest, &keys) {
                Ok(value) => println!("{}", value),
                Err(e @ Error::NotFound(_)) => fail(e, 1),
                Err(e) => fail(e, 2),
            }
        }
    }
}

/// Only worth saying when links were asked for on the command line.
fn should_note_unlinked(links_requested: bool, ctx: &RunContext) -> bool {
    links_requested && ctx.ci.is_none() && ctx.link_mode != LinkMode::None
}

fn resolve(overrides: Overrides) -> config::Effective {
    config::resolve_effective(&overrides).unwrap_or_else(|e| fail(e, 2))
}

fn fail(err: Error, code: i32) -> ! {
    utils::error(err);
    std::process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use lintmark::models::CiCoordinates;

    #[test]
    fn test_unlinked_note_only_when_links_requested() {
        let local = RunContext::new("/repo");
        assert!(!should_note_unlinked(false, &local));
        assert!(should_note_unlinked(true, &local));
        assert!(!should_note_unlinked(
            true,
            &RunContext::new("/repo").with_link_mode(LinkMode::None)
        ));
        let in_ci = RunContext::new("/repo").with_ci(CiCoordinates {
            server_url: "https://github.com".into(),
            repository: "o/r".into(),
            sha: "abc123".into(),
            workspace: "/repo".into(),
        });
        assert!(!should_note_unlinked(true, &in_ci));
    }
}
