//! Loading lint results produced by `eslint --format json`.
//!
//! Inputs are file paths or glob patterns; results from several inputs are
//! concatenated in argument order. With no inputs, stdin is read.

use crate::error::{Error, Result};
use crate::models::LintResult;
use glob::glob;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

fn is_pattern(s: &str) -> bool {
    s.contains(['*', '?', '['])
}

/// Expand inputs into concrete paths, keeping argument order. Glob matches
/// are sorted by the glob crate (alphabetically).
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut out = Vec::new();
    for input in inputs {
        if !is_pattern(input) {
            out.push(PathBuf::from(input));
            continue;
        }
        let entries = glob(input).map_err(|source| Error::Pattern {
            pattern: input.clone(),
            source,
        })?;
        let before = out.len();
        out.extend(entries.flatten().filter(|p| p.is_file()));
        if out.len() == before {
            return Err(Error::NoMatch(input.clone()));
        }
    }
    Ok(out)
}

/// Parse a JSON array of lint results; `origin` names the source in errors.
pub fn parse_results(raw: &str, origin: &str) -> Result<Vec<LintResult>> {
    serde_json::from_str(raw).map_err(|source| Error::Results {
        origin: origin.to_string(),
        source,
    })
}

/// Load results from every input, or from stdin when `inputs` is empty.
pub fn load_results(inputs: &[String]) -> Result<Vec<LintResult>> {
    if inputs.is_empty() {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(Error::Stdin)?;
        return parse_results(&raw, "stdin");
    }
    let mut results = Vec::new();
    for path in expand_inputs(inputs)? {
        let raw = fs::read_to_string(&path).map_err(|source| Error::Read {
            path: path.clone(),
            source,
        })?;
        results.extend(parse_results(&raw, &path.to_string_lossy())?);
    }
    Ok(results)
}
