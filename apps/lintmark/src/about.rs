//! Read a value out of a package manifest by a path of keys.
//!
//! `about engines node` on a `package.json` prints the value of
//! `engines.node`. Array elements are addressed by index. TOML manifests
//! (e.g. `Cargo.toml`) are supported through the same JSON value model.

use crate::error::{Error, Result};
use serde_json::Value as Json;
use std::fs;
use std::path::Path;

/// Parse the manifest at `path`, choosing TOML or JSON by extension.
pub fn load_manifest(path: &Path) -> Result<Json> {
    let raw = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if path.extension().and_then(|e| e.to_str()) == Some("toml") {
        toml::from_str::<Json>(&raw).map_err(|source| Error::Toml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(&raw).map_err(|source| Error::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn not_found(key: &str, found: &[String], manifest: &str) -> Error {
    if found.is_empty() {
        Error::NotFound(format!("Path \"{}\" not found in {}.", key, manifest))
    } else {
        Error::NotFound(format!(
            "Path \"{}\" not found at {} in {}.",
            key,
            found.join("."),
            manifest
        ))
    }
}

/// Walk `path` from `data`. Missing keys, `null` values and descending into
/// a scalar are reported as not found.
pub fn lookup<'a>(data: &'a Json, path: &[String], manifest: &str) -> Result<&'a Json> {
    let mut cur = data;
    for (i, key) in path.iter().enumerate() {
        let next = match cur {
            Json::Object(map) => map.get(key),
            Json::Array(items) => key.parse::<usize>().ok().and_then(|n| items.get(n)),
            _ => None,
        };
        match next {
            Some(v) if !v.is_null() => cur = v,
            _ => return Err(not_found(key, &path[..i], manifest)),
        }
    }
    Ok(cur)
}

/// Text printed for a value: strings raw, everything else as pretty JSON.
pub fn render_value(value: &Json) -> String {
    match value {
        Json::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Load `manifest` and return the rendered value at `path`.
pub fn about(manifest: &Path, path: &[String]) -> Result<String> {
    let data = load_manifest(manifest)?;
    let name = manifest
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| manifest.to_string_lossy().to_string());
    lookup(&data, path, &name).map(render_value)
}
