//!
//! Benchmark history input.
//!

pub mod error;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::path::PathBuf;

use crate::model::BenchmarkData;

use self::error::Error as InputError;

/// The global the dashboard reads the history from.
pub const GLOBAL_NAME: &str = "window.BENCHMARK_DATA";

/// File name patterns picked up when a directory is given.
pub const DIRECTORY_PATTERNS: [&str; 2] = ["**/data.js", "**/*.json"];

///
/// Parses the history from the generated script, or from bare JSON.
///
/// The script form is `window.BENCHMARK_DATA = { ... }` with an optional trailing semicolon.
///
pub fn parse(text: &str) -> Result<BenchmarkData, serde_json::Error> {
    serde_json::from_str(strip_assignment(text))
}

///
/// Strips the global assignment around the JSON object, if present.
///
pub fn strip_assignment(text: &str) -> &str {
    let text = text.trim();
    let body = match text.strip_prefix(GLOBAL_NAME) {
        Some(rest) => {
            let rest = rest.trim_start();
            rest.strip_prefix('=').unwrap_or(rest)
        }
        None => text,
    };
    body.trim().trim_end_matches(';').trim_end()
}

impl TryFrom<&Path> for BenchmarkData {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let data = parse(text.as_str()).map_err(|error| InputError::Parsing {
            error,
            path: path.to_path_buf(),
        })?;
        tracing::debug!(
            ?path,
            suites = data.entries.len(),
            entries = data.entry_count(),
            "loaded benchmark history"
        );
        Ok(data)
    }
}

///
/// Resolves the input paths given on the command line.
///
/// A single directory is searched recursively for history files.
///
pub fn resolve_paths(input_paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if input_paths.is_empty() {
        anyhow::bail!("No input files provided.");
    }
    if input_paths.len() > 1 || !input_paths[0].is_dir() {
        return Ok(input_paths);
    }

    let directory = input_paths[0].to_string_lossy();
    let mut paths = Vec::new();
    for pattern in DIRECTORY_PATTERNS.iter() {
        let resolution_pattern = format!("{directory}/{pattern}");
        paths.extend(glob::glob(resolution_pattern.as_str())?.filter_map(Result::ok));
    }
    paths.sort();
    paths.dedup();
    if paths.is_empty() {
        anyhow::bail!(
            "No history files found in {:?}. Expected one of: {}",
            input_paths[0],
            DIRECTORY_PATTERNS.join(", ")
        );
    }
    Ok(paths)
}

///
/// Loads and merges several history files, skipping empty ones.
///
pub fn load_merged(paths: &[PathBuf]) -> anyhow::Result<BenchmarkData> {
    let mut data = BenchmarkData::default();
    for path in paths.iter() {
        match BenchmarkData::try_from(path.as_path()) {
            Ok(input) => {
                let appended = data
                    .merge(input)
                    .map_err(|error| anyhow::anyhow!("Merging {path:?}: {error}"))?;
                tracing::info!(?path, appended, "merged benchmark history");
            }
            Err(InputError::EmptyFile { path }) => {
                tracing::warn!(?path, "input file is empty and will be skipped");
            }
            Err(error) => Err(error)?,
        }
    }
    Ok(data)
}
