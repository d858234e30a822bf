//!
//! The benchmark history input tests.
//!

use std::path::PathBuf;

use crate::fixture;
use crate::model::BenchmarkData;

use super::error::Error as InputError;

///
/// Creates a fresh scratch directory for a test.
///
fn scratch_directory(name: &str) -> PathBuf {
    let directory = std::env::temp_dir().join(format!(
        "benchmark-history-{name}-{}",
        std::process::id()
    ));
    let _ = std::fs::remove_dir_all(&directory);
    std::fs::create_dir_all(&directory).expect("Failed to create a scratch directory");
    directory
}

#[test]
fn script() {
    let data = fixture::sample();

    assert_eq!(data.last_update, 1770479559040);
    assert_eq!(data.repo_url, "https://github.com/paradedb/paradedb");
    assert_eq!(data.entries.len(), 2);
    assert_eq!(data.entry_count(), 4);
    assert_eq!(
        data.suite(fixture::TPS_SUITE)
            .and_then(|suite| suite.latest())
            .map(|entry| entry.commit.short_id()),
        Some("6e1a2db")
    );
}

#[test]
fn bare_json() {
    let json = super::strip_assignment(fixture::SAMPLE);
    let data = super::parse(json).expect("Failed to parse bare JSON");

    assert_eq!(data, fixture::sample());
}

#[test]
fn strip_assignment() {
    assert_eq!(super::strip_assignment("window.BENCHMARK_DATA = {};\n"), "{}");
    assert_eq!(super::strip_assignment("window.BENCHMARK_DATA={}"), "{}");
    assert_eq!(super::strip_assignment("  {\"a\": 1}  "), "{\"a\": 1}");
}

#[test]
fn empty_object() {
    let data = super::parse("window.BENCHMARK_DATA = {}").expect("Failed to parse");

    assert_eq!(data, BenchmarkData::default());
}

#[test]
fn malformed() {
    assert!(super::parse("window.BENCHMARK_DATA = { \"entries\": [").is_err());
    assert!(super::parse(r#"{ "entries": { "suite": [ { "date": 1 } ] } }"#).is_err());
}

#[test]
fn files() {
    let directory = scratch_directory("files");
    let nested = directory.join("logs-10K");
    std::fs::create_dir_all(&nested).expect("Failed to create a directory");
    std::fs::write(nested.join("data.js"), fixture::SAMPLE).expect("Failed to write");
    std::fs::write(directory.join("empty.json"), "").expect("Failed to write");
    std::fs::write(directory.join("notes.txt"), "ignored").expect("Failed to write");

    let paths = super::resolve_paths(vec![directory.clone()]).expect("Failed to resolve");
    assert_eq!(paths.len(), 2);

    match BenchmarkData::try_from(directory.join("empty.json").as_path()) {
        Err(InputError::EmptyFile { .. }) => {}
        other => panic!("Expected an empty file error, got {other:?}"),
    }
    match BenchmarkData::try_from(directory.join("missing.js").as_path()) {
        Err(InputError::Reading { .. }) => {}
        other => panic!("Expected a reading error, got {other:?}"),
    }

    let data = super::load_merged(&paths).expect("Failed to load");
    assert_eq!(data, fixture::sample());

    let _ = std::fs::remove_dir_all(&directory);
}

#[test]
fn no_paths() {
    assert!(super::resolve_paths(vec![]).is_err());
}
