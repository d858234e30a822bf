//!
//! The benchmark history comparison tests.
//!

use std::str::FromStr;

use crate::fixture;
use crate::model::entry::tool::Tool;

use super::selector::Selector;
use super::series::Series;

fn approx_eq(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn factor_direction() {
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, 10.0, 30.0), Some(3.0));
    assert_eq!(super::factor(&Tool::CustomBiggerIsBetter, 10.0, 20.0), Some(0.5));
    assert_eq!(
        super::factor(&Tool::Unknown("cargo".to_owned()), 10.0, 5.0),
        Some(0.5)
    );
}

#[test]
fn factor_undefined() {
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, 0.0, 30.0), None);
    assert_eq!(super::factor(&Tool::CustomBiggerIsBetter, 0.0, 30.0), None);
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, 0.0, 0.0), None);
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, -1.0, 1.0), None);
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, 1.0, -1.0), None);
    assert_eq!(super::factor(&Tool::CustomBiggerIsBetter, f64::NAN, 1.0), None);
    assert_eq!(super::factor(&Tool::CustomBiggerIsBetter, 1.0, f64::INFINITY), None);
}

#[test]
fn factor_zero_candidate() {
    assert_eq!(
        super::factor(&Tool::CustomBiggerIsBetter, 10.0, 0.0),
        Some(f64::INFINITY)
    );
    assert_eq!(super::factor(&Tool::CustomSmallerIsBetter, 10.0, 0.0), Some(0.0));
}

#[test]
fn throughput_drops_to_zero() {
    let mut data = fixture::sample();
    let suite = data
        .entries
        .get_mut(fixture::TPS_SUITE)
        .expect("Always exists");
    let latest = suite.entries.last_mut().expect("Always exists");
    latest.benches[0].value = 0.0;

    let suite = data.suite(fixture::TPS_SUITE).expect("Always exists");
    let mut results = super::compare(
        fixture::TPS_SUITE,
        suite.previous().expect("Always exists"),
        suite.latest().expect("Always exists"),
        2.0,
    );
    results.sort_worst();

    assert_eq!(results.compared, 2);
    assert_eq!(results.negatives.len(), 2);
    assert_eq!(results.negatives[0].1.name, "Insert value - Primary - tps");
    assert!(results.worst.is_infinite());
    assert!(approx_eq(results.total, 1.25));
    let alerts: Vec<_> = results.alerts().map(|(_, run)| run.name).collect();
    assert_eq!(alerts, vec!["Insert value - Primary - tps"]);

    colored::control::set_override(false);
    let mut buffer = Vec::new();
    results.write_all(&mut buffer).expect("Always valid");
    let text = String::from_utf8(buffer).expect("Always valid");
    assert!(text.contains("inf"));
}

#[test]
fn latency_drops_to_zero() {
    let mut data = fixture::sample();
    let suite = data
        .entries
        .get_mut(fixture::LATENCY_SUITE)
        .expect("Always exists");
    let latest = suite.entries.last_mut().expect("Always exists");
    latest.benches[0].value = 0.0;

    let suite = data.suite(fixture::LATENCY_SUITE).expect("Always exists");
    let results = super::compare(
        fixture::LATENCY_SUITE,
        suite.previous().expect("Always exists"),
        suite.latest().expect("Always exists"),
        2.0,
    );

    assert_eq!(results.compared, 2);
    assert_eq!(results.best, 0.0);
    assert_eq!(results.positives.len(), 2);
    assert!(approx_eq(results.total, 0.5));
    assert!(!results.has_alerts());
}

#[test]
fn bigger_is_better() {
    let data = fixture::sample();
    let suite = data.suite(fixture::TPS_SUITE).expect("Always exists");
    let reference = suite.previous().expect("Always exists");
    let candidate = suite.latest().expect("Always exists");

    let mut results = super::compare(fixture::TPS_SUITE, reference, candidate, 2.0);
    results.sort_worst();

    assert_eq!(results.compared, 2);
    assert_eq!(results.negatives.len(), 1);
    assert_eq!(results.negatives[0].1.name, "Update value - Primary - tps");
    assert!(approx_eq(results.negatives[0].0, 1.25));
    assert_eq!(results.positives.len(), 1);
    assert_eq!(results.positives[0].1.name, "Insert value - Primary - tps");
    assert!(approx_eq(results.positives[0].0, 1000.0 / 1100.0));
    assert!(approx_eq(results.worst, 1.25));
    assert!(!results.has_alerts());
}

#[test]
fn smaller_is_better() {
    let data = fixture::sample();
    let suite = data.suite(fixture::LATENCY_SUITE).expect("Always exists");
    let reference = suite.previous().expect("Always exists");
    let candidate = suite.latest().expect("Always exists");

    let results = super::compare(fixture::LATENCY_SUITE, reference, candidate, 2.0);

    assert_eq!(results.compared, 2);
    assert!(approx_eq(results.worst, 3.0));
    assert!(approx_eq(results.best, 0.5));
    assert!(approx_eq(results.total, 1.5f64.sqrt()));
    assert_eq!(results.added, vec!["bucket-string"]);
    assert!(results.removed.is_empty());

    let alerts: Vec<_> = results.alerts().map(|(_, run)| run.name).collect();
    assert_eq!(alerts, vec!["top_n-score"]);
}

#[test]
fn threshold() {
    let data = fixture::sample();
    let suite = data.suite(fixture::LATENCY_SUITE).expect("Always exists");
    let reference = suite.previous().expect("Always exists");
    let candidate = suite.latest().expect("Always exists");

    assert!(super::compare("logs", reference, candidate, 3.0).has_alerts());
    assert!(!super::compare("logs", reference, candidate, 3.5).has_alerts());
}

#[test]
fn compare_all() {
    let data = fixture::sample();

    let results = super::compare_all(
        &data,
        &Selector::Previous,
        &Selector::Latest,
        super::DEFAULT_ALERT_THRESHOLD,
    );
    assert_eq!(results.len(), 2);
    assert_eq!(results.iter().filter(|results| results.has_alerts()).count(), 1);

    let same = super::compare_all(
        &data,
        &Selector::Latest,
        &Selector::Latest,
        super::DEFAULT_ALERT_THRESHOLD,
    );
    assert!(same.is_empty());

    let by_commit = super::compare_all(
        &data,
        &Selector::from_str("22434f1").expect("Always valid"),
        &Selector::Latest,
        super::DEFAULT_ALERT_THRESHOLD,
    );
    assert_eq!(by_commit.len(), 1);
    assert_eq!(by_commit[0].suite, fixture::TPS_SUITE);
}

#[test]
fn selector_parsing() {
    assert_eq!(Selector::from_str("latest").expect("Always valid"), Selector::Latest);
    assert_eq!(
        Selector::from_str("PREVIOUS").expect("Always valid"),
        Selector::Previous
    );
    assert_eq!(
        Selector::from_str("6E1A2DB").expect("Always valid"),
        Selector::Commit("6e1a2db".to_owned())
    );
    assert!(Selector::from_str("abc").is_err());
    assert!(Selector::from_str("main").is_err());
}

#[test]
fn series() {
    let data = fixture::sample();
    let suite = data.suite(fixture::LATENCY_SUITE).expect("Always exists");

    let series = Series::collect(suite, "top_n-score").expect("Always exists");
    assert_eq!(series.unit, "median ms");
    assert_eq!(series.points.len(), 2);
    assert_eq!(series.points[0].commit, "fbb23b0e1a3fbdc027879e3f765445d5e894b44e");
    assert_eq!(series.min(), Some(10.0));
    assert_eq!(series.max(), Some(30.0));
    assert_eq!(series.mean(), Some(20.0));
    assert_eq!(series.median(), Some(20.0));
    assert_eq!(series.latest(), Some(30.0));

    assert!(Series::collect(suite, "missing").is_none());

    let all = Series::all(suite);
    let names: Vec<&str> = all.iter().map(|series| series.name).collect();
    assert_eq!(names, vec!["aggregate-count", "bucket-string", "top_n-score"]);
    assert_eq!(all[1].points.len(), 1);
}

#[test]
fn write_all() {
    colored::control::set_override(false);
    let data = fixture::sample();
    let suite = data.suite(fixture::LATENCY_SUITE).expect("Always exists");
    let mut results = super::compare(
        fixture::LATENCY_SUITE,
        suite.previous().expect("Always exists"),
        suite.latest().expect("Always exists"),
        2.0,
    );
    results.sort_worst();

    let mut buffer = Vec::new();
    results.write_all(&mut buffer).expect("Always valid");
    let text = String::from_utf8(buffer).expect("Always valid");

    assert!(text.contains(fixture::LATENCY_SUITE));
    assert!(text.contains("fbb23b0"));
    assert!(text.contains("9b1c1d4"));
    assert!(text.contains("smaller is better"));
    assert!(text.contains("3.00x"));
    assert!(text.contains("+ bucket-string"));
}
