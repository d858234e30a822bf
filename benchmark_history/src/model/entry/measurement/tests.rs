//!
//! The measurement supplement parser tests.
//!

use super::extra::Extra;
use super::Measurement;

#[test]
fn statistics() {
    let extra = Extra::parse("avg tps: 1021.5, max tps: 1200, count: 3000");

    assert!(!extra.is_prose());
    assert_eq!(extra.statistics.len(), 3);
    assert_eq!(extra.get("avg tps"), Some(1021.5));
    assert_eq!(extra.get("MAX  TPS"), Some(1200.0));
    assert_eq!(extra.get("count"), Some(3000.0));
    assert_eq!(extra.get("min tps"), None);
}

#[test]
fn statistics_with_units_and_separators() {
    let extra = Extra::parse("avg = 12.5ms; max = 40 ms\nsamples: 1e3");

    assert_eq!(extra.get("avg"), Some(12.5));
    assert_eq!(extra.get("max"), Some(40.0));
    assert_eq!(extra.get("samples"), Some(1000.0));
}

#[test]
fn statistics_with_label() {
    let extra = Extra::parse("Block count summary, avg: 10, max: 12");

    assert!(!extra.is_prose());
    assert_eq!(extra.get("avg"), Some(10.0));
    assert_eq!(extra.get("max"), Some(12.0));
}

#[test]
fn prose_query() {
    let extra = Extra::parse(
        "SET paradedb.enable_join_custom_scan TO on; SELECT f.id, f.title FROM files f WHERE f.size = 5 LIMIT 10",
    );

    assert!(extra.is_prose());
    assert!(extra.text.starts_with("SET paradedb"));
}

#[test]
fn statistics_among_prose() {
    let extra = Extra::parse("avg: 10, max: 20, note one, note two");

    assert!(!extra.is_prose());
    assert_eq!(extra.statistics.len(), 2);
    assert_eq!(extra.get("avg"), Some(10.0));
    assert_eq!(extra.get("max"), Some(20.0));
}

#[test]
fn repeated_keys() {
    let extra = Extra::parse("avg: 10, avg: 11, count: 3");

    assert_eq!(extra.statistics.len(), 2);
    assert_eq!(extra.get("avg"), Some(10.0));
    assert_eq!(extra.get("count"), Some(3.0));
}

#[test]
fn query_with_comparison() {
    assert!(Extra::parse("SELECT count FROM t WHERE id = 5").is_prose());
    assert!(Extra::parse("WHERE x = 5").is_prose());
    assert!(Extra::parse("SELECT * FROM t WHERE a = 1 AND b = 2").is_prose());
    assert!(Extra::parse("SET work_mem = 64").is_prose());
}

#[test]
fn long_label() {
    assert!(Extra::parse("average of all sampled runs: 12").is_prose());
    assert_eq!(Extra::parse("p99 latency ms: 12").get("p99 latency ms"), Some(12.0));
}

#[test]
fn empty() {
    let extra = Extra::parse("");

    assert!(extra.is_prose());
    assert!(extra.statistics.is_empty());
}

#[test]
fn missing_extra() {
    let measurement = Measurement::new("tps".to_owned(), 1.0, "median tps".to_owned());

    assert!(measurement.extra().is_prose());
}

#[test]
fn deserialize_without_optional_fields() {
    let measurement: Measurement =
        serde_json::from_str(r#"{ "name": "top_n-score", "value": 6.058, "unit": "median ms" }"#)
            .expect("Failed to parse measurement");

    assert_eq!(measurement.value, 6.058);
    assert_eq!(measurement.range, None);
    assert_eq!(measurement.extra, None);

    let serialized = serde_json::to_string(&measurement).expect("Always valid");
    assert!(!serialized.contains("extra"));
    assert!(!serialized.contains("range"));
}
