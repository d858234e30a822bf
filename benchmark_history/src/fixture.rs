//!
//! Benchmark history samples shared by the tests.
//!

use crate::model::entry::commit::identity::Identity;
use crate::model::entry::commit::Commit;
use crate::model::entry::measurement::Measurement;
use crate::model::entry::tool::Tool;
use crate::model::entry::Entry;
use crate::model::BenchmarkData;

/// The throughput suite name.
pub const TPS_SUITE: &str = "pg_search single-server.toml Performance - TPS";

/// The latency suite name.
pub const LATENCY_SUITE: &str = "pg_search 'logs' (10K rows)";

/// A two-suite history in the generated script form.
pub const SAMPLE: &str = r#"window.BENCHMARK_DATA = {
  "lastUpdate": 1770479559040,
  "repoUrl": "https://github.com/paradedb/paradedb",
  "entries": {
    "pg_search single-server.toml Performance - TPS": [
      {
        "commit": {
          "author": { "email": "stuhood@paradedb.com", "name": "Stu Hood", "username": "stuhood" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "22434f12d7eec5084167804afd22b34f86810f09",
          "message": "fix: Allow the custom scan to be used in parallel plans (#4109)\n\n## What",
          "timestamp": "2026-02-04T12:00:00-08:00",
          "tree_id": "89b93237dbc7adc07aa46df51d9cdcbee97980ea",
          "url": "https://github.com/paradedb/paradedb/commit/22434f12d7eec5084167804afd22b34f86810f09"
        },
        "date": 1770300000000,
        "tool": "customBiggerIsBetter",
        "benches": [
          { "name": "Insert value - Primary - tps", "value": 1000, "unit": "median tps", "extra": "avg tps: 990.5, max tps: 1100, count: 300" },
          { "name": "Update value - Primary - tps", "value": 500, "unit": "median tps", "extra": "avg tps: 480, max tps: 520, count: 300" }
        ]
      },
      {
        "commit": {
          "author": { "email": "ming.ying.nyc@gmail.com", "name": "Ming", "username": "rebasedming" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "6e1a2dbd386bf9e37e7731d477c093f66ab1ff82",
          "message": "feat: move logical plan construction to planning time (#4096)",
          "timestamp": "2026-02-05T09:55:35-08:00",
          "tree_id": "89b93237dbc7adc07aa46df51d9cdcbee97980eb",
          "url": "https://github.com/paradedb/paradedb/commit/6e1a2dbd386bf9e37e7731d477c093f66ab1ff82"
        },
        "date": 1770316183513,
        "tool": "customBiggerIsBetter",
        "benches": [
          { "name": "Insert value - Primary - tps", "value": 1100, "unit": "median tps", "extra": "avg tps: 1090, max tps: 1210, count: 300" },
          { "name": "Update value - Primary - tps", "value": 400, "unit": "median tps", "extra": "avg tps: 390, max tps: 450, count: 300" }
        ]
      }
    ],
    "pg_search 'logs' (10K rows)": [
      {
        "commit": {
          "author": { "email": "mithun.cy@gmail.com", "name": "Mithun Chicklore Yogendra", "username": "mithuncy" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "fbb23b0e1a3fbdc027879e3f765445d5e894b44e",
          "message": "feat: Expose dual sorted/unsorted CustomPaths to Postgres planner (#4025)",
          "timestamp": "2026-02-06T10:00:00-08:00",
          "url": "https://github.com/paradedb/paradedb/commit/fbb23b0e1a3fbdc027879e3f765445d5e894b44e"
        },
        "date": 1770400000000,
        "tool": "customSmallerIsBetter",
        "benches": [
          { "name": "top_n-score", "value": 10.0, "unit": "median ms", "extra": "SELECT * FROM benchmark_logs WHERE message @@@ 'research' ORDER BY pdb.score(id) DESC LIMIT 10" },
          { "name": "aggregate-count", "value": 50.0, "unit": "median ms", "extra": "SELECT COUNT(*) FROM benchmark_logs WHERE message @@@ 'research'" }
        ]
      },
      {
        "commit": {
          "author": { "email": "mithun.cy@gmail.com", "name": "Mithun Chicklore Yogendra", "username": "mithuncy" },
          "committer": { "email": "noreply@github.com", "name": "GitHub", "username": "web-flow" },
          "distinct": true,
          "id": "9b1c1d4e0f2a3b4c5d6e7f8091a2b3c4d5e6f708",
          "message": "perf: \"quoted\" title, with a comma",
          "timestamp": "2026-02-07T07:52:39-08:00",
          "url": "https://github.com/paradedb/paradedb/commit/9b1c1d4e0f2a3b4c5d6e7f8091a2b3c4d5e6f708"
        },
        "date": 1770479559040,
        "tool": "customSmallerIsBetter",
        "benches": [
          { "name": "top_n-score", "value": 30.0, "unit": "median ms", "extra": "SELECT * FROM benchmark_logs WHERE message @@@ 'research' ORDER BY pdb.score(id) DESC LIMIT 10" },
          { "name": "aggregate-count", "value": 25.0, "unit": "median ms", "extra": "SELECT COUNT(*) FROM benchmark_logs WHERE message @@@ 'research'" },
          { "name": "bucket-string", "value": 5.0, "unit": "median ms" }
        ]
      }
    ]
  }
};
"#;

///
/// Parses the sample history.
///
pub fn sample() -> BenchmarkData {
    crate::input::parse(SAMPLE).expect("The sample is valid")
}

///
/// Creates an entry with a single measurement.
///
pub fn entry(id: &str, date: u64, tool: Tool, name: &str, value: f64) -> Entry {
    let identity = Identity {
        email: Some("dev@example.com".to_owned()),
        name: "Developer".to_owned(),
        username: Some("dev".to_owned()),
    };
    let commit = Commit {
        author: identity.clone(),
        committer: identity,
        distinct: Some(true),
        id: id.to_owned(),
        message: "chore: benchmark fixture".to_owned(),
        timestamp: "2026-02-01T00:00:00Z".to_owned(),
        tree_id: None,
        url: format!("https://github.com/example/example/commit/{id}"),
    };
    Entry::new(
        commit,
        date,
        tool,
        vec![Measurement::new(name.to_owned(), value, "median ms".to_owned())],
    )
}
