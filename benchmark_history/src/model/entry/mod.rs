//!
//! The benchmark entry.
//!

pub mod commit;
pub mod measurement;
pub mod tool;

use std::collections::BTreeMap;

use chrono::DateTime;
use chrono::Utc;

use self::commit::Commit;
use self::measurement::Measurement;
use self::tool::Tool;

///
/// One CI run's results for a suite.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Entry {
    /// The benchmarked commit.
    pub commit: Commit,
    /// Epoch milliseconds when the entry was recorded.
    pub date: u64,
    /// The comparison direction.
    pub tool: Tool,
    /// The measurements in recording order.
    pub benches: Vec<Measurement>,
}

impl Entry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(commit: Commit, date: u64, tool: Tool, benches: Vec<Measurement>) -> Self {
        Self {
            commit,
            date,
            tool,
            benches,
        }
    }

    ///
    /// The recording date, if it fits the calendar.
    ///
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        i64::try_from(self.date)
            .ok()
            .and_then(DateTime::from_timestamp_millis)
    }

    ///
    /// The first measurement with the given name.
    ///
    pub fn measurement(&self, name: &str) -> Option<&Measurement> {
        self.benches.iter().find(|bench| bench.name == name)
    }

    ///
    /// Measurements keyed by name. The first occurrence of a duplicate name wins.
    ///
    pub fn measurements_by_name(&self) -> BTreeMap<&str, &Measurement> {
        let mut result = BTreeMap::new();
        for bench in self.benches.iter() {
            result.entry(bench.name.as_str()).or_insert(bench);
        }
        result
    }
}
