//!
//! A flattened measurement of the benchmark history.
//!

use crate::model::BenchmarkData;

///
/// A flattened measurement of the benchmark history.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Row<'a> {
    /// The suite name.
    pub suite: &'a str,
    /// Epoch milliseconds when the entry was recorded.
    pub date: u64,
    /// The commit hash.
    pub commit: &'a str,
    /// The first line of the commit message.
    pub title: &'a str,
    /// The comparison direction.
    pub tool: &'a str,
    /// The measurement name.
    pub name: &'a str,
    /// The measured value.
    pub value: f64,
    /// The measurement unit.
    pub unit: &'a str,
    /// The free-text supplement.
    pub extra: &'a str,
}

impl<'a> Row<'a> {
    ///
    /// Flattens the history in suite, entry, and measurement order.
    ///
    pub fn collect(data: &'a BenchmarkData) -> Vec<Self> {
        let mut rows = Vec::with_capacity(data.entry_count() * 8);
        for (suite, entries) in data.entries.iter() {
            for entry in entries.entries.iter() {
                for bench in entry.benches.iter() {
                    rows.push(Self {
                        suite: suite.as_str(),
                        date: entry.date,
                        commit: entry.commit.id.as_str(),
                        title: entry.commit.title(),
                        tool: entry.tool.as_str(),
                        name: bench.name.as_str(),
                        value: bench.value,
                        unit: bench.unit.as_str(),
                        extra: bench.extra.as_deref().unwrap_or_default(),
                    });
                }
            }
        }
        rows
    }
}
