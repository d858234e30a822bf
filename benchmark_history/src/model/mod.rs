//!
//! The benchmark history representation.
//!

pub mod entry;
pub mod error;
pub mod suite;


use std::collections::BTreeMap;

use regex::Regex;

use self::entry::Entry;
use self::error::Error;
use self::suite::Suite;

///
/// The benchmark history, as assigned to `window.BENCHMARK_DATA`.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkData {
    /// Epoch milliseconds of the last append.
    #[serde(default)]
    pub last_update: u64,
    /// The benchmarked repository URL.
    #[serde(default)]
    pub repo_url: String,
    /// The suites, keyed by name.
    #[serde(default)]
    pub entries: BTreeMap<String, Suite>,
}

impl BenchmarkData {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(repo_url: String) -> Self {
        Self {
            last_update: 0,
            repo_url,
            entries: BTreeMap::new(),
        }
    }

    ///
    /// Appends an entry to the named suite, creating the suite if necessary.
    ///
    pub fn push(&mut self, suite_name: &str, entry: Entry) -> Result<(), Error> {
        let date = entry.date;
        self.entries
            .entry(suite_name.to_owned())
            .or_default()
            .push(entry)
            .map_err(|source| Error::Suite {
                suite: suite_name.to_owned(),
                source,
            })?;
        self.last_update = self.last_update.max(date);
        Ok(())
    }

    ///
    /// Appends every entry of `other` that is not recorded yet.
    ///
    /// Returns the number of appended entries. On error the history is left unchanged.
    ///
    pub fn merge(&mut self, other: BenchmarkData) -> Result<usize, Error> {
        let mut merged = self.clone();
        let appended = merged.merge_unchecked(other)?;
        *self = merged;
        Ok(appended)
    }

    ///
    /// Appends entries in place, stopping at the first append error.
    ///
    fn merge_unchecked(&mut self, other: BenchmarkData) -> Result<usize, Error> {
        if self.repo_url.is_empty() {
            self.repo_url = other.repo_url;
        } else if !other.repo_url.is_empty() && other.repo_url != self.repo_url {
            tracing::warn!(
                expected = %self.repo_url,
                found = %other.repo_url,
                "merging history of a different repository"
            );
        }

        let mut appended = 0;
        for (suite_name, suite) in other.entries.into_iter() {
            for entry in suite.entries.into_iter() {
                let is_recorded = self
                    .entries
                    .get(suite_name.as_str())
                    .map(|existing| existing.contains(&entry))
                    .unwrap_or_default();
                if is_recorded {
                    tracing::debug!(suite = %suite_name, commit = %entry.commit.id, "entry already recorded");
                    continue;
                }
                self.push(suite_name.as_str(), entry)?;
                appended += 1;
            }
            self.entries.entry(suite_name).or_default();
        }
        self.last_update = self.last_update.max(other.last_update);

        Ok(appended)
    }

    ///
    /// Keeps only the suites whose names match the regular expression.
    ///
    pub fn retain_suites(&mut self, filter: &Regex) {
        self.entries.retain(|name, _| filter.is_match(name));
    }

    ///
    /// Returns the suite with the given name.
    ///
    pub fn suite(&self, name: &str) -> Option<&Suite> {
        self.entries.get(name)
    }

    ///
    /// Total number of entries in all suites.
    ///
    pub fn entry_count(&self) -> usize {
        self.entries.values().map(Suite::len).sum()
    }

    ///
    /// The most recent entry date across all suites.
    ///
    pub fn newest_date(&self) -> Option<u64> {
        self.entries
            .values()
            .filter_map(|suite| suite.latest().map(|entry| entry.date))
            .max()
    }
}
