//!
//! The benchmark suite.
//!

pub mod error;

use std::collections::BTreeSet;

use crate::model::entry::tool::Tool;
use crate::model::entry::Entry;

use self::error::Error;

///
/// The benchmark suite: a chronological, append-only sequence of entries.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Suite {
    /// The entries in append order.
    pub entries: Vec<Entry>,
}

impl Suite {
    ///
    /// Appends an entry, rejecting one older than the last recorded entry.
    ///
    pub fn push(&mut self, entry: Entry) -> Result<(), Error> {
        if let Some(last) = self.entries.last() {
            if entry.date < last.date {
                return Err(Error::OutOfOrder {
                    commit: entry.commit.id,
                    date: entry.date,
                    previous: last.date,
                });
            }
        }
        self.entries.push(entry);
        Ok(())
    }

    ///
    /// Whether an entry for the same commit and date is already recorded.
    ///
    pub fn contains(&self, entry: &Entry) -> bool {
        self.entries
            .iter()
            .any(|existing| existing.date == entry.date && existing.commit.id == entry.commit.id)
    }

    ///
    /// The most recent entry.
    ///
    pub fn latest(&self) -> Option<&Entry> {
        self.entries.last()
    }

    ///
    /// The entry recorded right before the most recent one.
    ///
    pub fn previous(&self) -> Option<&Entry> {
        self.entries.iter().rev().nth(1)
    }

    ///
    /// The most recent entry whose commit identifier starts with `prefix`.
    ///
    pub fn find_commit(&self, prefix: &str) -> Option<&Entry> {
        if prefix.is_empty() {
            return None;
        }
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.commit.id.starts_with(prefix))
    }

    ///
    /// The comparison direction of the most recent entry.
    ///
    pub fn tool(&self) -> Option<&Tool> {
        self.latest().map(|entry| &entry.tool)
    }

    ///
    /// All measurement names ever recorded in the suite.
    ///
    pub fn measurement_names(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(|entry| entry.benches.iter().map(|bench| bench.name.as_str()))
            .collect()
    }

    ///
    /// The number of entries.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    ///
    /// Whether the suite has no entries.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
