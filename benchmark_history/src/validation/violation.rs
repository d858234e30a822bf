//!
//! A data-quality violation.
//!

use crate::model::entry::commit::Commit;
use crate::validation::severity::Severity;

///
/// A data-quality violation.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Violation {
    /// The entry is dated before its predecessor.
    DateOutOfOrder {
        /// The predecessor date.
        previous: u64,
        /// The entry date.
        date: u64,
    },
    /// The comparison direction is not one of the known values.
    UnknownTool {
        /// The recorded value.
        tool: String,
    },
    /// The measurement value is NaN or infinite.
    NonFiniteValue {
        /// The measurement name.
        name: String,
    },
    /// The measurement has an empty name.
    EmptyName {
        /// The measurement position within the entry.
        index: usize,
    },
    /// The measurement has an empty unit.
    EmptyUnit {
        /// The measurement name.
        name: String,
    },
    /// The commit identifier is not a full hexadecimal hash.
    MalformedCommitId {
        /// The recorded identifier.
        id: String,
    },
    /// The commit was already recorded in the suite.
    DuplicateCommit {
        /// The commit identifier.
        id: String,
        /// The index of the first entry for the commit.
        first_index: usize,
    },
    /// The entry has no measurements.
    NoMeasurements,
    /// The suite has no entries.
    EmptySuite,
    /// The comparison direction differs from the first entry of the suite.
    MixedTools {
        /// The direction of the first entry.
        expected: String,
        /// The direction of this entry.
        found: String,
    },
    /// The history last update precedes its newest entry.
    StaleLastUpdate {
        /// The recorded last update.
        last_update: u64,
        /// The newest entry date.
        newest: u64,
    },
}

impl Violation {
    ///
    /// The severity of the violation.
    ///
    pub fn severity(&self) -> Severity {
        match self {
            Self::DateOutOfOrder { .. }
            | Self::UnknownTool { .. }
            | Self::NonFiniteValue { .. }
            | Self::EmptyName { .. }
            | Self::EmptyUnit { .. }
            | Self::MalformedCommitId { .. } => Severity::Error,
            Self::DuplicateCommit { .. }
            | Self::NoMeasurements
            | Self::EmptySuite
            | Self::MixedTools { .. }
            | Self::StaleLastUpdate { .. } => Severity::Warning,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateOutOfOrder { previous, date } => {
                write!(f, "date {date} precedes the previous entry date {previous}")
            }
            Self::UnknownTool { tool } => write!(f, "unknown tool `{tool}`"),
            Self::NonFiniteValue { name } => write!(f, "measurement `{name}` is not finite"),
            Self::EmptyName { index } => write!(f, "measurement #{index} has an empty name"),
            Self::EmptyUnit { name } => write!(f, "measurement `{name}` has an empty unit"),
            Self::MalformedCommitId { id } => write!(
                f,
                "commit id `{id}` is not a {}-character hexadecimal hash",
                Commit::ID_LENGTH
            ),
            Self::DuplicateCommit { id, first_index } => {
                write!(f, "commit {id} is already recorded at entry #{first_index}")
            }
            Self::NoMeasurements => write!(f, "entry has no measurements"),
            Self::EmptySuite => write!(f, "suite has no entries"),
            Self::MixedTools { expected, found } => {
                write!(f, "tool `{found}` differs from the suite tool `{expected}`")
            }
            Self::StaleLastUpdate {
                last_update,
                newest,
            } => write!(
                f,
                "last update {last_update} precedes the newest entry date {newest}"
            ),
        }
    }
}
