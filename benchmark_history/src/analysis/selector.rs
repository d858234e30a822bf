//!
//! Entry selection within a suite.
//!

use std::str::FromStr;

use crate::model::entry::Entry;
use crate::model::suite::Suite;

///
/// Entry selection within a suite.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// The most recent entry.
    Latest,
    /// The entry right before the most recent one.
    Previous,
    /// The most recent entry for a commit hash prefix.
    Commit(String),
}

impl Selector {
    ///
    /// Selects an entry from the suite.
    ///
    pub fn select<'a>(&self, suite: &'a Suite) -> Option<&'a Entry> {
        match self {
            Self::Latest => suite.latest(),
            Self::Previous => suite.previous(),
            Self::Commit(prefix) => suite.find_commit(prefix.as_str()),
        }
    }
}

impl FromStr for Selector {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "previous" => Ok(Self::Previous),
            prefix if prefix.len() >= 4 && prefix.chars().all(|c| c.is_ascii_hexdigit()) => {
                Ok(Self::Commit(prefix.to_owned()))
            }
            string => anyhow::bail!(
                "Unknown entry selector `{string}`. Expected `latest`, `previous`, or a commit hash prefix of at least 4 characters"
            ),
        }
    }
}

impl std::fmt::Display for Selector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Previous => write!(f, "previous"),
            Self::Commit(prefix) => write!(f, "{prefix}"),
        }
    }
}
