//!
//! A located validation finding.
//!

use crate::validation::severity::Severity;
use crate::validation::violation::Violation;

///
/// A violation together with the place it was found at.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    /// The suite name, unless the finding concerns the whole history.
    pub suite: Option<String>,
    /// The entry index within the suite, unless the finding concerns the whole suite.
    pub entry_index: Option<usize>,
    /// The violation.
    pub violation: Violation,
}

impl Finding {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(suite: Option<&str>, entry_index: Option<usize>, violation: Violation) -> Self {
        Self {
            suite: suite.map(str::to_owned),
            entry_index,
            violation,
        }
    }

    ///
    /// The severity of the underlying violation.
    ///
    pub fn severity(&self) -> Severity {
        self.violation.severity()
    }
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.suite.as_deref(), self.entry_index) {
            (Some(suite), Some(index)) => write!(f, "`{suite}` entry #{index}: {}", self.violation),
            (Some(suite), None) => write!(f, "`{suite}`: {}", self.violation),
            (None, _) => write!(f, "{}", self.violation),
        }
    }
}
