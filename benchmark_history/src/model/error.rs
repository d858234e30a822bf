//!
//! Benchmark history modification error.
//!

use crate::model::suite::error::Error as SuiteError;

///
/// Benchmark history modification error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error appending to a suite.
    #[error("Suite `{suite}`: {source}")]
    Suite {
        /// The suite name.
        suite: String,
        /// The underlying suite error.
        source: SuiteError,
    },
}
