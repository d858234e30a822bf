//!
//! The benchmark history library.
//!

pub mod analysis;
pub mod input;
pub mod logging;
pub mod model;
pub mod output;
pub mod results;
pub mod util;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixture;

pub use crate::analysis::selector::Selector as EntrySelector;
pub use crate::analysis::series::Point as SeriesPoint;
pub use crate::analysis::series::Series;
pub use crate::analysis::DEFAULT_ALERT_THRESHOLD;
pub use crate::input::error::Error as InputError;
pub use crate::model::entry::commit::identity::Identity;
pub use crate::model::entry::commit::Commit;
pub use crate::model::entry::measurement::extra::Extra;
pub use crate::model::entry::measurement::Measurement;
pub use crate::model::entry::tool::Tool;
pub use crate::model::entry::Entry;
pub use crate::model::error::Error as ModelError;
pub use crate::model::suite::error::Error as SuiteError;
pub use crate::model::suite::Suite;
pub use crate::model::BenchmarkData;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
pub use crate::results::run_description::RunDescription;
pub use crate::results::Results;
pub use crate::validation::finding::Finding as ValidationFinding;
pub use crate::validation::severity::Severity;
pub use crate::validation::violation::Violation;
pub use crate::validation::Report as ValidationReport;
