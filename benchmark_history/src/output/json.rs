//!
//! Flat JSON output format.
//!

use crate::model::BenchmarkData;
use crate::output::row::Row;

///
/// Flat JSON list of measurement rows.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&BenchmarkData> for Json {
    fn from(data: &BenchmarkData) -> Self {
        let content = serde_json::to_string_pretty(&Row::collect(data)).expect("Always valid");
        Self { content }
    }
}
