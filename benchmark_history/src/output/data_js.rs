//!
//! The history script output format.
//!

use crate::input::GLOBAL_NAME;
use crate::model::BenchmarkData;

///
/// The history script read by the dashboard.
///
#[derive(Default)]
pub struct DataJs {
    /// The script text.
    pub content: String,
}

impl From<&BenchmarkData> for DataJs {
    fn from(data: &BenchmarkData) -> Self {
        let json = serde_json::to_string_pretty(data).expect("Always valid");
        Self {
            content: format!("{GLOBAL_NAME} = {json}"),
        }
    }
}
