//!
//! Serializing the benchmark history to CSV.
//!

use std::fmt::Write;

use crate::model::BenchmarkData;
use crate::output::row::Row;

///
/// Serialize the history to CSV in the following format:
/// "suite", "date", "commit", "title", "tool", "name", "value", "unit", "extra"
///
#[derive(Default)]
pub struct Csv {
    /// The CSV string.
    pub content: String,
}

impl Csv {
    /// The header line.
    pub const HEADER: &'static str =
        r#""suite","date","commit","title","tool","name","value","unit","extra""#;

    ///
    /// Quotes a text field, doubling the inner quotes.
    ///
    fn quote(field: &str) -> String {
        format!("\"{}\"", field.replace('"', "\"\""))
    }
}

impl From<&BenchmarkData> for Csv {
    fn from(data: &BenchmarkData) -> Csv {
        let rows = Row::collect(data);
        let mut content = String::with_capacity((rows.len() + 1) * 256);
        content.push_str(Self::HEADER);
        content.push('\n');

        for Row {
            suite,
            date,
            commit,
            title,
            tool,
            name,
            value,
            unit,
            extra,
        } in rows.into_iter()
        {
            writeln!(
                &mut content,
                "{},{date},{},{},{},{},{value},{},{}",
                Self::quote(suite),
                Self::quote(commit),
                Self::quote(title),
                Self::quote(tool),
                Self::quote(name),
                Self::quote(unit),
                Self::quote(extra),
            )
            .expect("Always valid");
        }

        Self { content }
    }
}
