//!
//! XLSX output format for the benchmark history.
//!

pub mod worksheet;

use std::collections::HashSet;

use crate::model::BenchmarkData;

use self::worksheet::Worksheet;

///
/// XLSX output format for the benchmark history.
///
#[derive(Default)]
pub struct Xlsx {
    /// One worksheet per suite, in suite name order.
    pub worksheets: Vec<Worksheet>,
}

impl Xlsx {
    /// The maximum worksheet name length accepted by spreadsheet applications.
    pub const SHEET_NAME_MAX_LENGTH: usize = 31;

    /// Characters not allowed in worksheet names.
    const SHEET_NAME_FORBIDDEN: [char; 8] = ['[', ']', ':', '*', '?', '/', '\\', '\''];

    ///
    /// Returns a valid worksheet name for a suite, unique among `used`.
    ///
    pub fn sheet_name(suite: &str, used: &mut HashSet<String>) -> String {
        let sanitized: String = suite
            .chars()
            .map(|c| {
                if Self::SHEET_NAME_FORBIDDEN.contains(&c) {
                    '_'
                } else {
                    c
                }
            })
            .collect();
        let sanitized = sanitized.trim();
        let sanitized = if sanitized.is_empty() {
            "Suite"
        } else {
            sanitized
        };

        let mut candidate: String = sanitized.chars().take(Self::SHEET_NAME_MAX_LENGTH).collect();
        let mut counter = 1;
        while used.contains(candidate.to_lowercase().as_str()) {
            counter += 1;
            let suffix = format!("~{counter}");
            candidate = sanitized
                .chars()
                .take(Self::SHEET_NAME_MAX_LENGTH - suffix.len())
                .collect::<String>()
                + suffix.as_str();
        }
        used.insert(candidate.to_lowercase());
        candidate
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        for worksheet in self.worksheets.into_iter() {
            workbook.push_worksheet(worksheet.into_inner());
        }
        workbook
    }
}

impl TryFrom<&BenchmarkData> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(data: &BenchmarkData) -> Result<Self, Self::Error> {
        let mut xlsx = Self::default();
        let mut used_names = HashSet::with_capacity(data.entries.len());

        for (suite_name, suite) in data.entries.iter() {
            let sheet_name = Self::sheet_name(suite_name.as_str(), &mut used_names);
            let mut worksheet = Worksheet::new(sheet_name.as_str())?;

            for entry in suite.entries.iter() {
                let date = entry
                    .recorded_at()
                    .map(|date| date.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| entry.date.to_string());
                let row = worksheet.add_entry_row(
                    date.as_str(),
                    entry.commit.short_id(),
                    entry.commit.title(),
                )?;
                for bench in entry.benches.iter() {
                    let column =
                        worksheet.measurement_column(bench.name.as_str(), bench.unit.as_str())?;
                    worksheet.write_value(row, column, bench.value)?;
                }
            }
            worksheet.set_medians()?;

            xlsx.worksheets.push(worksheet);
        }

        Ok(xlsx)
    }
}
