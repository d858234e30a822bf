//!
//! Data-quality checks of the benchmark history.
//!

pub mod finding;
pub mod severity;
pub mod violation;


use std::collections::HashMap;

use colored::Colorize;

use crate::model::suite::Suite;
use crate::model::BenchmarkData;

use self::finding::Finding;
use self::severity::Severity;
use self::violation::Violation;

///
/// The validation report.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// The findings in history order.
    pub findings: Vec<Finding>,
}

impl Report {
    ///
    /// Runs every check over the history.
    ///
    pub fn new(data: &BenchmarkData) -> Self {
        let mut report = Self::default();

        if let Some(newest) = data.newest_date() {
            if data.last_update < newest {
                report.findings.push(Finding::new(
                    None,
                    None,
                    Violation::StaleLastUpdate {
                        last_update: data.last_update,
                        newest,
                    },
                ));
            }
        }
        for (name, suite) in data.entries.iter() {
            report.check_suite(name.as_str(), suite);
        }

        report
    }

    ///
    /// Runs the per-suite and per-entry checks.
    ///
    fn check_suite(&mut self, name: &str, suite: &Suite) {
        if suite.is_empty() {
            self.findings
                .push(Finding::new(Some(name), None, Violation::EmptySuite));
            return;
        }

        let mut first_indexes: HashMap<&str, usize> = HashMap::with_capacity(suite.len());
        let suite_tool = suite
            .entries
            .iter()
            .map(|entry| &entry.tool)
            .find(|tool| tool.is_known());

        for (index, entry) in suite.entries.iter().enumerate() {
            let mut push = |violation| {
                self.findings
                    .push(Finding::new(Some(name), Some(index), violation));
            };

            if index > 0 {
                let previous = suite.entries[index - 1].date;
                if entry.date < previous {
                    push(Violation::DateOutOfOrder {
                        previous,
                        date: entry.date,
                    });
                }
            }

            if !entry.tool.is_known() {
                push(Violation::UnknownTool {
                    tool: entry.tool.to_string(),
                });
            } else if let Some(suite_tool) = suite_tool.filter(|tool| *tool != &entry.tool) {
                push(Violation::MixedTools {
                    expected: suite_tool.to_string(),
                    found: entry.tool.to_string(),
                });
            }

            if !entry.commit.has_full_id() {
                push(Violation::MalformedCommitId {
                    id: entry.commit.id.clone(),
                });
            }
            match first_indexes.get(entry.commit.id.as_str()).copied() {
                Some(first_index) => push(Violation::DuplicateCommit {
                    id: entry.commit.id.clone(),
                    first_index,
                }),
                None => {
                    first_indexes.insert(entry.commit.id.as_str(), index);
                }
            }

            if entry.benches.is_empty() {
                push(Violation::NoMeasurements);
            }
            for (bench_index, bench) in entry.benches.iter().enumerate() {
                if bench.name.trim().is_empty() {
                    push(Violation::EmptyName { index: bench_index });
                }
                if bench.unit.trim().is_empty() {
                    push(Violation::EmptyUnit {
                        name: bench.name.clone(),
                    });
                }
                if !bench.value.is_finite() {
                    push(Violation::NonFiniteValue {
                        name: bench.name.clone(),
                    });
                }
            }
        }
    }

    ///
    /// Findings of the given severity.
    ///
    pub fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(move |finding| finding.severity() == severity)
    }

    ///
    /// The number of errors.
    ///
    pub fn error_count(&self) -> usize {
        self.with_severity(Severity::Error).count()
    }

    ///
    /// The number of warnings.
    ///
    pub fn warning_count(&self) -> usize {
        self.with_severity(Severity::Warning).count()
    }

    ///
    /// Whether the history passes. In strict mode, warnings fail it as well.
    ///
    pub fn is_valid(&self, strict: bool) -> bool {
        if strict {
            self.findings.is_empty()
        } else {
            self.error_count() == 0
        }
    }

    ///
    /// Writes the findings and a summary line.
    ///
    pub fn write_all<W>(&self, w: &mut W) -> anyhow::Result<()>
    where
        W: std::io::Write,
    {
        for finding in self.findings.iter() {
            writeln!(w, "{}: {finding}", finding.severity().colorized())?;
        }

        let summary = format!(
            "{} error(s), {} warning(s)",
            self.error_count(),
            self.warning_count()
        );
        if self.error_count() > 0 {
            writeln!(w, "{}", summary.bright_red())?;
        } else if self.warning_count() > 0 {
            writeln!(w, "{}", summary.bright_yellow())?;
        } else {
            writeln!(w, "{}", summary.green())?;
        }
        Ok(())
    }
}

///
/// Runs every check over the history.
///
pub fn validate(data: &BenchmarkData) -> Report {
    Report::new(data)
}
