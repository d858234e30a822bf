//!
//! The history of one measurement within a suite.
//!

use crate::model::suite::Suite;
use crate::util::statistics;

///
/// One recorded value.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Point<'a> {
    /// Epoch milliseconds when the entry was recorded.
    pub date: u64,
    /// The commit hash.
    pub commit: &'a str,
    /// The measured value.
    pub value: f64,
}

///
/// The history of one measurement within a suite.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Series<'a> {
    /// The measurement name.
    pub name: &'a str,
    /// The unit of the most recent point.
    pub unit: &'a str,
    /// The points in chronological order.
    pub points: Vec<Point<'a>>,
}

impl<'a> Series<'a> {
    ///
    /// Collects the history of the named measurement, if it was ever recorded.
    ///
    pub fn collect(suite: &'a Suite, name: &str) -> Option<Self> {
        let mut labels: Option<(&'a str, &'a str)> = None;
        let mut points = Vec::new();
        for entry in suite.entries.iter() {
            let Some(bench) = entry.measurement(name) else {
                continue;
            };
            labels = Some((bench.name.as_str(), bench.unit.as_str()));
            points.push(Point {
                date: entry.date,
                commit: entry.commit.id.as_str(),
                value: bench.value,
            });
        }

        let (name, unit) = labels?;
        Some(Self { name, unit, points })
    }

    ///
    /// Collects the history of every measurement of the suite, ordered by name.
    ///
    pub fn all(suite: &'a Suite) -> Vec<Self> {
        suite
            .measurement_names()
            .into_iter()
            .filter_map(|name| Self::collect(suite, name))
            .collect()
    }

    ///
    /// The values in chronological order.
    ///
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|point| point.value)
    }

    ///
    /// The smallest value.
    ///
    pub fn min(&self) -> Option<f64> {
        self.values().reduce(f64::min)
    }

    ///
    /// The largest value.
    ///
    pub fn max(&self) -> Option<f64> {
        self.values().reduce(f64::max)
    }

    ///
    /// The arithmetic mean.
    ///
    pub fn mean(&self) -> Option<f64> {
        statistics::mean(self.values())
    }

    ///
    /// The median.
    ///
    pub fn median(&self) -> Option<f64> {
        statistics::median(self.values())
    }

    ///
    /// The most recent value.
    ///
    pub fn latest(&self) -> Option<f64> {
        self.points.last().map(|point| point.value)
    }
}

impl std::fmt::Display for Series<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.min(), self.median(), self.max(), self.latest()) {
            (Some(min), Some(median), Some(max), Some(latest)) => write!(
                f,
                "{} ({}): {} point(s), min {min:.3}, median {median:.3}, max {max:.3}, latest {latest:.3}",
                self.name,
                self.unit,
                self.points.len(),
            ),
            _ => write!(f, "{} ({}): no points", self.name, self.unit),
        }
    }
}
