//!
//! Provides tools for comparing entries of the benchmark history.
//!

pub mod selector;
pub mod series;

#[cfg(test)]
mod tests;

use crate::model::entry::tool::Tool;
use crate::model::entry::Entry;
use crate::model::BenchmarkData;
use crate::results::run_description::RunDescription;
use crate::results::Results;
use crate::util::btreemap::difference_keys;
use crate::util::btreemap::intersect_map;
use crate::util::statistics;

use self::selector::Selector;

/// The regression factor alerted by default, i.e. 200%.
pub const DEFAULT_ALERT_THRESHOLD: f64 = 2.0;

///
/// Returns the normalized factor of a measurement pair, where above `1.0` is a regression.
///
/// Returns `None` if the reference value is not a positive finite number, or the candidate
/// value is negative or not finite. A bigger-is-better candidate dropping to zero yields
/// an infinite factor, a smaller-is-better one yields zero.
///
pub fn factor(tool: &Tool, reference: f64, candidate: f64) -> Option<f64> {
    if !reference.is_finite() || reference <= 0.0 || !candidate.is_finite() || candidate < 0.0 {
        return None;
    }
    if tool.is_bigger_better() {
        if candidate == 0.0 {
            return Some(f64::INFINITY);
        }
        Some(reference / candidate)
    } else {
        Some(candidate / reference)
    }
}

///
/// Compares two entries of a suite measurement by measurement.
///
/// Measurements are paired by name. The comparison direction is taken from the candidate.
///
pub fn compare<'a>(
    suite: &'a str,
    reference: &'a Entry,
    candidate: &'a Entry,
    threshold: f64,
) -> Results<'a> {
    let mut results = Results::new(suite, reference, candidate, threshold);
    if !candidate.tool.is_known() {
        tracing::warn!(
            suite,
            tool = %candidate.tool,
            "unknown tool, comparing as smaller is better"
        );
    }

    let reference_benches = reference.measurements_by_name();
    let candidate_benches = candidate.measurements_by_name();
    let (removed, added) = difference_keys(&reference_benches, &candidate_benches);
    results.removed = removed;
    results.added = added;

    let tool = &candidate.tool;
    let pairs: Vec<_> = intersect_map(
        reference_benches,
        candidate_benches,
        |name, reference, candidate| (name, reference, candidate),
    )
    .collect();

    let mut factors = Vec::with_capacity(pairs.len());
    for (name, reference, candidate) in pairs.into_iter() {
        if reference.unit != candidate.unit {
            tracing::warn!(
                suite,
                name,
                reference = %reference.unit,
                candidate = %candidate.unit,
                "measurement unit changed"
            );
        }
        let Some(normalized) = factor(tool, reference.value, candidate.value) else {
            tracing::debug!(suite, name, "undefined factor, skipping");
            continue;
        };
        if normalized.is_finite() && normalized > 0.0 {
            factors.push(normalized);
        }
        results.push(
            normalized,
            RunDescription {
                name,
                unit: candidate.unit.as_str(),
                reference: reference.value,
                candidate: candidate.value,
            },
        );
    }
    results.total = statistics::geometric_mean(factors).unwrap_or(1.0);

    results
}

///
/// Compares the selected entries of every suite.
///
/// Suites lacking either entry, or where both select the same entry, are skipped.
///
pub fn compare_all<'a>(
    data: &'a BenchmarkData,
    reference: &Selector,
    candidate: &Selector,
    threshold: f64,
) -> Vec<Results<'a>> {
    let mut results = Vec::with_capacity(data.entries.len());
    for (name, suite) in data.entries.iter() {
        let (Some(reference_entry), Some(candidate_entry)) =
            (reference.select(suite), candidate.select(suite))
        else {
            tracing::info!(suite = %name, %reference, %candidate, "entries not found, skipping");
            continue;
        };
        if std::ptr::eq(reference_entry, candidate_entry) {
            tracing::info!(suite = %name, "reference and candidate are the same entry, skipping");
            continue;
        }
        results.push(compare(
            name.as_str(),
            reference_entry,
            candidate_entry,
            threshold,
        ));
    }
    results
}
