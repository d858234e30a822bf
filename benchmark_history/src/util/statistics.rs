//!
//! Descriptive statistics over measurement values.
//!

///
/// Returns the median of the values, or `None` if there are none.
///
/// For an even number of values the two middle values are averaged.
///
/// ```rust
/// use benchmark_history::util::statistics::median;
///
/// assert_eq!(median([3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median([4.0, 1.0, 2.0, 3.0]), Some(2.5));
/// assert_eq!(median(std::iter::empty::<f64>()), None);
/// ```
///
pub fn median(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut values: Vec<f64> = values.into_iter().collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let middle = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[middle - 1] + values[middle]) / 2.0)
    } else {
        Some(values[middle])
    }
}

///
/// Returns the arithmetic mean of the values, or `None` if there are none.
///
pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / (count as f64))
    }
}

///
/// Returns the geometric mean of strictly positive values, or `None` if there are none.
///
/// ```rust
/// use benchmark_history::util::statistics::geometric_mean;
///
/// let mean = geometric_mean([2.0, 0.5]).unwrap();
/// assert!((mean - 1.0).abs() < 1e-12);
/// ```
///
pub fn geometric_mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    mean(values.into_iter().filter(|value| *value > 0.0).map(f64::ln)).map(f64::exp)
}
