//! Shared numeric helpers.
//!
//! One implementation of the quartile/bound math, used by both the outlier
//! detector and the outlier cleaner so the two cannot drift apart.

use std::cmp::Ordering;

/// Sort a copy of the values ascending. NaN never reaches this point; the
/// callers filter through `Value::as_number` first.
pub(crate) fn sorted(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    sorted
}

/// Lower/upper acceptance bounds around the interquartile range.
///
/// Q1 and Q3 use the nearest-rank quartile (`ceil(p * n)`-th value of the
/// ascending sort), no interpolation. A single value collapses both
/// quartiles onto itself. Returns `None` for an empty slice.
pub(crate) fn iqr_bounds(values: &[f64], multiplier: f64) -> Option<(f64, f64)> {
    if values.is_empty() {
        return None;
    }

    let sorted = sorted(values);
    let n = sorted.len();
    let q1 = sorted[quartile_index(n, 1)];
    let q3 = sorted[quartile_index(n, 3)];
    let iqr = q3 - q1;

    Some((q1 - multiplier * iqr, q3 + multiplier * iqr))
}

/// Zero-based nearest-rank index of the k-th quartile for n values.
fn quartile_index(n: usize, k: usize) -> usize {
    (k * n).div_ceil(4).saturating_sub(1)
}

/// Arithmetic mean. Callers guarantee a non-empty slice.
pub(crate) fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Callers guarantee a non-empty slice.
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Median of an ascending-sorted slice; the even case averages the middle
/// pair. Returns `None` for an empty slice.
pub(crate) fn median_of_sorted(sorted: &[f64]) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let mid = sorted.len() / 2;
    Some(if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    })
}
