//! Sample preparation
//!
//! Chart hosts hand over raw arrays that may contain NaN or infinite
//! entries in arbitrary order. Every statistic in this crate is defined
//! over the cleaned, ascending form produced here.

/// Filter a raw sample down to its finite values, sorted ascending
///
/// The input slice is never mutated; sorting happens on the returned copy.
/// The sort is stable, so equal values keep their relative order.
pub fn valid_sorted(values: &[f64]) -> Vec<f64> {
    let mut cleaned: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    cleaned.sort_by(|a, b| a.partial_cmp(b).unwrap());
    cleaned
}
