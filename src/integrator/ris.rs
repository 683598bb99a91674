//! Resampled importance sampling over a pool of candidates.

use itertools::Itertools;

/// Running sums of `weights`. The last entry is the total weight.
pub fn cumulative_weights(weights: &[f64]) -> Vec<f64> {
    weights
        .iter()
        .scan(0.0, |acc, w| {
            *acc += w;
            Some(*acc)
        })
        .collect_vec()
}

/// Index of the first entry of `cumulative` exceeding `u` times the total weight.
/// `u` is uniform in [0, 1). None if the total weight is not positive.
pub fn resample_index(cumulative: &[f64], u: f64) -> Option<usize> {
    let total = *cumulative.last()?;
    if !(total > 0.0 && total.is_finite()) {
        return None;
    }
    let target = u * total;
    let idx = cumulative.partition_point(|c| *c <= target);
    Some(idx.min(cumulative.len() - 1))
}
