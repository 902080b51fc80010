//! Interval for the difference between two independent binomial proportions

use super::{clamped_sqrt, two_sided_critical_value, validate_confidence_level};
use crate::types::{DifferenceInterval, IndependentOptions, TwoSampleProportions};
use crate::{StatsError, StatsResult};

/// Confidence interval for `p1 - p2` from two independent samples
///
/// # Arguments
/// * `p1` - Positive proportion in group 1
/// * `p2` - Positive proportion in group 2
/// * `n1` - Sample count in group 1
/// * `n2` - Sample count in group 2
/// * `confidence_level` - Two-sided confidence level
///
/// # Returns
/// `(upper, lower)`, in that order. Inputs are not validated: zero sample
/// sizes or an out-of-range level propagate as `inf`/`NaN`.
pub fn independent_difference_interval(
    p1: f64,
    p2: f64,
    n1: usize,
    n2: usize,
    confidence_level: f64,
) -> (f64, f64) {
    let se = (p1 * (1.0 - p1) / n1 as f64 + p2 * (1.0 - p2) / n2 as f64).sqrt();
    let z = two_sided_critical_value(confidence_level);
    let margin_of_error = z * se;

    let diff = p1 - p2;
    (diff + margin_of_error, diff - margin_of_error)
}

/// Validated variant of [`independent_difference_interval`]
pub fn independent_difference_interval_checked(
    input: &TwoSampleProportions,
    options: &IndependentOptions,
) -> StatsResult<DifferenceInterval> {
    for (field, value) in [("p1", input.p1), ("p2", input.p2)] {
        if !(0.0..=1.0).contains(&value) {
            tracing::debug!(field, value, "rejected proportion");
            return Err(StatsError::InvalidProportion { field, value });
        }
    }
    for (field, n) in [("n1", input.n1), ("n2", input.n2)] {
        if n == 0 {
            tracing::debug!(field, "rejected empty sample");
            return Err(StatsError::InvalidSampleSize { field });
        }
    }
    validate_confidence_level(options.confidence_level)?;

    let (p1, p2) = (input.p1, input.p2);
    let variance = p1 * (1.0 - p1) / input.n1 as f64 + p2 * (1.0 - p2) / input.n2 as f64;
    let std_error = clamped_sqrt(variance);
    let critical_value = two_sided_critical_value(options.confidence_level);
    let margin_of_error = critical_value * std_error;
    let estimate = input.difference();

    Ok(DifferenceInterval {
        estimate,
        lower: estimate - margin_of_error,
        upper: estimate + margin_of_error,
        std_error,
        margin_of_error,
        critical_value,
        confidence_level: options.confidence_level,
    })
}
