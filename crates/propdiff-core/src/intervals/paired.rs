//! Intervals for the difference between two paired proportions
//!
//! Both methods work from the discordant cells `b` and `c` of the 2x2 table;
//! the concordant cells only enter through the total `n`.
//!
//! References:
//! - Agresti, *Categorical Data Analysis*, 3rd ed. (Wald)
//! - Bonett & Price (2012), adjusted Wald interval for paired binomial data

use super::clamped_sqrt;
use crate::types::{PairedInterval, PairedMethod, PairedOptions, PairedTable};
use crate::{StatsError, StatsResult};

/// `(diff, variance)` of the difference in paired proportions
fn wald_moments(b: f64, c: f64, n: f64) -> (f64, f64) {
    let p12 = b / n;
    let p21 = c / n;
    let diff = p12 - p21;
    (diff, ((p12 + p21) - diff * diff) / n)
}

/// Wald interval for paired proportions
///
/// # Arguments
/// * `a` - Positive under both conditions
/// * `b` - Positive under condition 1, negative under condition 2
/// * `c` - Negative under condition 1, positive under condition 2
/// * `d` - Negative under both conditions
/// * `n` - Total number of pairs
/// * `z` - Critical value ([`crate::DEFAULT_Z`] for 95%)
///
/// # Returns
/// `(diff, lower, upper)`. `n = 0` yields NaN.
pub fn paired_wald_interval(
    _a: usize,
    b: usize,
    c: usize,
    _d: usize,
    n: usize,
    z: f64,
) -> (f64, f64, f64) {
    let (diff, var) = wald_moments(b as f64, c as f64, n as f64);
    let half_width = z * var.sqrt();
    (diff, diff - half_width, diff + half_width)
}

/// Adjusted Wald interval for paired proportions
///
/// Adds one to each discordant cell and two to the total, so the interval
/// is defined for every `n`, including zero.
///
/// # Returns
/// `(diff, lower, upper)`
pub fn paired_adjusted_wald_interval(
    _a: usize,
    b: usize,
    c: usize,
    _d: usize,
    n: usize,
    z: f64,
) -> (f64, f64, f64) {
    let (diff, s_squared) = wald_moments(b as f64 + 1.0, c as f64 + 1.0, n as f64 + 2.0);
    let half_width = z * s_squared.sqrt();
    (diff, diff - half_width, diff + half_width)
}

/// Validated variant of [`paired_wald_interval`]
///
/// # Errors
/// Fails if `n` disagrees with the table total, `n` is zero, or `z` is not
/// a finite positive number.
pub fn paired_wald_interval_checked(
    table: &PairedTable,
    n: usize,
    options: &PairedOptions,
) -> StatsResult<PairedInterval> {
    validate_paired(table, n, options)?;
    if n == 0 {
        tracing::debug!("rejected empty table for Wald interval");
        return Err(StatsError::InsufficientData { field: "n" });
    }

    let (b, c) = table.discordant();
    let (diff, var) = wald_moments(b as f64, c as f64, n as f64);
    Ok(build_interval(diff, var, options.z, PairedMethod::Wald))
}

/// Validated variant of [`paired_adjusted_wald_interval`]
///
/// Same checks as [`paired_wald_interval_checked`], except that an empty
/// table is accepted.
pub fn paired_adjusted_wald_interval_checked(
    table: &PairedTable,
    n: usize,
    options: &PairedOptions,
) -> StatsResult<PairedInterval> {
    validate_paired(table, n, options)?;

    let (b, c) = table.discordant();
    let (diff, s_squared) = wald_moments(b as f64 + 1.0, c as f64 + 1.0, n as f64 + 2.0);
    Ok(build_interval(diff, s_squared, options.z, PairedMethod::AdjustedWald))
}

/// Paired interval at an arbitrary confidence level
pub fn paired_interval_at_level(
    table: &PairedTable,
    method: PairedMethod,
    confidence_level: f64,
) -> StatsResult<PairedInterval> {
    let options = PairedOptions::from_confidence_level(confidence_level)?;
    match method {
        PairedMethod::Wald => paired_wald_interval_checked(table, table.total(), &options),
        PairedMethod::AdjustedWald => {
            paired_adjusted_wald_interval_checked(table, table.total(), &options)
        }
    }
}

fn validate_paired(table: &PairedTable, n: usize, options: &PairedOptions) -> StatsResult<()> {
    let total = table.total();
    if total != n {
        tracing::debug!(total, n, "table total does not match N");
        return Err(StatsError::TotalMismatch {
            expected: total,
            actual: n,
        });
    }
    if !(options.z.is_finite() && options.z > 0.0) {
        tracing::debug!(z = options.z, "rejected critical value");
        return Err(StatsError::InvalidCriticalValue(options.z));
    }
    Ok(())
}

fn build_interval(diff: f64, variance: f64, z: f64, method: PairedMethod) -> PairedInterval {
    let std_error = clamped_sqrt(variance);
    PairedInterval {
        diff,
        lower: diff - z * std_error,
        upper: diff + z * std_error,
        std_error,
        method,
    }
}
