//! Confidence intervals for differences in proportions
//!
//! - Independent samples (normal approximation)
//! - Paired samples, Wald
//! - Paired samples, adjusted Wald (add one per discordant cell)
//!
//! The plain functions apply the formulas without validation, so domain
//! violations surface as `inf`/`NaN`. The `_checked` variants validate first
//! and return richer results.

mod critical;
mod independent;
mod paired;

pub use critical::two_sided_critical_value;
pub use independent::{independent_difference_interval, independent_difference_interval_checked};
pub use paired::{
    paired_adjusted_wald_interval, paired_adjusted_wald_interval_checked, paired_interval_at_level,
    paired_wald_interval, paired_wald_interval_checked,
};

use crate::{StatsError, StatsResult};

/// Square root of a variance, clamping rounding noise below zero
fn clamped_sqrt(variance: f64) -> f64 {
    if variance < 0.0 {
        tracing::trace!(variance, "clamping negative variance to zero");
        0.0
    } else {
        variance.sqrt()
    }
}

fn validate_confidence_level(confidence_level: f64) -> StatsResult<()> {
    if !(confidence_level > 0.0 && confidence_level < 1.0) {
        tracing::debug!(confidence_level, "rejected confidence level");
        return Err(StatsError::InvalidConfidenceLevel(confidence_level));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_sqrt() {
        assert_eq!(clamped_sqrt(-1e-18), 0.0);
        assert_eq!(clamped_sqrt(0.25), 0.5);
    }

    #[test]
    fn test_validate_confidence_level() {
        assert!(validate_confidence_level(0.95).is_ok());
        assert!(validate_confidence_level(0.0).is_err());
        assert!(validate_confidence_level(1.0).is_err());
        assert!(validate_confidence_level(f64::NAN).is_err());
    }
}
