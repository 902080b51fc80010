use statrs::distribution::{ContinuousCDF, Normal};

/// Two-sided critical value of the standard normal
///
/// Returns `Φ⁻¹(1 - (1 - confidence_level) / 2)`. Levels whose quantile
/// probability falls outside `[0, 1]` yield NaN instead of panicking.
pub fn two_sided_critical_value(confidence_level: f64) -> f64 {
    let p = 1.0 - (1.0 - confidence_level) / 2.0;
    if !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    Normal::new(0.0, 1.0).map_or(f64::NAN, |normal| normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_common_levels() {
        assert_relative_eq!(two_sided_critical_value(0.95), 1.959963984540054, epsilon = 1e-9);
        assert_relative_eq!(two_sided_critical_value(0.99), 2.5758293035489, epsilon = 1e-9);
        assert_relative_eq!(two_sided_critical_value(0.90), 1.6448536269514722, epsilon = 1e-9);
    }

    #[test]
    fn test_degenerate_levels() {
        assert_relative_eq!(two_sided_critical_value(0.0), 0.0, epsilon = 1e-12);
        assert_eq!(two_sided_critical_value(1.0), f64::INFINITY);
    }

    #[test]
    fn test_out_of_range_is_nan() {
        assert!(two_sided_critical_value(1.5).is_nan());
        assert!(two_sided_critical_value(-1.5).is_nan());
        assert!(two_sided_critical_value(f64::NAN).is_nan());
    }
}
