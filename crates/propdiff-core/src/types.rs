use crate::errors::{StatsError, StatsResult};
use crate::intervals::two_sided_critical_value;

/// Two-sided 95% critical value used by the paired intervals
pub const DEFAULT_Z: f64 = 1.96;

/// Proportions and sample sizes of two independent groups
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoSampleProportions {
    /// Positive proportion in group 1
    pub p1: f64,
    /// Positive proportion in group 2
    pub p2: f64,
    /// Sample count in group 1
    pub n1: usize,
    /// Sample count in group 2
    pub n2: usize,
}

impl Default for TwoSampleProportions {
    fn default() -> Self {
        Self {
            p1: 0.117,
            p2: 0.117,
            n1: 1350,
            n2: 1350,
        }
    }
}

impl TwoSampleProportions {
    pub fn new(p1: f64, p2: f64, n1: usize, n2: usize) -> Self {
        Self { p1, p2, n1, n2 }
    }

    /// Build from raw success counts
    ///
    /// Zero trials give a NaN proportion, which the checked layer rejects.
    pub fn from_counts(successes1: usize, n1: usize, successes2: usize, n2: usize) -> Self {
        Self {
            p1: successes1 as f64 / n1 as f64,
            p2: successes2 as f64 / n2 as f64,
            n1,
            n2,
        }
    }

    /// Observed difference `p1 - p2`
    pub fn difference(&self) -> f64 {
        self.p1 - self.p2
    }
}

/// 2x2 table of paired binary outcomes
///
/// Rows are condition 1 (positive, negative), columns are condition 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairedTable {
    /// Positive under both conditions
    pub a: usize,
    /// Positive under condition 1 only
    pub b: usize,
    /// Positive under condition 2 only
    pub c: usize,
    /// Negative under both conditions
    pub d: usize,
}

impl PairedTable {
    pub fn new(a: usize, b: usize, c: usize, d: usize) -> Self {
        Self { a, b, c, d }
    }

    /// Total number of pairs
    pub fn total(&self) -> usize {
        self.a + self.b + self.c + self.d
    }

    /// Discordant cell counts `(b, c)`
    pub fn discordant(&self) -> (usize, usize) {
        (self.b, self.c)
    }
}

impl From<[[usize; 2]; 2]> for PairedTable {
    fn from(table: [[usize; 2]; 2]) -> Self {
        Self {
            a: table[0][0],
            b: table[0][1],
            c: table[1][0],
            d: table[1][1],
        }
    }
}

/// Options for the independent-sample interval
#[derive(Debug, Clone)]
pub struct IndependentOptions {
    /// Confidence level (default: 0.95)
    pub confidence_level: f64,
}

impl Default for IndependentOptions {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
        }
    }
}

/// Options for the paired intervals
#[derive(Debug, Clone)]
pub struct PairedOptions {
    /// Critical value of the standard normal (default: 1.96)
    pub z: f64,
}

impl Default for PairedOptions {
    fn default() -> Self {
        Self { z: DEFAULT_Z }
    }
}

impl PairedOptions {
    /// Derive the critical value from a two-sided confidence level
    pub fn from_confidence_level(confidence_level: f64) -> StatsResult<Self> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(StatsError::InvalidConfidenceLevel(confidence_level));
        }
        Ok(Self {
            z: two_sided_critical_value(confidence_level),
        })
    }
}

/// Interval for the difference between two independent proportions
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceInterval {
    /// Point estimate `p1 - p2`
    pub estimate: f64,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Standard error of the difference
    pub std_error: f64,
    /// Half-width of the interval
    pub margin_of_error: f64,
    /// Normal critical value used
    pub critical_value: f64,
    /// Confidence level used
    pub confidence_level: f64,
}

impl DifferenceInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

/// Paired interval method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedMethod {
    Wald,
    AdjustedWald,
}

impl PairedMethod {
    pub fn name(&self) -> &'static str {
        match self {
            PairedMethod::Wald => "Wald interval for paired proportions",
            PairedMethod::AdjustedWald => "Adjusted Wald interval for paired proportions",
        }
    }
}

/// Interval for the difference between two paired proportions
#[derive(Debug, Clone, PartialEq)]
pub struct PairedInterval {
    /// Difference in marginal proportions
    pub diff: f64,
    /// Lower bound
    pub lower: f64,
    /// Upper bound
    pub upper: f64,
    /// Standard error of the difference
    pub std_error: f64,
    /// Method that produced the interval
    pub method: PairedMethod,
}

impl PairedInterval {
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value <= self.upper
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_sample_defaults() {
        let input = TwoSampleProportions::default();
        assert_eq!(input.p1, 0.117);
        assert_eq!(input.n2, 1350);
        assert_eq!(input.difference(), 0.0);
        assert_eq!(IndependentOptions::default().confidence_level, 0.95);
    }

    #[test]
    fn test_from_counts() {
        let input = TwoSampleProportions::from_counts(30, 100, 45, 150);
        assert_relative_eq!(input.p1, 0.3);
        assert_relative_eq!(input.p2, 0.3);
        assert!(TwoSampleProportions::from_counts(0, 0, 1, 2).p1.is_nan());
    }

    #[test]
    fn test_paired_table_from_array() {
        let table = PairedTable::from([[10, 5], [15, 70]]);
        assert_eq!(table, PairedTable::new(10, 5, 15, 70));
        assert_eq!(table.total(), 100);
        assert_eq!(table.discordant(), (5, 15));
    }

    #[test]
    fn test_paired_method_name() {
        assert!(PairedMethod::Wald.name().starts_with("Wald"));
        assert!(PairedMethod::AdjustedWald.name().starts_with("Adjusted Wald"));
    }

    #[test]
    fn test_paired_options_from_confidence_level() {
        assert_eq!(PairedOptions::default().z, DEFAULT_Z);

        let opts = PairedOptions::from_confidence_level(0.99).unwrap();
        assert_relative_eq!(opts.z, 2.5758293035489, epsilon = 1e-9);

        assert!(matches!(
            PairedOptions::from_confidence_level(1.0),
            Err(StatsError::InvalidConfidenceLevel(_))
        ));
        assert!(PairedOptions::from_confidence_level(f64::NAN).is_err());
    }
}
