use thiserror::Error;

/// Errors raised by the checked interval functions
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Invalid proportion {field}: {value} (must be in [0, 1])")]
    InvalidProportion { field: &'static str, value: f64 },

    #[error("Invalid sample size: {field} must be > 0")]
    InvalidSampleSize { field: &'static str },

    #[error("Invalid confidence level: {0} (must be in (0, 1))")]
    InvalidConfidenceLevel(f64),

    #[error("Invalid critical value: {0} (must be finite and > 0)")]
    InvalidCriticalValue(f64),

    #[error("Total mismatch: table sums to {expected} pairs but N = {actual}")]
    TotalMismatch { expected: usize, actual: usize },

    #[error("Insufficient data: {field} must be > 0")]
    InsufficientData { field: &'static str },
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
