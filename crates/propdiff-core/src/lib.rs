//! propdiff-core: Confidence intervals for differences in proportions
//!
//! This crate provides closed-form intervals for comparing two binary
//! outcome rates, from independent samples or from paired observations
//! cross-tabulated in a 2x2 table.

pub mod errors;
pub mod intervals;
pub mod types;

pub use errors::{StatsError, StatsResult};
pub use intervals::*;
pub use types::*;
