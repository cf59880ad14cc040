//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("precision tier table is empty")]
    EmptyTierTable,

    #[error("first precision tier starts at zoom {min}, expected 0")]
    TierNotAtZero { min: f64 },

    #[error("precision tier {index} has invalid range [{min}, {max})")]
    InvalidTierRange { index: usize, min: f64, max: f64 },

    #[error("gap before precision tier {index}: expected start {expected}, found {found}")]
    TierGap {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("precision tier {index} overlaps its predecessor: expected start {expected}, found {found}")]
    TierOverlap {
        index: usize,
        expected: f64,
        found: f64,
    },

    #[error("unbounded precision tier {index} must be the last tier")]
    UnboundedTierNotLast { index: usize },

    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
