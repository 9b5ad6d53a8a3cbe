//! Error type for gradient construction and the per-edge entry points.

use thiserror::Error;

/// Root error type for every fallible operation in the crate.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GradientError {
    /// A hyperparameter is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        /// Parameter name as it appears in [`crate::config::GradientConfig`].
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Which constraint was violated.
        reason: &'static str,
    },

    /// Embedding dimensionality was zero.
    #[error("embedding dimension must be at least 1")]
    ZeroDimension,

    /// A point or output buffer is shorter than the configured dimension.
    #[error("{buffer} has length {got}, expected at least {expected}")]
    DimensionMismatch {
        /// Which argument was short (`"point_i"`, `"point_j"`, `"holder"`).
        buffer: &'static str,
        /// The configured dimension.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// Lookup table size outside the supported range.
    #[error("lookup table needs between 2 and {max} steps, got {steps}")]
    LookupSteps {
        /// Requested number of table entries.
        steps: usize,
        /// Fixed table capacity.
        max: usize,
    },
}

/// Shorthand result type.
pub type GradientResult<T> = Result<T, GradientError>;

/// Reject `value` unless it is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> GradientResult<f64> {
    if !value.is_finite() {
        return Err(GradientError::InvalidParameter {
            name,
            value,
            reason: "must be finite",
        });
    }
    if value <= 0.0 {
        return Err(GradientError::InvalidParameter {
            name,
            value,
            reason: "must be > 0",
        });
    }
    Ok(value)
}
