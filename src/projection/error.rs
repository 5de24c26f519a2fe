//! Errors raised by the projection engine

use thiserror::Error;

/// Failure of a projection run. No partial sequence is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Horizon was negative
    #[error("invalid projection horizon {0}: must be a non-negative number of years")]
    InvalidHorizon(i64),

    /// Inflation rate makes the deflation base `1 + rate/100` non-positive, or is not finite
    #[error("invalid inflation rate {0}%: deflation base 1 + rate/100 must be positive")]
    InvalidRate(f64),

    /// An account produced a zero denominator or a non-finite value
    #[error("degenerate account {id}: {reason}")]
    DegenerateAccount { id: String, reason: String },
}
