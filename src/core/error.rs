//! Error handling logic

use thiserror::Error;

/// Recoverable failures of the numerical engine.
///
/// Edit requests that fall outside the magnitude guard bounds are not
/// errors; the editor hands the input matrix back untouched instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GateError {
    /// Inverse (or division) of a complex value with zero magnitude.
    #[error("Division by zero: complex operand has zero magnitude")]
    DivisionByZero,

    /// Gram-Schmidt hit a vector with zero residual norm, meaning the
    /// input vectors were linearly dependent.
    #[error("Degenerate basis: vector {index} is linearly dependent on the previous ones")]
    DegenerateBasis {
        /// Position (0..4) of the offending vector.
        index: usize,
    },

    /// A matrix expected to be unitary deviates from `U†U = I`.
    #[error("Matrix is not unitary: deviation {deviation:.3e} exceeds tolerance {tolerance:.3e}")]
    NonUnitary {
        /// Largest entrywise deviation from the identity.
        deviation: f64,
        /// Tolerance that was exceeded.
        tolerance: f64,
    },

    /// A search length schedule that is empty, not strictly increasing,
    /// or contains non-finite entries.
    #[error("Invalid length schedule: {message}")]
    InvalidSchedule {
        /// What was wrong with the schedule.
        message: String,
    },
}

impl GateError {
    /// Create an invalid schedule error
    pub fn invalid_schedule(message: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            message: message.into(),
        }
    }
}
