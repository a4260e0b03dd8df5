// src/validation/mod.rs

//! Unitarity checks for 4×4 operators.

use crate::core::constants::gate_constants::UNITARY_TOLERANCE;
use crate::core::{GateError, Matrix};

/// Largest entrywise deviation of `m†m` and `mm†` from the identity.
pub fn unitarity_error(m: &Matrix) -> f64 {
    let id = Matrix::identity();
    let left = m.dagger().multiply(m).max_deviation(&id);
    let right = m.multiply(&m.dagger()).max_deviation(&id);
    if left.is_nan() || right.is_nan() {
        return f64::NAN;
    }
    left.max(right)
}

/// `true` if `m` is unitary within `tolerance`.
pub fn is_unitary(m: &Matrix, tolerance: f64) -> bool {
    unitarity_error(m) <= tolerance
}

/// Checks that `m` is unitary (`M†M = MM† = I`).
///
/// # Arguments
/// * `m` - The matrix to check.
/// * `tolerance` - Allowed entrywise deviation. Defaults to 1e-9.
///
/// # Returns
/// * `Ok(())` if unitary within tolerance.
/// * `Err(GateError::NonUnitary)` otherwise, carrying the measured deviation.
pub fn check_unitarity(m: &Matrix, tolerance: Option<f64>) -> Result<(), GateError> {
    let effective_tolerance = tolerance.unwrap_or(UNITARY_TOLERANCE);
    let deviation = unitarity_error(m);
    // NaN deviation must fail too
    if deviation <= effective_tolerance {
        Ok(())
    } else {
        Err(GateError::NonUnitary { deviation, tolerance: effective_tolerance })
    }
}
