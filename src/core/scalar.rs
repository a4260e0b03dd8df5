// src/core/scalar.rs

//! Complex scalar helpers on top of `num_complex::Complex64`.
//!
//! Field arithmetic, conjugation, magnitude, `sqrt` and `exp` (principal
//! branches) come straight from `num_complex`. This module adds the partial
//! operations, which report `GateError::DivisionByZero` instead of
//! producing infinities or NaNs.

use super::error::GateError;
use num_complex::Complex64;
use num_traits::Zero;

/// Multiplicative inverse `1/z`.
///
/// # Returns
/// * `Err(GateError::DivisionByZero)` when `|z| == 0`.
pub fn checked_inv(z: Complex64) -> Result<Complex64, GateError> {
    if z.is_zero() {
        return Err(GateError::DivisionByZero);
    }
    Ok(z.inv())
}

/// `a / b`, failing when `b` has zero magnitude.
pub fn checked_div(a: Complex64, b: Complex64) -> Result<Complex64, GateError> {
    Ok(a * checked_inv(b)?)
}

/// Unit complex `e^(iθ)`.
pub fn phase(theta: f64) -> Complex64 {
    Complex64::new(0.0, theta).exp()
}

/// `|a - b| <= tolerance`
pub fn approx_eq(a: Complex64, b: Complex64, tolerance: f64) -> bool {
    (a - b).norm() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_1_SQRT_2, PI};

    #[test]
    fn test_inverse_of_zero_fails() {
        assert_eq!(checked_inv(Complex64::zero()), Err(GateError::DivisionByZero));
        assert_eq!(
            checked_div(Complex64::new(1.0, 1.0), Complex64::new(0.0, 0.0)),
            Err(GateError::DivisionByZero)
        );
    }

    #[test]
    fn test_inverse_round_trip() -> Result<(), GateError> {
        let z = Complex64::new(3.0, -4.0);
        let inv = checked_inv(z)?;
        assert!(approx_eq(z * inv, Complex64::new(1.0, 0.0), 1e-12));
        assert_abs_diff_eq!(inv.norm(), 0.2, epsilon = 1e-12);
        Ok(())
    }

    #[test]
    fn test_phase_matches_t_entry() {
        let p = phase(PI / 4.0);
        assert!(approx_eq(p, Complex64::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2), 1e-12));
        assert_abs_diff_eq!(p.norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_principal_sqrt() {
        let r = Complex64::new(-4.0, 0.0).sqrt();
        assert!(approx_eq(r, Complex64::new(0.0, 2.0), 1e-12));
    }
}
