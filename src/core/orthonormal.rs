// src/core/orthonormal.rs

//! Classical Gram-Schmidt over four complex vectors.
//!
//! Vectors are processed strictly in order. Each `u_k` is `v_k` minus its
//! projections onto the previously computed *unnormalized* `u_0..u_{k-1}`,
//! and `e_k = u_k / ‖u_k‖`. Because `u_0 = v_0`, the first output vector is
//! a pure rescaling of the first input; the unitary editor depends on that.

use super::constants::gate_constants::{DEGENERACY_EPSILON, DIM};
use super::error::GateError;
use super::matrix::{inner, norm, scale, sub, Matrix, Vector};
use super::scalar::checked_div;
use num_complex::Complex64;
use num_traits::Zero;

/// Projection of `v` onto `u`: `u · (⟨u,v⟩ / ⟨u,u⟩)`.
fn project(u: &Vector, v: &Vector) -> Result<Vector, GateError> {
    Ok(scale(checked_div(inner(u, v), inner(u, u))?, u))
}

/// Orthonormalizes `vs` in order 0 → 3.
///
/// # Returns
/// * `Ok([e0, e1, e2, e3])`, mutually orthonormal.
/// * `Err(GateError::DegenerateBasis)` if the inputs are linearly dependent
///   (some residual `u_k` has zero norm).
pub fn gram_schmidt(vs: &[Vector; DIM]) -> Result<[Vector; DIM], GateError> {
    let mut us: [Vector; DIM] = [[Complex64::zero(); DIM]; DIM];
    let mut es: [Vector; DIM] = [[Complex64::zero(); DIM]; DIM];

    for k in 0..DIM {
        let mut u = vs[k];
        for prev in us.iter().take(k) {
            let p = project(prev, &vs[k]).map_err(|_| GateError::DegenerateBasis { index: k })?;
            u = sub(&u, &p);
        }
        let length = norm(&u);
        if length.is_nan() || length <= DEGENERACY_EPSILON {
            return Err(GateError::DegenerateBasis { index: k });
        }
        es[k] = scale(Complex64::new(1.0 / length, 0.0), &u);
        us[k] = u;
    }

    Ok(es)
}

/// Orthonormalizes the rows of `m`, leaving the direction of row 0 unchanged.
pub fn orthonormalize_rows(m: &Matrix) -> Result<Matrix, GateError> {
    Ok(Matrix::from_rows(gram_schmidt(&m.rows())?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::One;

    const TEST_TOLERANCE: f64 = 1e-12;

    fn generic_input() -> [Vector; DIM] {
        [
            [Complex64::new(1.0, 0.5), Complex64::new(0.2, -0.1), Complex64::new(-0.3, 0.0), Complex64::new(0.0, 0.7)],
            [Complex64::new(0.4, 0.0), Complex64::new(1.1, 0.3), Complex64::new(0.0, -0.2), Complex64::new(0.5, 0.5)],
            [Complex64::new(-0.6, 0.2), Complex64::new(0.0, 0.0), Complex64::new(0.9, 0.9), Complex64::new(0.1, -0.4)],
            [Complex64::new(0.3, -0.3), Complex64::new(0.8, 0.0), Complex64::new(0.2, 0.6), Complex64::new(-1.0, 0.1)],
        ]
    }

    #[test]
    fn test_output_is_orthonormal() -> Result<(), GateError> {
        let es = gram_schmidt(&generic_input())?;
        for a in 0..DIM {
            for b in 0..DIM {
                let expected = if a == b { Complex64::one() } else { Complex64::zero() };
                let got = inner(&es[a], &es[b]);
                assert!((got - expected).norm() < TEST_TOLERANCE, "<e{},e{}> = {}", a, b, got);
            }
        }
        Ok(())
    }

    #[test]
    fn test_first_vector_keeps_direction() -> Result<(), GateError> {
        let vs = generic_input();
        let es = gram_schmidt(&vs)?;
        let factor = norm(&vs[0]);
        for i in 0..DIM {
            assert!((es[0][i] * factor - vs[0][i]).norm() < TEST_TOLERANCE);
        }
        Ok(())
    }

    #[test]
    fn test_orthonormal_input_is_fixed_point() -> Result<(), GateError> {
        let id = Matrix::identity();
        let out = orthonormalize_rows(&id)?;
        assert!(out.approx_eq(&id, TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn test_dependent_input_is_rejected() {
        let mut vs = generic_input();
        vs[2] = scale(Complex64::new(0.0, 2.0), &vs[1]);
        assert_eq!(gram_schmidt(&vs), Err(GateError::DegenerateBasis { index: 2 }));
    }

    #[test]
    fn test_zero_first_vector_is_rejected() {
        let mut vs = generic_input();
        vs[0] = [Complex64::zero(); DIM];
        assert_eq!(gram_schmidt(&vs), Err(GateError::DegenerateBasis { index: 0 }));
    }
}
