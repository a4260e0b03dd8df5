// src/editing/mod.rs

//! Single-entry edits on a unitary matrix that keep it unitary.
//!
//! A phase edit multiplies a whole row and a whole column by `e^(iφ/2)`,
//! which is the same as conjugating by diagonal phase matrices and so is
//! exactly unitary. A magnitude edit moves the target entry to `(0, 0)`,
//! rescales it, redistributes the row's remaining norm over the other
//! three entries and repairs the matrix with Gram-Schmidt, which keeps the
//! edited row's direction.

use crate::core::constants::gate_constants::{
    DEGENERACY_EPSILON, DIM, MAX_EDITABLE_MAGNITUDE, MIN_EDITABLE_MAGNITUDE, MIN_REMAINING_NORM,
};
use crate::core::scalar::phase;
use crate::core::{orthonormalize_rows, GateError, Matrix};
use tracing::debug;

/// An edit coming from an interactive front end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditRequest {
    /// Rotate the phase of entry `(row, col)` by `phi` radians.
    Phase {
        /// Row index, 0..4.
        row: usize,
        /// Column index, 0..4.
        col: usize,
        /// Phase change in radians.
        phi: f64,
    },
    /// Scale the magnitude of entry `(row, col)` by `e^delta`.
    Magnitude {
        /// Row index, 0..4.
        row: usize,
        /// Column index, 0..4.
        col: usize,
        /// Log of the scale factor.
        delta: f64,
    },
}

impl EditRequest {
    /// Applies the edit to `m`. Out-of-range magnitude edits return `m`.
    pub fn apply(&self, m: &Matrix) -> Matrix {
        match *self {
            EditRequest::Phase { row, col, phi } => edit_phase_at(m, row, col, phi),
            EditRequest::Magnitude { row, col, delta } => edit_magnitude_at(m, row, col, delta),
        }
    }
}

fn assert_in_range(row: usize, col: usize) {
    assert!(row < DIM && col < DIM, "entry ({}, {}) is outside a {}x{} matrix", row, col, DIM, DIM);
}

/// Changes the phase of `m[row][col]` by `phi`, leaving its magnitude alone.
///
/// Every entry of row `row` and of column `col` is multiplied by
/// `e^(iφ/2)`; the edited entry gets both factors.
///
/// # Panics
/// If `row` or `col` is not below 4.
pub fn edit_phase_at(m: &Matrix, row: usize, col: usize, phi: f64) -> Matrix {
    assert_in_range(row, col);
    let half_phase = phase(phi / 2.0);
    let mut ans = *m;
    for i in 0..DIM {
        for j in 0..DIM {
            if i == row {
                ans[(i, j)] *= half_phase;
            }
            if j == col {
                ans[(i, j)] *= half_phase;
            }
        }
    }
    ans
}

/// Scales `|m[0][0]|` by `e^delta` and repairs unitarity.
///
/// Returns `m` unchanged when the entry is already too large to grow, too
/// small to shrink, or the other three row entries would be left with less
/// than `MIN_REMAINING_NORM` between them.
fn edit_magnitude_at_origin(m: &Matrix, delta: f64) -> Result<Matrix, GateError> {
    let current = m[(0, 0)].norm();
    if current > MAX_EDITABLE_MAGNITUDE && delta > 0.0 {
        debug!(magnitude = current, delta, "refusing to grow entry");
        return Ok(*m);
    }
    if current < MIN_EDITABLE_MAGNITUDE && delta < 0.0 {
        debug!(magnitude = current, delta, "refusing to shrink entry");
        return Ok(*m);
    }

    let remaining_old = 1.0 - current * current;
    if remaining_old <= DEGENERACY_EPSILON {
        // The rest of the row is zero; there is nothing to rescale.
        debug!(magnitude = current, delta, "row has no remaining norm to redistribute");
        return Ok(*m);
    }

    let mut tweaked = *m;
    tweaked[(0, 0)] = m[(0, 0)] * delta.exp();
    let grown = tweaked[(0, 0)].norm();
    let remaining_new = 1.0 - grown * grown;
    if remaining_new < MIN_REMAINING_NORM {
        debug!(magnitude = grown, remaining = remaining_new, "edit would starve the rest of the row");
        return Ok(*m);
    }

    let scaling = (remaining_new / remaining_old).sqrt();
    for j in 1..DIM {
        tweaked[(0, j)] = m[(0, j)] * scaling;
    }

    // Row 0 now has unit norm; Gram-Schmidt keeps it and fixes the rest.
    orthonormalize_rows(&tweaked)
}

/// Like [`edit_magnitude_at`], but reports a failed Gram-Schmidt repair
/// instead of swallowing it.
///
/// # Returns
/// * `Ok(matrix)`, equal to `m` when the edit is out of range.
/// * `Err(GateError::DegenerateBasis)` if the repair step degenerates.
///
/// # Panics
/// If `row` or `col` is not below 4.
pub fn try_edit_magnitude_at(m: &Matrix, row: usize, col: usize, delta: f64) -> Result<Matrix, GateError> {
    assert_in_range(row, col);
    let mut ans = *m;

    // Bring (row, col) to (0, 0): swap rows, then swap columns through a dagger.
    ans.swap_rows(0, row);
    ans = ans.dagger();
    ans.swap_rows(0, col);
    ans = ans.dagger();

    // Half the edit acting on the row, half on the column.
    ans = edit_magnitude_at_origin(&ans, delta / 2.0)?;
    ans = ans.dagger();
    ans = edit_magnitude_at_origin(&ans, delta / 2.0)?;

    // Still daggered: swap the column back before undoing the dagger.
    ans.swap_rows(0, col);
    ans = ans.dagger();
    ans.swap_rows(0, row);

    Ok(ans)
}

/// Tries to change `|m[row][col]|` by a factor of `e^delta` while keeping
/// the matrix unitary.
///
/// The edit is split into two halves, one treating the entry as part of its
/// row and one as part of its column. Each half is refused on its own when
/// `|m[row][col]|` is already above 0.95 and growing, or below 0.05 and
/// shrinking, so an edit near the bounds may apply only partially. A
/// refused or degenerate edit returns `m` unchanged.
///
/// # Panics
/// If `row` or `col` is not below 4.
pub fn edit_magnitude_at(m: &Matrix, row: usize, col: usize, delta: f64) -> Matrix {
    match try_edit_magnitude_at(m, row, col, delta) {
        Ok(edited) => edited,
        Err(e) => {
            debug!(row, col, delta, error = %e, "magnitude edit abandoned");
            *m
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuits::CircuitBuilder;
    use crate::operations::Qubit;
    use crate::sampling::random_unitary;
    use crate::validation::{is_unitary, unitarity_error};
    use approx::assert_abs_diff_eq;
    use num_complex::Complex64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::f64::consts::PI;

    const TEST_TOLERANCE: f64 = 1e-9;

    /// `H ⊗ H`: every entry is ±1/2.
    fn hh() -> Matrix {
        CircuitBuilder::new().h(Qubit::One).h(Qubit::Two).build().unitary()
    }

    fn wrapped(angle: f64) -> f64 {
        let a = angle.rem_euclid(2.0 * PI);
        if a > PI { a - 2.0 * PI } else { a }
    }

    #[test]
    fn test_phase_edit_rotates_entry() {
        let mut rng = StdRng::seed_from_u64(31);
        let m = random_unitary(&mut rng);
        for (i, j, phi) in [(0, 0, 0.4), (1, 3, -2.0), (3, 2, 3.0), (2, 2, 7.5)] {
            let edited = edit_phase_at(&m, i, j, phi);
            let change = wrapped(edited[(i, j)].arg() - m[(i, j)].arg() - phi);
            assert_abs_diff_eq!(change, 0.0, epsilon = 1e-9);
            assert_abs_diff_eq!(edited[(i, j)].norm(), m[(i, j)].norm(), epsilon = 1e-12);
            assert!(is_unitary(&edited, TEST_TOLERANCE), "deviation {}", unitarity_error(&edited));
        }
    }

    #[test]
    fn test_phase_edit_touches_only_row_and_column() {
        let m = hh();
        let edited = edit_phase_at(&m, 1, 2, 1.0);
        assert_eq!(edited[(0, 0)], m[(0, 0)]);
        assert_eq!(edited[(3, 3)], m[(3, 3)]);
        assert!((edited[(1, 0)] - m[(1, 0)] * phase(0.5)).norm() < 1e-15);
        assert!((edited[(3, 2)] - m[(3, 2)] * phase(0.5)).norm() < 1e-15);
    }

    #[test]
    fn test_magnitude_edit_at_origin_scales_by_exp_delta() {
        let m = hh();
        let delta = 0.2;
        let edited = edit_magnitude_at(&m, 0, 0, delta);
        assert_abs_diff_eq!(edited[(0, 0)].norm(), 0.5 * delta.exp(), epsilon = 1e-9);
        // Real positive entry stays real positive
        assert_abs_diff_eq!(edited[(0, 0)].arg(), 0.0, epsilon = 1e-9);
        assert!(is_unitary(&edited, TEST_TOLERANCE));
    }

    #[test]
    fn test_magnitude_edit_off_origin() -> Result<(), GateError> {
        let m = hh();
        let edited = try_edit_magnitude_at(&m, 2, 1, -0.3)?;
        assert_abs_diff_eq!(edited[(2, 1)].norm(), 0.5 * (-0.3_f64).exp(), epsilon = 1e-9);
        // Phase of the edited entry is preserved
        let change = wrapped(edited[(2, 1)].arg() - m[(2, 1)].arg());
        assert_abs_diff_eq!(change, 0.0, epsilon = 1e-9);
        assert!(is_unitary(&edited, TEST_TOLERANCE));
        Ok(())
    }

    #[test]
    fn test_magnitude_edit_on_random_unitary() {
        let mut rng = StdRng::seed_from_u64(4);
        let mut checked = 0;
        for _ in 0..50 {
            let m = random_unitary(&mut rng);
            for i in 0..DIM {
                for j in 0..DIM {
                    let a = m[(i, j)].norm();
                    // Both halves stay inside the guard bounds
                    if a > 0.1 && a * 0.1_f64.exp() < 0.9 {
                        let edited = edit_magnitude_at(&m, i, j, 0.1);
                        assert_abs_diff_eq!(edited[(i, j)].norm(), a * 0.1_f64.exp(), epsilon = 1e-9);
                        assert!(is_unitary(&edited, TEST_TOLERANCE));
                        checked += 1;
                    }
                }
            }
        }
        assert!(checked > 100);
    }

    #[test]
    fn test_refuses_to_grow_large_entry() {
        // Mostly-identity unitary: |m00| = cos(0.1) > 0.95
        let c = 0.1_f64.cos();
        let s = 0.1_f64.sin();
        let m = Matrix::from_real([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_eq!(edit_magnitude_at(&m, 0, 0, 0.5), m);
        assert_eq!(edit_magnitude_at(&m, 3, 3, 0.01), m);
    }

    #[test]
    fn test_refuses_to_shrink_tiny_entry() {
        let m = Matrix::identity();
        // |m01| = 0 < 0.05
        assert_eq!(edit_magnitude_at(&m, 0, 1, -0.5), m);
    }

    #[test]
    fn test_refuses_when_row_would_be_starved() {
        // 0.9 * e^0.2 > 1 leaves nothing for the other three entries
        // (only row 0 matters for the guard).
        let m = Matrix::from_rows([
            [Complex64::new(0.9, 0.0), Complex64::new(0.3, 0.0), Complex64::new(0.3, 0.0), Complex64::new(0.1, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
            [Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0), Complex64::new(0.0, 0.0)],
        ]);
        assert_eq!(edit_magnitude_at_origin(&m, 0.2), Ok(m));
    }

    #[test]
    fn test_degenerate_repair_returns_input() {
        // Rows 1..3 are zero, so the repair cannot build a basis.
        let mut m = Matrix::zero();
        m[(0, 0)] = Complex64::new(0.5, 0.0);
        m[(0, 1)] = Complex64::new(0.5, 0.0);
        m[(0, 2)] = Complex64::new(0.5, 0.0);
        m[(0, 3)] = Complex64::new(0.5, 0.0);
        assert_eq!(try_edit_magnitude_at(&m, 0, 0, 0.1), Err(GateError::DegenerateBasis { index: 1 }));
        assert_eq!(edit_magnitude_at(&m, 0, 0, 0.1), m);
    }

    #[test]
    fn test_edit_request_dispatch() {
        let m = hh();
        let phase_req = EditRequest::Phase { row: 0, col: 1, phi: 0.7 };
        assert_eq!(phase_req.apply(&m), edit_phase_at(&m, 0, 1, 0.7));
        let mag_req = EditRequest::Magnitude { row: 3, col: 0, delta: 0.1 };
        assert_eq!(mag_req.apply(&m), edit_magnitude_at(&m, 3, 0, 0.1));
    }

    #[test]
    #[should_panic(expected = "outside a 4x4 matrix")]
    fn test_out_of_range_index_panics() {
        let _ = edit_phase_at(&Matrix::identity(), 4, 0, 1.0);
    }
}
