// src/core/matrix.rs

//! Fixed-size complex linear algebra for the two-qubit state space.
//!
//! Everything here works on 4-element vectors and 4×4 matrices. The
//! dimension never changes, so plain arrays are used instead of a general
//! matrix library and every value is `Copy`.

use super::constants::gate_constants::DIM;
use num_complex::Complex64;
use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Index, IndexMut, Mul};

/// One row or column of the 2-qubit space (dimension `2^2`).
pub type Vector = [Complex64; DIM];

/// A 4×4 complex matrix in row-major order: `m[(i, j)]` is row `i`, column `j`.
///
/// Operators produced by this crate are unitary (`M†M = MM† = I`) within
/// numerical tolerance; see `crate::validation` for the checks.
#[derive(Debug, Clone, Copy, PartialEq)] // Avoid Eq for floating-point complex numbers
pub struct Matrix {
    entries: [Vector; DIM],
}

impl Matrix {
    /// The all-zero matrix.
    pub fn zero() -> Self {
        Self { entries: [[Complex64::zero(); DIM]; DIM] }
    }

    /// The identity matrix. Entries are exact `0` and `1`.
    pub fn identity() -> Self {
        let mut m = Self::zero();
        for i in 0..DIM {
            m.entries[i][i] = Complex64::one();
        }
        m
    }

    /// Builds a matrix from its rows.
    pub fn from_rows(rows: [Vector; DIM]) -> Self {
        Self { entries: rows }
    }

    /// Builds a matrix from real entries, row-major. Handy for permutation
    /// matrices and tests.
    pub fn from_real(rows: [[f64; DIM]; DIM]) -> Self {
        let mut m = Self::zero();
        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                m.entries[i][j] = Complex64::new(value, 0.0);
            }
        }
        m
    }

    /// The rows as vectors.
    pub fn rows(&self) -> [Vector; DIM] {
        self.entries
    }

    /// Row `i`.
    pub fn row(&self, i: usize) -> Vector {
        self.entries[i]
    }

    /// Column `j`.
    pub fn column(&self, j: usize) -> Vector {
        std::array::from_fn(|i| self.entries[i][j])
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> Complex64 {
        self.entries[i][j]
    }

    /// Standard matrix product `self · rhs`.
    ///
    /// Accumulation runs row by row, column by column, inner index last,
    /// so results are bit-for-bit reproducible.
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        let mut ans = Matrix::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                for k in 0..DIM {
                    ans.entries[i][j] += self.entries[i][k] * rhs.entries[k][j];
                }
            }
        }
        ans
    }

    /// Hermitian transpose: `result[i][j] = conj(self[j][i])`.
    pub fn dagger(&self) -> Matrix {
        let mut ans = Matrix::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                ans.entries[i][j] = self.entries[j][i].conj();
            }
        }
        ans
    }

    /// Sum of the diagonal.
    pub fn trace(&self) -> Complex64 {
        (0..DIM).map(|i| self.entries[i][i]).sum()
    }

    /// Swaps rows `a` and `b` in place. No-op when `a == b`.
    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.entries.swap(a, b);
    }

    /// Largest entrywise distance `|self[i][j] - other[i][j]|`. NaN if any
    /// entry is NaN.
    pub fn max_deviation(&self, other: &Matrix) -> f64 {
        let mut worst = 0.0_f64;
        for i in 0..DIM {
            for j in 0..DIM {
                let d = (self.entries[i][j] - other.entries[i][j]).norm();
                if d.is_nan() {
                    return f64::NAN;
                }
                worst = worst.max(d);
            }
        }
        worst
    }

    /// `true` when every entry is within `tolerance` of `other`'s.
    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> bool {
        self.max_deviation(other) <= tolerance
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex64;

    fn index(&self, (i, j): (usize, usize)) -> &Complex64 {
        &self.entries[i][j]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Complex64 {
        &mut self.entries[i][j]
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}

impl Mul<&Matrix> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        self.multiply(rhs)
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.entries {
            write!(f, "[")?;
            for (j, c) in row.iter().enumerate() {
                write!(f, "{}{:>8.4}{:+.4}i", if j > 0 { ", " } else { "" }, c.re, c.im)?;
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Free-function form of [`Matrix::multiply`].
pub fn multiply(a: &Matrix, b: &Matrix) -> Matrix {
    a.multiply(b)
}

/// Free-function form of [`Matrix::dagger`].
pub fn dagger(u: &Matrix) -> Matrix {
    u.dagger()
}

// --- Vector helpers ---

/// Inner product `⟨u, v⟩ = Σ conj(u_i) · v_i` (conjugate-linear in `u`).
pub fn inner(u: &Vector, v: &Vector) -> Complex64 {
    u.iter().zip(v.iter()).map(|(a, b)| a.conj() * b).sum()
}

/// `s · u`
pub fn scale(s: Complex64, u: &Vector) -> Vector {
    u.map(|c| c * s)
}

/// `u - v`
pub fn sub(u: &Vector, v: &Vector) -> Vector {
    std::array::from_fn(|i| u[i] - v[i])
}

/// Euclidean norm `‖u‖`.
pub fn norm(u: &Vector) -> f64 {
    u.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix {
        let mut m = Matrix::zero();
        for i in 0..DIM {
            for j in 0..DIM {
                m[(i, j)] = Complex64::new((i * DIM + j) as f64, i as f64 - j as f64);
            }
        }
        m
    }

    #[test]
    fn test_zero_and_identity() {
        let z = Matrix::zero();
        let id = Matrix::identity();
        for i in 0..DIM {
            for j in 0..DIM {
                assert_eq!(z[(i, j)], Complex64::zero());
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_eq!(id[(i, j)], Complex64::new(expected, 0.0));
            }
        }
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = sample();
        assert_eq!(m.multiply(&Matrix::identity()), m);
        assert_eq!(Matrix::identity() * m, m);
    }

    #[test]
    fn test_multiply_against_hand_computed_entry() {
        let a = sample();
        let b = a.dagger();
        let p = multiply(&a, &b);
        let mut expected = Complex64::zero();
        for k in 0..DIM {
            expected += a[(1, k)] * b[(k, 2)];
        }
        assert_eq!(p[(1, 2)], expected);
    }

    #[test]
    fn test_dagger_conjugate_transposes() {
        let m = sample();
        let d = dagger(&m);
        for i in 0..DIM {
            for j in 0..DIM {
                assert_eq!(d[(i, j)], m[(j, i)].conj());
            }
        }
        assert_eq!(d.dagger(), m);
    }

    #[test]
    fn test_operations_leave_inputs_untouched() {
        let m = sample();
        let before = m;
        let _ = m.dagger();
        let _ = m.multiply(&m);
        let _ = m.trace();
        assert_eq!(m, before);
    }

    #[test]
    fn test_copy_is_independent() {
        let original = sample();
        let mut copy = original;
        copy[(0, 0)] = Complex64::new(99.0, 0.0);
        copy.swap_rows(1, 3);
        assert_eq!(original, sample());
        assert_ne!(copy, original);
    }

    #[test]
    fn test_rows_and_columns() {
        let m = sample();
        assert_eq!(m.row(2)[3], m[(2, 3)]);
        assert_eq!(m.column(3)[2], m[(2, 3)]);
        assert_eq!(Matrix::from_rows(m.rows()), m);
    }

    #[test]
    fn test_vector_helpers() {
        let u: Vector = [Complex64::new(0.0, 1.0), Complex64::one(), Complex64::zero(), Complex64::zero()];
        // conj(i) * i + 1 * 1 = 2
        assert_eq!(inner(&u, &u), Complex64::new(2.0, 0.0));
        assert!((norm(&u) - 2.0_f64.sqrt()).abs() < 1e-12);
        let d = sub(&u, &scale(Complex64::new(2.0, 0.0), &u));
        assert_eq!(d[1], Complex64::new(-1.0, 0.0));
    }
}
