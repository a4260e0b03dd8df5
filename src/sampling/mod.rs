// src/sampling/mod.rs

//! Random inputs for the search: Haar-random target unitaries and
//! non-wasteful gate sequences.
//!
//! All sampling takes an explicit random source so callers can seed it.

pub mod generator;

pub use generator::{
    is_non_wasteful, next_gate, non_wasteful_random_gates, GeneratorState, NonWastefulGenerator,
};

use crate::core::{orthonormalize_rows, GateError, Matrix, DIM};
use num_complex::Complex64;
use rand::prelude::*;
use rand_distr::StandardNormal;
use tracing::warn;

/// A matrix of i.i.d. standard complex Gaussians (real and imaginary parts
/// each `N(0, 1)`).
pub fn random_gaussian<R: Rng + ?Sized>(rng: &mut R) -> Matrix {
    let mut m = Matrix::zero();
    for i in 0..DIM {
        for j in 0..DIM {
            m[(i, j)] = Complex64::new(rng.sample(StandardNormal), rng.sample(StandardNormal));
        }
    }
    m
}

/// One Gram-Schmidt pass over a Gaussian matrix. Fails only on the
/// probability-zero event of linearly dependent draws.
pub fn try_random_unitary<R: Rng + ?Sized>(rng: &mut R) -> Result<Matrix, GateError> {
    orthonormalize_rows(&random_gaussian(rng))
}

/// Samples a Haar-random 4×4 unitary.
///
/// Orthonormalizing a matrix of independent complex Gaussians yields the
/// Haar measure on U(4). A degenerate draw is discarded and redrawn.
pub fn random_unitary<R: Rng + ?Sized>(rng: &mut R) -> Matrix {
    loop {
        match try_random_unitary(rng) {
            Ok(u) => return u,
            Err(e) => warn!(error = %e, "discarding degenerate Gaussian draw"),
        }
    }
}
